//! `user:pass@tcp(host)/db` DSN materialization.
//!
//! MySQL's DSN dialect (`user:pass@tcp(host)/db?params`) is not URI-shaped,
//! so the adapter formats the fixed prefix itself and reuses the core's
//! declaration-ordered query renderer for the parameter segment. Output is
//! byte-stable for identical field values regardless of option order.

use portico_core::{ConnectOption, Draft, compose, query_segment};

use crate::config::profile;

/// Materialize the DSN for a composed draft.
pub fn dsn_for_draft(draft: &Draft) -> String {
    format!(
        "{}:{}@tcp({})/{}?{}",
        draft.str_value("Username"),
        draft.str_value("Password"),
        draft.str_value("Host"),
        draft.str_value("Database"),
        query_segment(draft),
    )
}

/// Materialize a DSN from options over the default profile.
pub fn dsn(options: &[ConnectOption]) -> String {
    dsn_for_draft(&compose(&profile(), options))
}

/// Materialize the administrative DSN: same credentials and host, no
/// database selected. Used for the connection that issues schema-creation
/// statements.
pub fn dsn_without_database(draft: &Draft) -> String {
    format!(
        "{}:{}@tcp({})/?{}",
        draft.str_value("Username"),
        draft.str_value("Password"),
        draft.str_value("Host"),
        query_segment(draft),
    )
}
