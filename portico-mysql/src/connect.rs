//! Connection construction.

use mysql_async::{Conn, Opts, Pool};
use portico_core::{ConnectOption, compose};
use tracing::{debug, info};

use crate::config::profile;
use crate::error::MysqlResult;
use crate::schema::ensure_database;
use crate::target::project_target;

/// Compose the options, create the selected database if it is absent, and
/// return a `mysql_async` pool built from the projected native options.
/// Driver errors are returned unchanged.
pub async fn connect(options: &[ConnectOption]) -> MysqlResult<Pool> {
    let draft = compose(&profile(), options);
    let target = project_target(&draft)?;

    if let Some(database) = target.database.as_deref().filter(|db| !db.is_empty()) {
        debug!(database, "checking database existence before connecting");
        let mut admin = Conn::new(Opts::from(target.to_admin_opts_builder())).await?;
        let result = ensure_database(&mut admin, database, draft.str_value("charset")).await;
        admin.disconnect().await?;
        result?;
    }

    let pool = Pool::new(Opts::from(target.to_opts_builder()));

    info!(
        host = %target.host,
        database = target.database.as_deref().unwrap_or(""),
        max_open = target.max_open_connections.unwrap_or(0),
        "MySQL connection pool created"
    );

    Ok(pool)
}
