//! MongoDB default profile and connection options.

use std::time::Duration;

use portico_core::{BackendKind, ConnectOption, Profile, Role, Value};

/// The MongoDB baseline. Field declaration order is URI parameter order;
/// duration parameters render as integer nanosecond counts.
pub fn profile() -> Profile {
    Profile::new(BackendKind::Mongodb)
        .field("hosts", Role::Hosts, Value::list(Vec::<String>::new()))
        .field("username", Role::User, Value::str(""))
        .field("password", Role::Password, Value::str(""))
        .query("connectTimeoutMS", Value::Duration(Duration::from_secs(30)))
        .query("maxPoolSize", Value::Int(100))
        .query("replicaSet", Value::str("null"))
        .query("maxIdleTimeMS", Value::Duration(Duration::ZERO))
        .query("minPoolSize", Value::Int(0))
        .query("socketTimeoutMS", Value::Duration(Duration::from_secs(30)))
        .query(
            "serverSelectionTimeoutMS",
            Value::Duration(Duration::from_secs(10)),
        )
        .query("tls", Value::Bool(false))
        .query("w", Value::str("null"))
        .query("directConnection", Value::Bool(false))
}

/// Add `mongod` server hosts. Hosts already present are not added again;
/// first-insertion order is preserved.
pub fn with_hosts<I, S>(hosts: I) -> ConnectOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ConnectOption::hosts("hosts", hosts)
}

/// Set the user's username.
pub fn with_username(username: impl Into<String>) -> ConnectOption {
    ConnectOption::str("username", username)
}

/// Set the user's password.
pub fn with_password(password: impl Into<String>) -> ConnectOption {
    ConnectOption::str("password", password)
}

/// Time to wait before a TCP connection attempt times out. Default 30s.
pub fn with_connect_timeout(timeout: Duration) -> ConnectOption {
    ConnectOption::duration("connectTimeoutMS", timeout)
}

/// Maximum number of connections in the pool. Default 100.
pub fn with_max_pool_size(maximum: i64) -> ConnectOption {
    ConnectOption::int("maxPoolSize", maximum)
}

/// Replica set name for the cluster. Default `"null"`.
pub fn with_replica_set(replica: impl Into<String>) -> ConnectOption {
    ConnectOption::str("replicaSet", replica)
}

/// Maximum idle time before a pooled connection is closed. The zero default
/// means a connection may stay unused indefinitely.
pub fn with_max_idle_time(idle: Duration) -> ConnectOption {
    ConnectOption::duration("maxIdleTimeMS", idle)
}

/// Minimum number of connections the driver keeps in the pool. Default 0.
pub fn with_min_pool_size(minimum: i64) -> ConnectOption {
    ConnectOption::int("minPoolSize", minimum)
}

/// Time to wait for a socket read or write. Default 30s.
pub fn with_socket_timeout(timeout: Duration) -> ConnectOption {
    ConnectOption::duration("socketTimeoutMS", timeout)
}

/// Time to wait for server selection. Default 10s.
pub fn with_server_selection_timeout(timeout: Duration) -> ConnectOption {
    ConnectOption::duration("serverSelectionTimeoutMS", timeout)
}

/// Enable or disable TLS. Default false.
pub fn with_tls(tls: bool) -> ConnectOption {
    ConnectOption::boolean("tls", tls)
}

/// Write concern. Default `"null"`.
pub fn with_write_concern(w: impl Into<String>) -> ConnectOption {
    ConnectOption::str("w", w)
}

/// Bypass replica set discovery and connect directly. Default false.
pub fn with_direct_connection(direct: bool) -> ConnectOption {
    ConnectOption::boolean("directConnection", direct)
}
