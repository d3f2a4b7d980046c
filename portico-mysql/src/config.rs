//! MySQL default profile and connection options.

use std::time::Duration;

use portico_core::{BackendKind, ConnectOption, Profile, Role, Value};

/// The MySQL baseline: utf8mb4, parsed time columns, local timezone, and
/// moderate pool limits. DSN parameter order is the declaration order below.
pub fn profile() -> Profile {
    Profile::new(BackendKind::Mysql)
        // The DSN keeps a single authority; the host is rendered by the
        // dsn module, not by the core materializer, so it stays a plain
        // string outside the URI-segment roles.
        .local("Host", Value::str("127.0.0.1"))
        .field("Username", Role::User, Value::str(""))
        .field("Password", Role::Password, Value::str(""))
        .field("Database", Role::Database, Value::str(""))
        .query("charset", Value::str("utf8mb4"))
        .query("parseTime", Value::Bool(true))
        .query("loc", Value::str("Local"))
        .local("MaxIdleConnections", Value::Int(10))
        .local("MaxOpenConnections", Value::Int(100))
        .local(
            "MaxConnectionLifeTime",
            Value::Duration(Duration::from_secs(30 * 60)),
        )
}

/// Set the server host, `host` or `host:port`.
pub fn with_host(host: impl Into<String>) -> ConnectOption {
    ConnectOption::str("Host", host)
}

/// Set the username.
pub fn with_username(username: impl Into<String>) -> ConnectOption {
    ConnectOption::str("Username", username)
}

/// Set the password.
pub fn with_password(password: impl Into<String>) -> ConnectOption {
    ConnectOption::str("Password", password)
}

/// Select a database. Empty means no database is selected and the DSN
/// carries an empty path segment.
pub fn with_database(database: impl Into<String>) -> ConnectOption {
    ConnectOption::str("Database", database)
}

/// Set the connection character set. Default `utf8mb4`.
pub fn with_charset(charset: impl Into<String>) -> ConnectOption {
    ConnectOption::str("charset", charset)
}

/// Enable or disable time-column parsing. Default `true`.
pub fn with_parse_time(parse_time: bool) -> ConnectOption {
    ConnectOption::boolean("parseTime", parse_time)
}

/// Set the connection timezone. Default `Local`.
pub fn with_location(location: impl Into<String>) -> ConnectOption {
    ConnectOption::str("loc", location)
}

/// Set the maximum number of idle pooled connections.
pub fn with_max_idle_connections(n: i64) -> ConnectOption {
    ConnectOption::int("MaxIdleConnections", n)
}

/// Set the maximum number of open connections.
pub fn with_max_open_connections(n: i64) -> ConnectOption {
    ConnectOption::int("MaxOpenConnections", n)
}

/// Set the maximum lifetime of a pooled connection.
pub fn with_max_connection_lifetime(lifetime: Duration) -> ConnectOption {
    ConnectOption::duration("MaxConnectionLifeTime", lifetime)
}
