//! Redis default profile and connection options.

use std::time::Duration;

use portico_core::{BackendKind, ConnectOption, Profile, Value};

/// The Redis baseline: TCP transport, short dial and socket timeouts, a
/// small idle floor and an eight-hour connection age cap. Every field is
/// client-side; Redis has no connection-string product here.
pub fn profile() -> Profile {
    Profile::new(BackendKind::Redis)
        .local("Network", Value::str("tcp"))
        .local("Host", Value::str(""))
        .local("Password", Value::str(""))
        .local("Database", Value::Int(0))
        .local("MaxRetries", Value::Int(0))
        .local("MinRetryBackoff", Value::Duration(Duration::from_millis(8)))
        .local("MaxRetryBackoff", Value::Duration(Duration::from_millis(512)))
        .local("DialTimeout", Value::Duration(Duration::from_secs(5)))
        .local("ReadTimeout", Value::Duration(Duration::from_secs(3)))
        .local("WriteTimeout", Value::Duration(Duration::from_secs(3)))
        .local("MinIdleConns", Value::Int(10))
        .local("MaxConnAge", Value::Duration(Duration::from_secs(8 * 3600)))
        .local("PoolTimeout", Value::Duration(Duration::from_secs(4)))
        .local("IdleTimeout", Value::Duration(Duration::from_secs(5 * 60)))
        .local("IdleCheckFrequency", Value::Duration(Duration::from_secs(60)))
}

/// Set the server address, `host:port`.
pub fn with_host(host: impl Into<String>) -> ConnectOption {
    ConnectOption::str("Host", host)
}

/// Set the AUTH password.
pub fn with_password(password: impl Into<String>) -> ConnectOption {
    ConnectOption::str("Password", password)
}

/// Select a logical database. Default 0.
pub fn with_database(database: i64) -> ConnectOption {
    ConnectOption::int("Database", database)
}

/// Transport type, `tcp` or `unix`. Default `tcp`.
pub fn with_network(network: impl Into<String>) -> ConnectOption {
    ConnectOption::str("Network", network)
}

/// Maximum number of retries before giving up. Default 0 (no retry).
pub fn with_max_retries(times: i64) -> ConnectOption {
    ConnectOption::int("MaxRetries", times)
}

/// Minimum backoff between retries. Default 8ms.
pub fn with_min_retry_backoff(wait: Duration) -> ConnectOption {
    ConnectOption::duration("MinRetryBackoff", wait)
}

/// Maximum backoff between retries. Default 512ms.
pub fn with_max_retry_backoff(wait: Duration) -> ConnectOption {
    ConnectOption::duration("MaxRetryBackoff", wait)
}

/// Timeout for establishing new connections. Default 5s.
pub fn with_dial_timeout(timeout: Duration) -> ConnectOption {
    ConnectOption::duration("DialTimeout", timeout)
}

/// Timeout for socket reads. Default 3s.
pub fn with_read_timeout(timeout: Duration) -> ConnectOption {
    ConnectOption::duration("ReadTimeout", timeout)
}

/// Timeout for socket writes. Default 3s.
pub fn with_write_timeout(timeout: Duration) -> ConnectOption {
    ConnectOption::duration("WriteTimeout", timeout)
}

/// Minimum number of idle connections kept open. Default 10.
pub fn with_min_idle_conns(minimum: i64) -> ConnectOption {
    ConnectOption::int("MinIdleConns", minimum)
}

/// Maximum time to wait for a pooled connection. Default 4s.
pub fn with_pool_timeout(timeout: Duration) -> ConnectOption {
    ConnectOption::duration("PoolTimeout", timeout)
}

/// Idle time after which a pooled connection is closed. Default 5m.
pub fn with_idle_timeout(timeout: Duration) -> ConnectOption {
    ConnectOption::duration("IdleTimeout", timeout)
}
