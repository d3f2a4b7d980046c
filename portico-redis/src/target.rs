//! Projection onto the native Redis client options.
//!
//! The generic `Host` and `Database` fields live under different names in
//! the native shape (`Addr`, `DB`), so those two carry rename rules that
//! fire ahead of structural matching and copy even when the value is the
//! zero default. Everything else matches structurally; fields the native
//! shape does not expose (retry backoffs, pool bookkeeping the Rust driver
//! keeps internal) simply do not apply and are skipped.

use std::time::Duration;

use portico_core::{Draft, Rule, Target, Value, project};

use crate::error::RedisResult;

/// The native-shaped target schema for Redis.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RedisTarget {
    /// Transport type, `tcp` or `unix`.
    pub network: String,
    /// Server address, `host:port` (or a socket path for `unix`).
    pub addr: String,
    /// AUTH password.
    pub password: String,
    /// Logical database number.
    pub db: i64,
    /// Timeout for establishing a connection.
    pub dial_timeout: Option<Duration>,
    /// Timeout for socket reads.
    pub read_timeout: Option<Duration>,
    /// Timeout for socket writes.
    pub write_timeout: Option<Duration>,
}

impl Target for RedisTarget {
    fn set_field(&mut self, name: &str, value: &Value) -> bool {
        match (name, value) {
            ("Network", Value::Str(s)) => {
                self.network = s.clone();
                true
            }
            ("Addr", Value::Str(s)) => {
                self.addr = s.clone();
                true
            }
            ("Password", Value::Str(s)) => {
                self.password = s.clone();
                true
            }
            ("DB", Value::Int(n)) => {
                self.db = *n;
                true
            }
            ("DialTimeout", Value::Duration(d)) => {
                self.dial_timeout = Some(*d);
                true
            }
            ("ReadTimeout", Value::Duration(d)) => {
                self.read_timeout = Some(*d);
                true
            }
            ("WriteTimeout", Value::Duration(d)) => {
                self.write_timeout = Some(*d);
                true
            }
            _ => false,
        }
    }
}

fn rules() -> Vec<(&'static str, Rule<RedisTarget>)> {
    vec![
        ("Host", Rule::Rename("Addr")),
        ("Database", Rule::Rename("DB")),
    ]
}

/// Project a composed draft onto the native target.
pub fn project_target(draft: &Draft) -> RedisResult<RedisTarget> {
    Ok(project(draft, &rules())?)
}

impl RedisTarget {
    /// Split the address into host and port (default 6379).
    pub fn host_and_port(&self) -> (&str, u16) {
        match self.addr.rsplit_once(':') {
            Some((host, port)) => (host, port.parse().unwrap_or(6379)),
            None => (self.addr.as_str(), 6379),
        }
    }

    /// Convert to the driver's connection info.
    pub fn to_connection_info(&self) -> redis::ConnectionInfo {
        let addr = if self.network == "unix" {
            redis::ConnectionAddr::Unix(self.addr.clone().into())
        } else {
            let (host, port) = self.host_and_port();
            redis::ConnectionAddr::Tcp(host.to_string(), port)
        };

        redis::ConnectionInfo {
            addr,
            redis: redis::RedisConnectionInfo {
                db: self.db,
                username: None,
                password: (!self.password.is_empty()).then(|| self.password.clone()),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use portico_core::compose;

    use super::*;
    use crate::config::{profile, with_database, with_host, with_password};

    #[test]
    fn test_rename_rule_fires_ahead_of_structural_matching() {
        let draft = compose(&profile(), &[with_host("localhost:6379")]);
        let target = project_target(&draft).unwrap();
        assert_eq!(target.addr, "localhost:6379");
    }

    #[test]
    fn test_rename_copies_zero_defaults() {
        // Host is generic-default "" and Database 0; both still land on the
        // renamed target fields.
        let target = project_target(&profile().draft()).unwrap();
        assert_eq!(target.addr, "");
        assert_eq!(target.db, 0);
    }

    #[test]
    fn test_structural_fields() {
        let draft = compose(&profile(), &[with_password("secret"), with_database(2)]);
        let target = project_target(&draft).unwrap();
        assert_eq!(target.network, "tcp");
        assert_eq!(target.password, "secret");
        assert_eq!(target.db, 2);
        assert_eq!(target.read_timeout, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_connection_info_tcp() {
        let draft = compose(&profile(), &[with_host("cache.internal:6380")]);
        let info = project_target(&draft).unwrap().to_connection_info();
        assert_eq!(
            info.addr,
            redis::ConnectionAddr::Tcp("cache.internal".to_string(), 6380)
        );
        assert_eq!(info.redis.password, None);
    }

    #[test]
    fn test_connection_info_unix_socket() {
        let draft = compose(
            &profile(),
            &[
                crate::config::with_network("unix"),
                with_host("/var/run/redis.sock"),
            ],
        );
        let info = project_target(&draft).unwrap().to_connection_info();
        assert!(matches!(info.addr, redis::ConnectionAddr::Unix(_)));
    }
}
