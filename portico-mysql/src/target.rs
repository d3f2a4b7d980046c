//! Projection onto the native `mysql_async` options.

use std::time::Duration;

use mysql_async::{OptsBuilder, PoolConstraints, PoolOpts};
use portico_core::{Draft, Rule, Target, Value, project};

use crate::error::MysqlResult;

/// The `mysql_async`-shaped target schema drafts are projected onto.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MysqlTarget {
    /// Host, optionally `host:port`.
    pub host: String,
    /// Username, when non-empty in the draft.
    pub username: Option<String>,
    /// Password, when non-empty in the draft.
    pub password: Option<String>,
    /// Selected database, when non-empty in the draft.
    pub database: Option<String>,
    /// Pool floor (idle connections kept alive).
    pub max_idle_connections: Option<i64>,
    /// Pool ceiling.
    pub max_open_connections: Option<i64>,
    /// Maximum connection lifetime.
    pub max_connection_lifetime: Option<Duration>,
}

impl Target for MysqlTarget {
    fn set_field(&mut self, name: &str, value: &Value) -> bool {
        match (name, value) {
            ("Host", Value::Str(s)) => {
                self.host = s.clone();
                true
            }
            ("Username", Value::Str(s)) => {
                self.username = Some(s.clone());
                true
            }
            ("Password", Value::Str(s)) => {
                self.password = Some(s.clone());
                true
            }
            ("Database", Value::Str(s)) => {
                self.database = Some(s.clone());
                true
            }
            ("MaxIdleConnections", Value::Int(n)) => {
                self.max_idle_connections = Some(*n);
                true
            }
            ("MaxOpenConnections", Value::Int(n)) => {
                self.max_open_connections = Some(*n);
                true
            }
            ("MaxConnectionLifeTime", Value::Duration(d)) => {
                self.max_connection_lifetime = Some(*d);
                true
            }
            _ => false,
        }
    }
}

/// Field rules for the MySQL projection: the host copies even when left at
/// its default, and the DSN-only parameters never reach the native options.
fn rules() -> Vec<(&'static str, Rule<MysqlTarget>)> {
    vec![
        ("Host", Rule::Rename("Host")),
        ("charset", Rule::Skip),
        ("parseTime", Rule::Skip),
        ("loc", Rule::Skip),
    ]
}

/// Project a composed draft onto the native target.
pub fn project_target(draft: &Draft) -> MysqlResult<MysqlTarget> {
    Ok(project(draft, &rules())?)
}

impl MysqlTarget {
    /// Split the host field into hostname and port (default 3306).
    pub fn host_and_port(&self) -> (&str, u16) {
        match self.host.rsplit_once(':') {
            Some((host, port)) => (host, port.parse().unwrap_or(3306)),
            None => (self.host.as_str(), 3306),
        }
    }

    /// Convert to a `mysql_async` options builder, with pool constraints
    /// taken from the pool fields.
    pub fn to_opts_builder(&self) -> OptsBuilder {
        let (host, port) = self.host_and_port();
        let mut builder = OptsBuilder::default()
            .ip_or_hostname(host)
            .tcp_port(port)
            .db_name(self.database.as_deref())
            .user(self.username.as_deref())
            .pass(self.password.as_deref())
            .conn_ttl(self.max_connection_lifetime);

        let min = self.max_idle_connections.unwrap_or(0).max(0) as usize;
        let max = self.max_open_connections.unwrap_or(0).max(1) as usize;
        builder = builder.pool_opts(
            PoolOpts::new()
                .with_constraints(PoolConstraints::new(min.min(max), max).unwrap_or_default()),
        );

        builder
    }

    /// Same options without a selected database, for the administrative
    /// connection that creates the schema.
    pub fn to_admin_opts_builder(&self) -> OptsBuilder {
        let mut admin = self.clone();
        admin.database = None;
        admin.to_opts_builder()
    }
}

#[cfg(test)]
mod tests {
    use portico_core::compose;

    use super::*;
    use crate::config::{profile, with_database, with_host, with_max_open_connections, with_username};

    #[test]
    fn test_projection_copies_defaults_and_overrides() {
        let draft = compose(
            &profile(),
            &[
                with_host("db.internal:3307"),
                with_username("admin"),
                with_database("app"),
                with_max_open_connections(25),
            ],
        );
        let target = project_target(&draft).unwrap();

        assert_eq!(target.host, "db.internal:3307");
        assert_eq!(target.username.as_deref(), Some("admin"));
        assert_eq!(target.database.as_deref(), Some("app"));
        assert_eq!(target.max_open_connections, Some(25));
        // Non-zero profile defaults are copied.
        assert_eq!(target.max_idle_connections, Some(10));
        // Zero defaults are treated as unset.
        assert_eq!(target.password, None);
    }

    #[test]
    fn test_dsn_only_fields_are_skipped() {
        let target = project_target(&profile().draft()).unwrap();
        // The target has no charset/parseTime/loc slots; Skip rules make
        // that explicit rather than relying on the structural miss.
        assert_eq!(target.host, "127.0.0.1");
    }

    #[test]
    fn test_host_and_port_split() {
        let mut target = MysqlTarget::default();
        target.host = "db:3307".into();
        assert_eq!(target.host_and_port(), ("db", 3307));
        target.host = "localhost".into();
        assert_eq!(target.host_and_port(), ("localhost", 3306));
    }
}
