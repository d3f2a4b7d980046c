//! MySQL backend adapter for Portico.
//!
//! Supplies the relational default profile (utf8mb4, parsed time columns,
//! pool limits), materializes the `user:pass@tcp(host)/db` DSN, projects drafts onto
//! `mysql_async` options, and creates the selected database when absent
//! before handing the configuration to the driver.
//!
//! # Example
//!
//! ```rust,ignore
//! use portico_mysql::{connect, with_database, with_host, with_password, with_username};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = connect(&[
//!         with_host("127.0.0.1:3306"),
//!         with_username("root"),
//!         with_password("root"),
//!         with_database("app"),
//!     ])
//!     .await?;
//!
//!     // Use the pool...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connect;
pub mod dsn;
pub mod error;
pub mod schema;
pub mod target;

pub use config::{
    profile, with_charset, with_database, with_host, with_location, with_max_connection_lifetime,
    with_max_idle_connections, with_max_open_connections, with_parse_time, with_password,
    with_username,
};
pub use connect::connect;
pub use dsn::{dsn, dsn_for_draft, dsn_without_database};
pub use error::{MysqlError, MysqlResult};
pub use schema::{AdminExec, ensure_database};
pub use target::{MysqlTarget, project_target};
