//! MongoDB backend adapter for Portico.
//!
//! Supplies the document-store default profile (pool sizes, timeouts,
//! replica set, TLS and write-concern flags), materializes the canonical
//! `mongodb://` URI with a deterministic parameter order, and hands it to
//! the `mongodb` driver.
//!
//! # Example
//!
//! ```rust,ignore
//! use portico_mongo::{connect, with_hosts, with_password, with_username};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = connect(&[
//!         with_hosts(["localhost:27017"]),
//!         with_username("root"),
//!         with_password("root"),
//!     ])
//!     .await?;
//!
//!     // Use the client...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connect;
pub mod error;

pub use config::{
    profile, with_connect_timeout, with_direct_connection, with_hosts, with_max_idle_time,
    with_max_pool_size, with_min_pool_size, with_password, with_replica_set,
    with_server_selection_timeout, with_socket_timeout, with_tls, with_username,
    with_write_concern,
};
pub use connect::{connect, uri, uri_for_draft};
pub use error::{MongoError, MongoResult};
