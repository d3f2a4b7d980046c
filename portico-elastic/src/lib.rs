//! Elasticsearch backend adapter for Portico.
//!
//! Supplies the search default profile (node URLs, basic auth, request
//! timeout, certificate validation), projects drafts onto the transport
//! configuration (parsing URL strings through a custom rule) and builds
//! an `elasticsearch` client from the result.
//!
//! # Example
//!
//! ```rust,ignore
//! use portico_elastic::{connect, with_basic_auth, with_url};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = connect(&[
//!         with_url("http://localhost:9200"),
//!         with_basic_auth("elastic", "changeme"),
//!     ])?;
//!
//!     // Use the client...
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod connect;
pub mod error;
pub mod target;

pub use config::{
    DEFAULT_URL, profile, with_basic_auth, with_insecure, with_timeout, with_url, with_urls,
};
pub use connect::connect;
pub use error::{ElasticError, ElasticResult};
pub use target::{ElasticTarget, project_target};
