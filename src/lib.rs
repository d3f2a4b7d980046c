//! # Portico
//!
//! A connection-configuration layer for heterogeneous database and search
//! clients.
//!
//! Portico lets a caller describe desired connection behavior as a small set
//! of named, optional settings, merges them with backend-specific defaults,
//! and materializes the result into the exact configuration object or
//! connection string each client library expects:
//!
//! - MySQL (`portico-mysql`, behind the `mysql` feature)
//! - MongoDB (`portico-mongo`, behind the `mongo` feature)
//! - Elasticsearch (`portico-elastic`, behind the `elastic` feature)
//! - Redis (`portico-redis`, behind the `redis` feature)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portico::mysql::{self, with_database, with_host, with_password, with_username};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = mysql::connect(&[
//!         with_host("127.0.0.1:3306"),
//!         with_username("root"),
//!         with_password("root"),
//!         with_database("app"),
//!     ])
//!     .await?;
//!
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The generic option-composition and materialization engine.
pub mod core {
    pub use portico_core::*;
}

/// MySQL adapter.
#[cfg(feature = "mysql")]
#[cfg_attr(docsrs, doc(cfg(feature = "mysql")))]
pub mod mysql {
    pub use portico_mysql::*;
}

/// MongoDB adapter.
#[cfg(feature = "mongo")]
#[cfg_attr(docsrs, doc(cfg(feature = "mongo")))]
pub mod mongo {
    pub use portico_mongo::*;
}

/// Elasticsearch adapter.
#[cfg(feature = "elastic")]
#[cfg_attr(docsrs, doc(cfg(feature = "elastic")))]
pub mod elastic {
    pub use portico_elastic::*;
}

/// Redis adapter.
#[cfg(feature = "redis")]
#[cfg_attr(docsrs, doc(cfg(feature = "redis")))]
pub mod redis {
    pub use portico_redis::*;
}

// Re-export key types at the crate root
pub use portico_core::{BackendKind, ConnectOption, CoreError, Profile, Value};
