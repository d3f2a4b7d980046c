//! Redis backend adapter for Portico.
//!
//! Supplies the cache default profile (transport, timeouts, retry backoffs,
//! pool knobs), projects drafts onto the native client shape, where the
//! generic `Host` and `Database` fields become `Addr` and `DB`, and opens
//! a `redis` client from the result.
//!
//! # Example
//!
//! ```rust,ignore
//! use portico_redis::{connect, with_database, with_host, with_password};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = connect(&[
//!         with_host("localhost:6379"),
//!         with_password("secret"),
//!         with_database(1),
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
    profile, with_database, with_dial_timeout, with_host, with_idle_timeout, with_max_retries,
    with_max_retry_backoff, with_min_idle_conns, with_min_retry_backoff, with_network,
    with_password, with_pool_timeout, with_read_timeout, with_write_timeout,
};
pub use connect::connect;
pub use error::{RedisError, RedisResult};
pub use target::{RedisTarget, project_target};
