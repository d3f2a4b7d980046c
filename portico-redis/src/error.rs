//! Error types for the Redis adapter.

use portico_core::CoreError;
use thiserror::Error;

/// Result type for Redis adapter operations.
pub type RedisResult<T> = Result<T, RedisError>;

/// Errors that can occur while building a Redis client.
#[derive(Error, Debug)]
pub enum RedisError {
    /// Redis driver error, propagated verbatim.
    #[error("redis error: {0}")]
    Driver(#[from] redis::RedisError),

    /// Composition or projection failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl RedisError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
