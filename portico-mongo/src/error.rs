//! Error types for the MongoDB adapter.

use portico_core::CoreError;
use thiserror::Error;

/// Result type for MongoDB adapter operations.
pub type MongoResult<T> = Result<T, MongoError>;

/// Errors that can occur while building a MongoDB client.
#[derive(Error, Debug)]
pub enum MongoError {
    /// MongoDB driver error, propagated verbatim.
    #[error("mongodb error: {0}")]
    Driver(#[from] mongodb::error::Error),

    /// Composition, projection or materialization failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MongoError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
