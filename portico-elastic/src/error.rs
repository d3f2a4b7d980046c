//! Error types for the Elasticsearch adapter.

use portico_core::CoreError;
use thiserror::Error;

/// Result type for Elasticsearch adapter operations.
pub type ElasticResult<T> = Result<T, ElasticError>;

/// Errors that can occur while building an Elasticsearch client.
#[derive(Error, Debug)]
pub enum ElasticError {
    /// Client error, propagated verbatim.
    #[error("elasticsearch error: {0}")]
    Driver(#[from] elasticsearch::Error),

    /// Transport construction error, propagated verbatim.
    #[error("transport build error: {0}")]
    Build(#[from] elasticsearch::http::transport::BuildError),

    /// Composition or projection failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ElasticError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
