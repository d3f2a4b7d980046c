//! Error types for the composition and materialization engine.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors produced by the core engine.
///
/// Adapter crates wrap this alongside their driver errors; driver errors are
/// always propagated verbatim, never reinterpreted.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Malformed option input. No option is validated today; the variant is
    /// reserved so adapter signatures do not change when validation lands.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A field could not be projected onto the target schema. No partial
    /// target is ever returned.
    #[error("projection failed for field '{field}': {reason}")]
    Projection {
        /// The draft field that failed to project.
        field: String,
        /// Why projection failed.
        reason: String,
    },

    /// The materialized connection string failed the round-trip URI parse
    /// check.
    #[error("materialized string is not a valid URI: {0}")]
    UriEncoding(String),
}

impl CoreError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a projection error for the given field.
    pub fn projection(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Projection {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a URI encoding error.
    pub fn uri_encoding(message: impl Into<String>) -> Self {
        Self::UriEncoding(message.into())
    }
}
