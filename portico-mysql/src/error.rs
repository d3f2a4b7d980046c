//! Error types for the MySQL adapter.

use portico_core::CoreError;
use thiserror::Error;

/// Result type for MySQL adapter operations.
pub type MysqlResult<T> = Result<T, MysqlError>;

/// Errors that can occur while building a MySQL connection.
#[derive(Error, Debug)]
pub enum MysqlError {
    /// MySQL driver error, propagated verbatim.
    #[error("mysql error: {0}")]
    Driver(#[from] mysql_async::Error),

    /// Composition, projection or materialization failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An administrative schema-creation statement failed.
    #[error("schema creation failed for '{database}': {reason}")]
    SchemaCreation {
        /// The database that was being created.
        database: String,
        /// Why the statement failed.
        reason: String,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl MysqlError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a schema creation error.
    pub fn schema_creation(database: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SchemaCreation {
            database: database.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_creation_display() {
        let err = MysqlError::schema_creation("app", "access denied");
        let msg = err.to_string();
        assert!(msg.contains("app"));
        assert!(msg.contains("access denied"));
    }
}
