//! Backend identification.

use std::fmt;

/// The backend a profile or draft belongs to.
///
/// Used for error context and logging; the adapters themselves are separate
/// crates and the core never dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    /// Relational database (MySQL).
    Mysql,
    /// Document store (MongoDB).
    Mongodb,
    /// Search index (Elasticsearch).
    Elasticsearch,
    /// Key-value cache (Redis).
    Redis,
}

impl BackendKind {
    /// The canonical lowercase name of this backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mysql => "mysql",
            Self::Mongodb => "mongodb",
            Self::Elasticsearch => "elasticsearch",
            Self::Redis => "redis",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
