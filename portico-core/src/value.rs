//! Semantic field values.
//!
//! Every configuration field carries one of a small set of semantic types.
//! An explicit enum keeps zero-value semantics and query rendering spelled
//! out in one place instead of being derived from runtime type inspection.

use std::time::Duration;

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A string value.
    Str(String),
    /// A boolean flag.
    Bool(bool),
    /// A signed integer (pool sizes, retry counts, database numbers).
    Int(i64),
    /// A duration (timeouts, lifetimes). Rendered as nanoseconds.
    Duration(Duration),
    /// An ordered list of strings with insertion-time deduplication
    /// (host lists).
    List(Vec<String>),
}

/// The semantic kind of a [`Value`], used for type-checked overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// String.
    Str,
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// Duration.
    Duration,
    /// String list.
    List,
}

impl Value {
    /// Build a string value.
    pub fn str(s: impl Into<String>) -> Self {
        Self::Str(s.into())
    }

    /// Build a list value.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// The semantic kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Str(_) => ValueKind::Str,
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Duration(_) => ValueKind::Duration,
            Self::List(_) => ValueKind::List,
        }
    }

    /// Whether this value is the zero value of its kind.
    ///
    /// This is the documented "zero means unset" heuristic: a field
    /// explicitly set to its kind's zero value is indistinguishable from a
    /// field that was never set, and structural projection skips it. A
    /// non-zero default (say a 30-second timeout) is always copied.
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Str(s) => s.is_empty(),
            Self::Bool(b) => !b,
            Self::Int(n) => *n == 0,
            Self::Duration(d) => d.is_zero(),
            Self::List(items) => items.is_empty(),
        }
    }

    /// Render this value as a connection-string parameter value.
    ///
    /// Durations render as their integer nanosecond count, booleans as
    /// `true`/`false`, lists as a comma join. No escaping happens here;
    /// the materializer percent-encodes where the segment requires it.
    pub fn render(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::Duration(d) => d.as_nanos().to_string(),
            Self::List(items) => items.join(","),
        }
    }

    /// Borrow the string content, if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean content, if this is a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer content, if this is an integer value.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// The duration content, if this is a duration value.
    pub fn as_duration(&self) -> Option<Duration> {
        match self {
            Self::Duration(d) => Some(*d),
            _ => None,
        }
    }

    /// Borrow the list content, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}
