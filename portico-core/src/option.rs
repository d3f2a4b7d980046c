//! Composable connection options.
//!
//! The functional-options pattern: an option is a named, reusable mutation
//! applied to a draft. Options compose by sequential application; options
//! touching disjoint fields commute, options touching the same field are
//! last-write-wins.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::draft::Draft;
use crate::value::Value;

/// A named, composable mutation over a [`Draft`].
///
/// Options hold no state beyond their captured arguments and may be reused
/// across composition calls; every composition mutates its own fresh draft,
/// so no synchronization is involved.
#[derive(Clone)]
pub struct ConnectOption {
    name: &'static str,
    apply: Arc<dyn Fn(&mut Draft) + Send + Sync>,
}

impl ConnectOption {
    /// Create an option from an arbitrary mutation.
    pub fn new(name: &'static str, apply: impl Fn(&mut Draft) + Send + Sync + 'static) -> Self {
        Self {
            name,
            apply: Arc::new(apply),
        }
    }

    /// Option setting a string field.
    pub fn str(field: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        Self::new(field, move |draft| draft.set(field, Value::Str(value.clone())))
    }

    /// Option setting a boolean field.
    pub fn boolean(field: &'static str, value: bool) -> Self {
        Self::new(field, move |draft| draft.set(field, Value::Bool(value)))
    }

    /// Option setting an integer field.
    pub fn int(field: &'static str, value: i64) -> Self {
        Self::new(field, move |draft| draft.set(field, Value::Int(value)))
    }

    /// Option setting a duration field.
    pub fn duration(field: &'static str, value: Duration) -> Self {
        Self::new(field, move |draft| draft.set(field, Value::Duration(value)))
    }

    /// Option appending to a host-list field, deduplicating at insertion.
    pub fn hosts<I, S>(field: &'static str, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let hosts: Vec<String> = hosts.into_iter().map(Into::into).collect();
        Self::new(field, move |draft| {
            draft.push_hosts(field, hosts.iter().cloned())
        })
    }

    /// The option's name (the field it targets, for diagnostics).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply this option to a draft.
    pub fn apply(&self, draft: &mut Draft) {
        (self.apply)(draft);
    }
}

impl fmt::Debug for ConnectOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectOption")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendKind;
    use crate::draft::{Profile, Role};

    fn profile() -> Profile {
        Profile::new(BackendKind::Redis)
            .query("Host", Value::str(""))
            .query("Database", Value::Int(0))
            .field("Hosts", Role::Hosts, Value::list(Vec::<String>::new()))
    }

    #[test]
    fn test_option_is_idempotent() {
        let opt = ConnectOption::str("Host", "localhost:6379");
        let mut once = profile().draft();
        opt.apply(&mut once);
        let mut twice = profile().draft();
        opt.apply(&mut twice);
        opt.apply(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_host_option_reusable_across_drafts() {
        let opt = ConnectOption::hosts("Hosts", ["a:1", "a:1", "b:2"]);
        for _ in 0..2 {
            let mut draft = profile().draft();
            opt.apply(&mut draft);
            assert_eq!(draft.value("Hosts"), Some(&Value::list(["a:1", "b:2"])));
        }
    }

    #[test]
    fn test_debug_shows_name() {
        let opt = ConnectOption::int("Database", 3);
        assert!(format!("{:?}", opt).contains("Database"));
    }
}
