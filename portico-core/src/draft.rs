//! Profiles and draft configurations.
//!
//! A [`Profile`] is a backend's fully populated baseline: an ordered set of
//! named, typed fields with their default values. A [`Draft`] is a private
//! copy of a profile that options mutate during one connection-construction
//! call. Drafts are created fresh per call and never shared; there is no
//! global configuration state.
//!
//! Field order is declaration order (the order `Profile::field` was called
//! in), and every walk over a draft (projection, materialization) follows
//! that order. This is what makes output byte-stable regardless of the order
//! options were supplied in.

use indexmap::IndexMap;
use tracing::debug;

use crate::backend::BackendKind;
use crate::value::Value;

/// What part of a connection string a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Username, rendered into the credentials segment.
    User,
    /// Password, rendered into the credentials segment.
    Password,
    /// Host list, rendered into the authority segment.
    Hosts,
    /// Database name, rendered into the path segment.
    Database,
    /// Rendered as a `name=value` query parameter.
    Query,
    /// Client-side only (pool sizes, lifetimes); never serialized.
    Local,
}

/// One named, typed field of a draft configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: &'static str,
    role: Role,
    default: Value,
    value: Value,
}

impl Field {
    /// The field's name. Query-role fields use this name verbatim as the
    /// parameter key.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The field's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// The current value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The profile default.
    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// Whether the current value still equals the profile default.
    pub fn is_default(&self) -> bool {
        self.value == self.default
    }
}

/// A backend's baseline configuration: named fields with defaults, in
/// declaration order.
#[derive(Debug, Clone)]
pub struct Profile {
    kind: BackendKind,
    fields: IndexMap<&'static str, Field>,
}

impl Profile {
    /// Create an empty profile for the given backend.
    pub fn new(kind: BackendKind) -> Self {
        Self {
            kind,
            fields: IndexMap::new(),
        }
    }

    /// Declare a field with its role and default value. Declaration order is
    /// preserved and determines serialization order.
    pub fn field(mut self, name: &'static str, role: Role, default: Value) -> Self {
        let field = Field {
            name,
            role,
            default: default.clone(),
            value: default,
        };
        self.fields.insert(name, field);
        self
    }

    /// Declare a query-role field.
    pub fn query(self, name: &'static str, default: Value) -> Self {
        self.field(name, Role::Query, default)
    }

    /// Declare a client-side-only field.
    pub fn local(self, name: &'static str, default: Value) -> Self {
        self.field(name, Role::Local, default)
    }

    /// The backend this profile belongs to.
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    /// Create a fresh draft copy. The profile itself is never mutated.
    pub fn draft(&self) -> Draft {
        Draft {
            kind: self.kind,
            fields: self.fields.clone(),
        }
    }
}

/// An in-progress configuration owned by a single connection-construction
/// call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    kind: BackendKind,
    fields: IndexMap<&'static str, Field>,
}

impl Draft {
    /// The backend this draft belongs to.
    pub fn kind(&self) -> BackendKind {
        self.kind
    }

    /// Overwrite a field's value.
    ///
    /// Options are total functions over the draft's field set: writing an
    /// unknown field or a value of the wrong kind is ignored (logged at
    /// debug), never an error.
    pub fn set(&mut self, name: &str, value: Value) {
        match self.fields.get_mut(name) {
            Some(field) if field.value.kind() == value.kind() => {
                field.value = value;
            }
            Some(field) => {
                debug!(
                    backend = %self.kind,
                    field = name,
                    expected = ?field.value.kind(),
                    got = ?value.kind(),
                    "ignoring option write with mismatched kind"
                );
            }
            None => {
                debug!(backend = %self.kind, field = name, "ignoring option write to unknown field");
            }
        }
    }

    /// Append hosts to a list field, suppressing duplicates at insertion
    /// time. First-insertion order is preserved; adding an already-present
    /// host is a no-op.
    pub fn push_hosts<I, S>(&mut self, name: &str, hosts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let Some(field) = self.fields.get_mut(name) else {
            debug!(backend = %self.kind, field = name, "ignoring host append to unknown field");
            return;
        };
        let Value::List(list) = &mut field.value else {
            debug!(backend = %self.kind, field = name, "ignoring host append to non-list field");
            return;
        };
        for host in hosts {
            let host = host.into();
            if !list.contains(&host) {
                list.push(host);
            }
        }
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Look up a field's value by name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).map(Field::value)
    }

    /// The string content of a field, or `""` when absent or not a string.
    pub fn str_value(&self, name: &str) -> &str {
        self.value(name).and_then(Value::as_str).unwrap_or("")
    }

    /// Walk all fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn profile() -> Profile {
        Profile::new(BackendKind::Mongodb)
            .field("hosts", Role::Hosts, Value::list(["localhost:27017"]))
            .field("username", Role::User, Value::str(""))
            .query("maxPoolSize", Value::Int(100))
            .query("connectTimeoutMS", Value::Duration(Duration::from_secs(30)))
            .local("minIdleConns", Value::Int(10))
    }

    #[test]
    fn test_draft_starts_at_defaults() {
        let draft = profile().draft();
        assert!(draft.fields().all(Field::is_default));
        assert_eq!(draft.value("maxPoolSize"), Some(&Value::Int(100)));
    }

    #[test]
    fn test_set_overwrites_matching_kind() {
        let mut draft = profile().draft();
        draft.set("maxPoolSize", Value::Int(20));
        assert_eq!(draft.value("maxPoolSize"), Some(&Value::Int(20)));
        assert!(!draft.get("maxPoolSize").unwrap().is_default());
    }

    #[test]
    fn test_set_ignores_unknown_field_and_wrong_kind() {
        let mut draft = profile().draft();
        draft.set("nope", Value::Int(1));
        draft.set("maxPoolSize", Value::str("not a number"));
        assert_eq!(draft.value("maxPoolSize"), Some(&Value::Int(100)));
    }

    #[test]
    fn test_push_hosts_deduplicates_preserving_insertion_order() {
        let mut draft = profile().draft();
        draft.push_hosts("hosts", ["a:1", "b:2", "a:1"]);
        draft.push_hosts("hosts", ["b:2", "c:3"]);
        assert_eq!(
            draft.value("hosts"),
            Some(&Value::list(["localhost:27017", "a:1", "b:2", "c:3"]))
        );
    }

    #[test]
    fn test_fields_walk_in_declaration_order() {
        let draft = profile().draft();
        let names: Vec<_> = draft.fields().map(Field::name).collect();
        assert_eq!(
            names,
            [
                "hosts",
                "username",
                "maxPoolSize",
                "connectTimeoutMS",
                "minIdleConns"
            ]
        );
    }

    #[test]
    fn test_profile_not_mutated_by_draft_changes() {
        let profile = profile();
        let mut draft = profile.draft();
        draft.set("maxPoolSize", Value::Int(1));
        assert_eq!(profile.draft().value("maxPoolSize"), Some(&Value::Int(100)));
    }
}
