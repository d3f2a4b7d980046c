//! Structural field projection.
//!
//! Translates a draft onto a backend-native target schema. There is no
//! runtime reflection: each target implements an explicit
//! [`Target::set_field`] hook and each adapter declares a per-field rule
//! table, so the mapping is visible in source and checked by the compiler.
//!
//! Draft fields are walked in declaration order. For each field:
//!
//! - a [`Rule::Skip`] entry drops it (credentials embedded elsewhere,
//!   DSN-only fields);
//! - a [`Rule::Rename`] entry copies it unconditionally under the target's
//!   name (this is how a generic `Host` becomes a redis `Addr`, even when
//!   the value is the zero default);
//! - a [`Rule::Custom`] entry runs adapter code, which may fail;
//! - otherwise the field matches structurally: it is copied under its own
//!   name only when its value is non-zero. A zero value is treated as
//!   "never set", the documented lossy heuristic, and a name the target
//!   does not expose is silently skipped (the field does not apply).

use tracing::trace;

use crate::draft::Draft;
use crate::error::{CoreError, CoreResult};
use crate::value::Value;

/// A backend-native configuration shape drafts can be projected onto.
pub trait Target: Default {
    /// Accept a value for the named target field. Returns `false` when the
    /// target has no field of that name and kind.
    fn set_field(&mut self, name: &str, value: &Value) -> bool;
}

/// Adapter-supplied computation for one field.
pub type CustomFn<T> = fn(&mut T, &Value) -> CoreResult<()>;

/// Per-field projection rule. Fields without a rule use structural matching.
pub enum Rule<T> {
    /// Do not project this field.
    Skip,
    /// Copy the value under a different target field name, unconditionally.
    Rename(&'static str),
    /// Compute the target effect with adapter code.
    Custom(CustomFn<T>),
}

/// Project a draft onto a fresh target, applying the given rule table.
///
/// On any failure no target is returned; there is no partial projection.
pub fn project<T: Target>(draft: &Draft, rules: &[(&'static str, Rule<T>)]) -> CoreResult<T> {
    let mut target = T::default();

    for field in draft.fields() {
        let rule = rules.iter().find(|(name, _)| *name == field.name());
        match rule.map(|(_, rule)| rule) {
            Some(Rule::Skip) => {
                trace!(field = field.name(), "projection: skipped by rule");
            }
            Some(Rule::Rename(new_name)) => {
                if !target.set_field(new_name, field.value()) {
                    return Err(CoreError::projection(
                        field.name(),
                        format!("target has no field '{}' to rename onto", new_name),
                    ));
                }
            }
            Some(Rule::Custom(custom)) => {
                custom(&mut target, field.value()).map_err(|err| match err {
                    CoreError::Projection { .. } => err,
                    other => CoreError::projection(field.name(), other.to_string()),
                })?;
            }
            None => {
                if field.value().is_zero() {
                    continue;
                }
                if !target.set_field(field.name(), field.value()) {
                    trace!(field = field.name(), "projection: no matching target field");
                }
            }
        }
    }

    Ok(target)
}
