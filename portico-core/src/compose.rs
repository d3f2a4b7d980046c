//! Option composition.

use tracing::trace;

use crate::draft::{Draft, Profile};
use crate::option::ConnectOption;

/// Apply an ordered sequence of options to a fresh copy of the profile.
///
/// Later options override earlier ones on the same field; options touching
/// disjoint fields commute; an empty sequence yields the profile defaults
/// unchanged. The profile itself is never mutated, and composition never
/// fails: options are total functions over the draft's field set.
pub fn compose(profile: &Profile, options: &[ConnectOption]) -> Draft {
    let mut draft = profile.draft();
    for option in options {
        trace!(backend = %profile.kind(), option = option.name(), "applying option");
        option.apply(&mut draft);
    }
    draft
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::backend::BackendKind;
    use crate::draft::{Profile, Role};
    use crate::value::Value;

    fn profile() -> Profile {
        Profile::new(BackendKind::Mongodb)
            .field("hosts", Role::Hosts, Value::list(Vec::<String>::new()))
            .query("maxPoolSize", Value::Int(100))
            .query("tls", Value::Bool(false))
            .query("replicaSet", Value::str("null"))
    }

    #[test]
    fn test_empty_sequence_preserves_defaults() {
        let profile = profile();
        assert_eq!(compose(&profile, &[]), profile.draft());
    }

    #[test]
    fn test_disjoint_options_commute() {
        let profile = profile();
        let a = ConnectOption::int("maxPoolSize", 50);
        let b = ConnectOption::boolean("tls", true);

        let ab = compose(&profile, &[a.clone(), b.clone()]);
        let ba = compose(&profile, &[b, a]);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_same_field_last_write_wins() {
        let profile = profile();
        let first = ConnectOption::int("maxPoolSize", 50);
        let second = ConnectOption::int("maxPoolSize", 7);

        let draft = compose(&profile, &[first, second]);
        assert_eq!(draft.value("maxPoolSize"), Some(&Value::Int(7)));
    }

    #[test]
    fn test_applying_same_option_twice_is_idempotent() {
        let profile = profile();
        let opt = ConnectOption::str("replicaSet", "rs0");

        let once = compose(&profile, &[opt.clone()]);
        let twice = compose(&profile, &[opt.clone(), opt]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_host_accumulation_across_options() {
        let profile = profile();
        let draft = compose(
            &profile,
            &[
                ConnectOption::hosts("hosts", ["a:27017"]),
                ConnectOption::hosts("hosts", ["b:27017", "a:27017"]),
            ],
        );
        assert_eq!(draft.value("hosts"), Some(&Value::list(["a:27017", "b:27017"])));
    }
}
