//! Elasticsearch default profile and connection options.

use std::time::Duration;

use portico_core::{BackendKind, ConnectOption, Profile, Role, Value};

/// Fallback node URL, used at connect time when no URLs were supplied.
pub const DEFAULT_URL: &str = "http://127.0.0.1:9200";

/// The Elasticsearch baseline: anonymous access, full certificate
/// validation and no request timeout. The URL list starts empty; a caller
/// supplying nodes gets exactly those nodes, and [`DEFAULT_URL`] applies
/// only when none were given.
pub fn profile() -> Profile {
    Profile::new(BackendKind::Elasticsearch)
        .field("urls", Role::Hosts, Value::list(Vec::<String>::new()))
        .field("username", Role::User, Value::str(""))
        .field("password", Role::Password, Value::str(""))
        .local("requestTimeout", Value::Duration(Duration::ZERO))
        .local("insecure", Value::Bool(false))
}

/// Add node URLs. URLs already present are not added again; first-insertion
/// order is preserved.
pub fn with_urls<I, S>(urls: I) -> ConnectOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    ConnectOption::hosts("urls", urls)
}

/// Replace any accumulated node URLs with the given one.
pub fn with_url(url: impl Into<String>) -> ConnectOption {
    let url = url.into();
    ConnectOption::new("urls", move |draft| {
        draft.set("urls", Value::list([url.clone()]));
    })
}

/// Set basic-auth credentials.
pub fn with_basic_auth(
    username: impl Into<String>,
    password: impl Into<String>,
) -> ConnectOption {
    let username = username.into();
    let password = password.into();
    ConnectOption::new("basic_auth", move |draft| {
        draft.set("username", Value::str(username.clone()));
        draft.set("password", Value::str(password.clone()));
    })
}

/// Set a global request timeout. The zero default means no timeout.
pub fn with_timeout(timeout: Duration) -> ConnectOption {
    ConnectOption::duration("requestTimeout", timeout)
}

/// Disable TLS certificate validation. Default off (certificates are
/// validated).
pub fn with_insecure(insecure: bool) -> ConnectOption {
    ConnectOption::boolean("insecure", insecure)
}

#[cfg(test)]
mod tests {
    use portico_core::compose;

    use super::*;

    #[test]
    fn test_profile_starts_with_no_urls() {
        let draft = profile().draft();
        assert_eq!(draft.value("urls"), Some(&Value::list(Vec::<String>::new())));
    }

    #[test]
    fn test_with_url_replaces_accumulated_urls() {
        let draft = compose(
            &profile(),
            &[with_urls(["http://a:9200"]), with_url("http://search:9200")],
        );
        assert_eq!(draft.value("urls"), Some(&Value::list(["http://search:9200"])));
    }

    #[test]
    fn test_with_urls_yields_exactly_the_supplied_nodes() {
        // No localhost fallback sneaks into an explicitly configured pool.
        let draft = compose(
            &profile(),
            &[with_urls(["http://a:9200", "http://a:9200", "http://b:9200"])],
        );
        assert_eq!(
            draft.value("urls"),
            Some(&Value::list(["http://a:9200", "http://b:9200"]))
        );
    }

    #[test]
    fn test_basic_auth_sets_both_fields() {
        let draft = compose(&profile(), &[with_basic_auth("elastic", "changeme")]);
        assert_eq!(draft.str_value("username"), "elastic");
        assert_eq!(draft.str_value("password"), "changeme");
    }
}
