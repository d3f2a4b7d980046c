//! Projection onto the native transport configuration.

use std::time::Duration;

use portico_core::{CoreError, Draft, Rule, Target, Value, project};
use url::Url;

use crate::error::ElasticResult;

/// The native-shaped target schema for Elasticsearch: parsed node URLs plus
/// the transport knobs the client accepts.
#[derive(Debug, Default, Clone)]
pub struct ElasticTarget {
    /// Parsed node URLs, first-insertion order.
    pub urls: Vec<Url>,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Global request timeout.
    pub request_timeout: Option<Duration>,
    /// Skip TLS certificate validation.
    pub insecure: bool,
}

impl Target for ElasticTarget {
    fn set_field(&mut self, name: &str, value: &Value) -> bool {
        match (name, value) {
            ("username", Value::Str(s)) => {
                self.username = s.clone();
                true
            }
            ("password", Value::Str(s)) => {
                self.password = s.clone();
                true
            }
            ("requestTimeout", Value::Duration(d)) => {
                self.request_timeout = Some(*d);
                true
            }
            ("insecure", Value::Bool(b)) => {
                self.insecure = *b;
                true
            }
            _ => false,
        }
    }
}

/// URL strings need parsing, not copying; a string the URL parser rejects
/// fails projection naming the field.
fn parse_urls(target: &mut ElasticTarget, value: &Value) -> Result<(), CoreError> {
    let raw = value.as_list().unwrap_or(&[]);
    let mut urls = Vec::with_capacity(raw.len());
    for url in raw {
        urls.push(
            Url::parse(url)
                .map_err(|e| CoreError::projection("urls", format!("'{}': {}", url, e)))?,
        );
    }
    target.urls = urls;
    Ok(())
}

fn rules() -> Vec<(&'static str, Rule<ElasticTarget>)> {
    vec![("urls", Rule::Custom(parse_urls))]
}

/// Project a composed draft onto the native target.
pub fn project_target(draft: &Draft) -> ElasticResult<ElasticTarget> {
    Ok(project(draft, &rules())?)
}

#[cfg(test)]
mod tests {
    use portico_core::compose;

    use super::*;
    use crate::config::{profile, with_basic_auth, with_timeout, with_url, with_urls};

    #[test]
    fn test_urls_parsed_through_custom_rule() {
        let draft = compose(&profile(), &[with_url("http://search:9200")]);
        let target = project_target(&draft).unwrap();
        assert_eq!(target.urls.len(), 1);
        assert_eq!(target.urls[0].as_str(), "http://search:9200/");
    }

    #[test]
    fn test_invalid_url_fails_projection_naming_the_field() {
        let draft = compose(&profile(), &[with_url("::not a url::")]);
        let err = project_target(&draft).unwrap_err();
        assert!(err.to_string().contains("urls"));
    }

    #[test]
    fn test_credentials_and_timeout_copied_structurally() {
        let draft = compose(
            &profile(),
            &[
                with_basic_auth("elastic", "changeme"),
                with_timeout(Duration::from_secs(20)),
            ],
        );
        let target = project_target(&draft).unwrap();
        assert_eq!(target.username, "elastic");
        assert_eq!(target.password, "changeme");
        assert_eq!(target.request_timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_zero_timeout_means_unset() {
        let target = project_target(&profile().draft()).unwrap();
        assert_eq!(target.request_timeout, None);
        assert!(!target.insecure);
    }

    #[test]
    fn test_multiple_urls() {
        let draft = compose(&profile(), &[with_urls(["http://a:9200", "http://b:9200"])]);
        let target = project_target(&draft).unwrap();
        assert_eq!(target.urls.len(), 2);
    }

    #[test]
    fn test_explicit_urls_exclude_the_fallback() {
        let draft = compose(&profile(), &[with_urls(["http://a:9200"])]);
        let target = project_target(&draft).unwrap();
        assert_eq!(target.urls.len(), 1);
        assert_eq!(target.urls[0].as_str(), "http://a:9200/");
    }
}
