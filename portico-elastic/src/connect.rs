//! Client construction.

use elasticsearch::Elasticsearch;
use elasticsearch::auth::Credentials;
use elasticsearch::cert::CertificateValidation;
use elasticsearch::http::transport::{
    MultiNodeConnectionPool, SingleNodeConnectionPool, TransportBuilder,
};
use portico_core::{ConnectOption, compose};
use tracing::{debug, info};
use url::Url;

use crate::config::{DEFAULT_URL, profile};
use crate::error::{ElasticError, ElasticResult};
use crate::target::project_target;

/// Compose the options, project them onto the native shape, and build an
/// Elasticsearch client over a single- or multi-node transport. When no
/// node URLs were supplied the local [`DEFAULT_URL`] node is used.
/// Transport and client errors are returned unchanged.
pub fn connect(options: &[ConnectOption]) -> ElasticResult<Elasticsearch> {
    let draft = compose(&profile(), options);
    let target = project_target(&draft)?;

    let urls = if target.urls.is_empty() {
        debug!(url = DEFAULT_URL, "no node URLs supplied, using fallback");
        vec![
            Url::parse(DEFAULT_URL)
                .map_err(|e| ElasticError::config(format!("fallback url: {}", e)))?,
        ]
    } else {
        target.urls.clone()
    };

    let mut builder = if urls.len() == 1 {
        TransportBuilder::new(SingleNodeConnectionPool::new(urls[0].clone()))
    } else {
        TransportBuilder::new(MultiNodeConnectionPool::round_robin(urls.clone(), None))
    };

    if !target.username.is_empty() {
        builder = builder.auth(Credentials::Basic(
            target.username.clone(),
            target.password.clone(),
        ));
    }
    if let Some(timeout) = target.request_timeout {
        builder = builder.timeout(timeout);
    }
    if target.insecure {
        builder = builder.cert_validation(CertificateValidation::None);
    }

    let transport = builder.build()?;

    info!(
        nodes = urls.len(),
        authenticated = !target.username.is_empty(),
        "Elasticsearch client created"
    );

    Ok(Elasticsearch::new(transport))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{with_basic_auth, with_url, with_urls};

    #[test]
    fn test_connect_with_default_profile() {
        // Client construction performs no I/O; the empty URL list falls
        // back to the local node.
        assert!(connect(&[]).is_ok());
    }

    #[test]
    fn test_connect_multi_node() {
        let result = connect(&[
            with_urls(["http://b:9200", "http://c:9200"]),
            with_basic_auth("elastic", "changeme"),
        ]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_connect_rejects_unparseable_url() {
        assert!(connect(&[with_url("not a url")]).is_err());
    }
}
