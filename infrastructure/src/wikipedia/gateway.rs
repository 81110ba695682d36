//! HTTP gateway adapter for the Wikipedia query API.
//!
//! Implements the application layer's [`HttpGateway`] port with a shared
//! [`reqwest::Client`]. Every request is a GET against one fixed `api.php`
//! endpoint; the query parameters come from the domain's [`LookupQuery`]
//! and the timeout is applied per request, not on the client.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, trace};
use wikibot_application::ports::http_gateway::{HttpGateway, TransportError};
use wikibot_domain::LookupQuery;

/// Failure to construct the underlying HTTP client.
#[derive(Error, Debug)]
#[error("failed to build HTTP client: {0}")]
pub struct GatewayBuildError(#[from] reqwest::Error);

/// Gateway to the MediaWiki `api.php` query endpoint.
pub struct WikipediaGateway {
    client: reqwest::Client,
    api_url: String,
}

impl WikipediaGateway {
    /// Create a gateway for `api_url`, sending `user_agent` on every request.
    ///
    /// Wikipedia's API etiquette asks clients to identify themselves, so
    /// the User-Agent is mandatory here.
    pub fn new(
        api_url: impl Into<String>,
        user_agent: &str,
    ) -> Result<Self, GatewayBuildError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn map_error(err: reqwest::Error, timeout: Duration) -> TransportError {
        if err.is_timeout() {
            return TransportError::Timeout(timeout.as_secs());
        }
        if let Some(status) = err.status() {
            return TransportError::Status(status.as_u16());
        }
        // reqwest error chains repeat the URL; the source message is enough
        // for the user-facing reply.
        let text = match std::error::Error::source(&err) {
            Some(source) => source.to_string(),
            None => err.to_string(),
        };
        TransportError::Connection(text)
    }
}

#[async_trait]
impl HttpGateway for WikipediaGateway {
    async fn get(
        &self,
        query: &LookupQuery,
        timeout: Duration,
    ) -> Result<String, TransportError> {
        debug!(
            "GET {} titles={:?} prop={:?}",
            self.api_url,
            query.get("titles"),
            query.get("prop")
        );

        let response = self
            .client
            .get(&self.api_url)
            .query(query.params())
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| Self::map_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Self::map_error(e, timeout))?;
        trace!("Response body: {} bytes", body.len());
        Ok(body)
    }
}
