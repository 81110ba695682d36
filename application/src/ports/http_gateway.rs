//! HTTP gateway port
//!
//! Defines the interface for reaching the encyclopedia's query API.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use wikibot_domain::LookupQuery;

/// Errors the HTTP gateway can report.
///
/// The display text of these variants is shown to users verbatim inside the
/// "There was an error getting data from Wikipedia: ..." reply, so keep it
/// short and free of internals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("timeout after {0} seconds")]
    Timeout(u64),

    #[error("unexpected HTTP status {0}")]
    Status(u16),
}

/// Gateway for the remote query API
///
/// This port defines how the application layer fetches raw response bodies.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait HttpGateway: Send + Sync {
    /// Issue one GET request with the query's parameters and return the raw
    /// body. The timeout applies to the whole request.
    async fn get(&self, query: &LookupQuery, timeout: Duration)
    -> Result<String, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_display_is_user_presentable() {
        assert_eq!(
            TransportError::Connection("connection refused".to_string()).to_string(),
            "connection error: connection refused"
        );
        assert_eq!(
            TransportError::Timeout(5).to_string(),
            "timeout after 5 seconds"
        );
        assert_eq!(
            TransportError::Status(503).to_string(),
            "unexpected HTTP status 503"
        );
    }
}
