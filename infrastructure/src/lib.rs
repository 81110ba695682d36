//! Infrastructure layer for wikibot
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, including configuration file loading and the
//! Wikipedia HTTP gateway.

pub mod config;
pub mod wikipedia;

// Re-export commonly used types
pub use config::{ConfigLoader, FileBotConfig, FileConfig, FileWikiConfig};
pub use wikipedia::{GatewayBuildError, WikipediaGateway};
