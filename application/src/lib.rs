//! Application layer for wikibot
//!
//! This crate contains the use cases and port definitions of the lookup
//! bot. It depends only on the domain layer; adapters for its ports live
//! in the infrastructure and presentation layers.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    chat_markup::ChatMarkup,
    command_reply::CommandReply,
    http_gateway::{HttpGateway, TransportError},
};
pub use use_cases::dispatch::{CommandDispatcher, default_command_set};
pub use use_cases::wiki_lookup::{DEFAULT_TIMEOUT, LookupOutcome, WikiLookupUseCase};
