//! Wiki page domain module
//!
//! Everything the bot knows about Wikipedia pages lives here: how a lookup
//! query is built, how the API's JSON reply becomes a typed [`WikiPage`],
//! and the text rules applied to an extract before it is shown.
//!
//! # Overview
//!
//! ```text
//! ┌──────────────┐    ┌───────────────────────┐    ┌──────────────┐
//! │ LookupQuery  │───▶│ parse_query_response  │───▶│ WikiPage     │
//! │ (parameters) │    │ (JSON body → record)  │    │ (title,      │
//! └──────────────┘    └───────────────────────┘    │  extract,    │
//!                                                  │  links)      │
//!                                                  └──────────────┘
//! ```
//!
//! A page whose extract ends in the disambiguation marker is not an article
//! but a list of meanings; the lookup flow then asks for its `links` and
//! offers them back to the user.
//!
//! # Key Types
//!
//! - [`LookupQuery`] — ordered API parameters for one request
//! - [`WikiPage`] / [`WikiLink`] — the parsed page record
//! - [`parsing::parse_query_response`] — the parse boundary
//! - [`extract`] — disambiguation marker and sentence-spacing rules

pub mod entities;
pub mod extract;
pub mod parsing;
pub mod query;

pub use entities::{WikiLink, WikiPage};
pub use parsing::parse_query_response;
pub use query::LookupQuery;
