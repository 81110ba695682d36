//! Domain layer for wikibot
//!
//! This crate contains the business rules of the Wikipedia lookup bot:
//! page records, query construction, response parsing, extract text rules,
//! command definitions, and reply value objects. It has no dependencies on
//! infrastructure or presentation concerns and performs no I/O.
//!
//! # Core Concepts
//!
//! ## Lookup
//!
//! A lookup turns a user's term into at most two query API requests:
//!
//! - the **extracts** request fetches the plain-text intro of the page the
//!   term resolves to;
//! - when that intro ends in `may refer to:` the page is a disambiguation
//!   page, and a second **links** request fetches the meanings it lists.
//!
//! ## Replies
//!
//! Whatever happens, the user gets exactly one [`Reply`]: a text notice for
//! failures, or a titled blob carrying the extract or the meanings list.

pub mod command;
pub mod core;
pub mod page;
pub mod reply;

// Re-export commonly used types
pub use command::{AccessLevel, CommandDefinition, CommandSet};
pub use core::{error::LookupError, term::SearchTerm};
pub use page::{
    LookupQuery, WikiLink, WikiPage,
    extract::{DISAMBIGUATION_MARKER, is_disambiguation, repair_sentence_spacing},
    parsing::{MISSING_PAGE_ID, parse_query_response},
};
pub use reply::Reply;
