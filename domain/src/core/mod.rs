//! Core domain concepts shared across all subdomains.
//!
//! - [`term::SearchTerm`] — a normalized term to look up on Wikipedia
//! - [`error::LookupError`] — lookup-level errors with user-facing messages

pub mod error;
pub mod term;
