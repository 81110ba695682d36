//! Lookup error taxonomy.
//!
//! Every failure of a wiki lookup collapses into one of three cases, and
//! each case's `Display` text is exactly what the requesting user sees.
//! None of them is fatal to the host: a lookup that fails is answered with
//! a single short reply and forgotten.

use thiserror::Error;

/// A failed wiki lookup, carrying the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The HTTP collaborator reported a network or timeout failure.
    /// The collaborator's own error text is shown verbatim.
    #[error("There was an error getting data from Wikipedia: {0}. Please try again later.")]
    Transport(String),

    /// The response body was not the JSON we expected. The detail string
    /// is kept for logging only and never shown to the user.
    #[error("Unable to parse Wikipedia's reply.")]
    Parse(String),

    /// The API answered with the `-1` sentinel page-ID: no such page.
    /// Carries the title the API echoed back for the queried term.
    #[error("Couldn't find a Wikipedia entry for {0}.")]
    NotFound(String),
}

impl LookupError {
    /// Check whether this error is the missing-page case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound(_))
    }

    /// Internal detail for logs: the parse failure reason or transport
    /// error text. `NotFound` has nothing beyond its user message.
    pub fn detail(&self) -> Option<&str> {
        match self {
            LookupError::Transport(text) | LookupError::Parse(text) => Some(text),
            LookupError::NotFound(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_display_keeps_collaborator_text() {
        let error = LookupError::Transport("connection reset".to_string());
        assert_eq!(
            error.to_string(),
            "There was an error getting data from Wikipedia: connection reset. \
             Please try again later."
        );
    }

    #[test]
    fn test_parse_display_is_fixed() {
        let error = LookupError::Parse("expected value at line 1".to_string());
        assert_eq!(error.to_string(), "Unable to parse Wikipedia's reply.");
    }

    #[test]
    fn test_not_found_display_names_the_title() {
        let error = LookupError::NotFound("Flurbegarble".to_string());
        assert_eq!(
            error.to_string(),
            "Couldn't find a Wikipedia entry for Flurbegarble."
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(LookupError::NotFound("x".to_string()).is_not_found());
        assert!(!LookupError::Parse("x".to_string()).is_not_found());
        assert!(!LookupError::Transport("x".to_string()).is_not_found());
    }

    #[test]
    fn test_detail_is_hidden_from_display_for_parse() {
        let error = LookupError::Parse("line 3 column 7".to_string());
        assert_eq!(error.detail(), Some("line 3 column 7"));
        assert!(!error.to_string().contains("line 3"));
    }
}
