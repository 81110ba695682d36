//! Search term value object.

use serde::{Deserialize, Serialize};

/// The term a user asked to look up (Value Object).
///
/// Chat clients deliver apostrophes as the HTML entity `&#39;`, so the
/// constructor normalizes that entity to a literal `'` — `O&#39;Brien`
/// is queried as `O'Brien`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTerm {
    value: String,
}

impl SearchTerm {
    /// Create a new search term, normalizing apostrophe entities.
    ///
    /// # Panics
    /// Panics if the term is empty or only whitespace.
    pub fn new(raw: impl Into<String>) -> Self {
        let value = raw.into().replace("&#39;", "'");
        assert!(!value.trim().is_empty(), "Search term cannot be empty");
        Self { value }
    }

    /// Try to create a search term, returning None if it is blank.
    pub fn try_new(raw: impl Into<String>) -> Option<Self> {
        let value = raw.into().replace("&#39;", "'");
        if value.trim().is_empty() {
            None
        } else {
            Some(Self { value })
        }
    }

    /// Get the normalized term text.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume and return the inner text.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl std::fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<&str> for SearchTerm {
    fn from(s: &str) -> Self {
        SearchTerm::new(s)
    }
}

impl From<String> for SearchTerm {
    fn from(s: String) -> Self {
        SearchTerm::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_term_is_unchanged() {
        let term = SearchTerm::new("Rust (programming language)");
        assert_eq!(term.as_str(), "Rust (programming language)");
    }

    #[test]
    fn test_apostrophe_entity_is_normalized() {
        let term = SearchTerm::new("O&#39;Brien");
        assert_eq!(term.as_str(), "O'Brien");
    }

    #[test]
    fn test_every_entity_occurrence_is_replaced() {
        let term = SearchTerm::new("Rock &#39;n&#39; roll");
        assert_eq!(term.as_str(), "Rock 'n' roll");
    }

    #[test]
    #[should_panic]
    fn test_empty_term_panics() {
        SearchTerm::new("");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(SearchTerm::try_new("   ").is_none());
        assert!(SearchTerm::try_new("").is_none());
    }

    #[test]
    fn test_try_new_valid() {
        assert!(SearchTerm::try_new("Python").is_some());
    }
}
