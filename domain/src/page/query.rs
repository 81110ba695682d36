//! Lookup query construction.

use crate::core::term::SearchTerm;

/// Ordered API parameters for one query request.
///
/// Built once per request and never reused. The two constructors cover the
/// two requests the lookup flow makes: the intro extract for a term, and the
/// article links of a resolved disambiguation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    params: Vec<(&'static str, String)>,
}

impl LookupQuery {
    /// Query for the plain-text intro extract of `term`.
    ///
    /// Asks for JSON, intro only, plain text, with redirects followed, so a
    /// search for a redirect name lands on the resolved article.
    pub fn extracts(term: &SearchTerm) -> Self {
        Self {
            params: vec![
                ("format", "json".to_string()),
                ("action", "query".to_string()),
                ("prop", "extracts".to_string()),
                ("exintro", "1".to_string()),
                ("explaintext", "1".to_string()),
                ("redirects", "1".to_string()),
                ("titles", term.as_str().to_string()),
            ],
        }
    }

    /// Query for every article-namespace link on the page `title`.
    pub fn links(title: &str) -> Self {
        Self {
            params: vec![
                ("format", "json".to_string()),
                ("action", "query".to_string()),
                ("prop", "links".to_string()),
                ("pllimit", "max".to_string()),
                ("redirects", "1".to_string()),
                ("plnamespace", "0".to_string()),
                ("titles", title.to_string()),
            ],
        }
    }

    /// The parameters, in construction order.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }

    /// Look up a single parameter value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }
}
