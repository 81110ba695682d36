//! Page record entities

use serde::{Deserialize, Serialize};

use super::extract;

/// A link to another article, as listed on a disambiguation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiLink {
    /// Title of the linked article
    pub title: String,
}

impl WikiLink {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

/// A Wikipedia page record decoded from one query response.
///
/// `title` is always present once parsing succeeds. `extract` carries the
/// intro text when the response was an extracts query; `links` carries the
/// article links when it was a links query. Both default to empty, and the
/// record is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WikiPage {
    /// Resolved page title (after redirect following)
    pub title: String,
    /// Plain-text intro extract, empty when the response had none
    #[serde(default)]
    pub extract: String,
    /// Links to other articles, empty when the response had none
    #[serde(default)]
    pub links: Vec<WikiLink>,
}

impl WikiPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            extract: String::new(),
            links: Vec::new(),
        }
    }

    /// Whether this page is a disambiguation page rather than an article.
    ///
    /// Wikipedia's intro extract for a disambiguation page ends with the
    /// phrase `may refer to:` followed by the list of meanings, which the
    /// plain-text intro cuts off.
    pub fn is_disambiguation(&self) -> bool {
        extract::is_disambiguation(&self.extract)
    }

    /// Titles of all listed links, in response order.
    pub fn link_titles(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.title.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_has_empty_extract_and_links() {
        let page = WikiPage::new("Rust");
        assert_eq!(page.title, "Rust");
        assert_eq!(page.extract, "");
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_disambiguation_is_detected_from_extract() {
        let mut page = WikiPage::new("Mercury");
        page.extract = "Mercury may refer to:".to_string();
        assert!(page.is_disambiguation());

        page.extract = "Mercury is the first planet from the Sun.".to_string();
        assert!(!page.is_disambiguation());
    }

    #[test]
    fn test_link_titles_preserve_order() {
        let mut page = WikiPage::new("Mercury");
        page.links = vec![
            WikiLink::new("Mercury (element)"),
            WikiLink::new("Mercury (planet)"),
            WikiLink::new("Mercury (mythology)"),
        ];
        let titles: Vec<&str> = page.link_titles().collect();
        assert_eq!(
            titles,
            vec![
                "Mercury (element)",
                "Mercury (planet)",
                "Mercury (mythology)"
            ]
        );
    }
}
