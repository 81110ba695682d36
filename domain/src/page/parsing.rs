//! Query response parsing.
//!
//! Turns a raw JSON body from the MediaWiki query API into a [`WikiPage`]
//! or a typed [`LookupError`]. Pure domain logic — no I/O, the body arrives
//! as a string from the HTTP gateway.
//!
//! The expected shape is:
//!
//! ```text
//! { "query": { "pages": { "<page-id>": { "title": ..,
//!                                        "extract": ..,
//!                                        "links": [{ "ns": .., "title": .. }] } } } }
//! ```
//!
//! `pages` holds exactly one entry for a single-title query. A page-id of
//! `"-1"` is the API's sentinel for "no matching page".

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::error::LookupError;
use crate::page::entities::{WikiLink, WikiPage};

/// Page-id key the API uses for a missing page.
pub const MISSING_PAGE_ID: &str = "-1";

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: QueryBody,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    pages: BTreeMap<String, PageBody>,
}

#[derive(Debug, Deserialize)]
struct PageBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    links: Vec<LinkBody>,
}

#[derive(Debug, Deserialize)]
struct LinkBody {
    title: String,
}

/// Parse a query API response body into a page record.
///
/// Takes the first (only) entry of `query.pages`. The map is ordered, so
/// when a `-1` sentinel key is present it is seen deterministically.
///
/// # Errors
///
/// - [`LookupError::Parse`] for malformed JSON or an unexpected shape
///   (missing `query`, missing `pages`, or an empty `pages` object). The
///   detail string is for logs; users see the fixed parse message.
/// - [`LookupError::NotFound`] for the `-1` sentinel, carrying the title
///   the API echoed back.
pub fn parse_query_response(body: &str) -> Result<WikiPage, LookupError> {
    let decoded: QueryResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    let (page_id, page) = decoded
        .query
        .pages
        .into_iter()
        .next()
        .ok_or_else(|| LookupError::Parse("empty pages object in query response".to_string()))?;

    if page_id == MISSING_PAGE_ID {
        return Err(LookupError::NotFound(page.title));
    }

    Ok(WikiPage {
        title: page.title,
        extract: page.extract,
        links: page.links.into_iter().map(|l| WikiLink::new(l.title)).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE_BODY: &str = r#"{
        "batchcomplete": "",
        "query": {
            "normalized": [
                {"from": "rust (programming language)", "to": "Rust (programming language)"}
            ],
            "pages": {
                "29414838": {
                    "pageid": 29414838,
                    "ns": 0,
                    "title": "Rust (programming language)",
                    "extract": "Rust is a general-purpose programming language."
                }
            }
        }
    }"#;

    #[test]
    fn test_parse_article_page() {
        let page = parse_query_response(ARTICLE_BODY).unwrap();
        assert_eq!(page.title, "Rust (programming language)");
        assert_eq!(page.extract, "Rust is a general-purpose programming language.");
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_parse_is_idempotent() {
        let first = parse_query_response(ARTICLE_BODY).unwrap();
        let second = parse_query_response(ARTICLE_BODY).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parse_defaults_missing_extract_and_links() {
        let body = r#"{"query":{"pages":{"123":{"pageid":123,"ns":0,"title":"Stub"}}}}"#;
        let page = parse_query_response(body).unwrap();
        assert_eq!(page.title, "Stub");
        assert_eq!(page.extract, "");
        assert!(page.links.is_empty());
    }

    #[test]
    fn test_parse_missing_page_sentinel() {
        let body =
            r#"{"query":{"pages":{"-1":{"ns":0,"title":"Qwertyuiop","missing":""}}}}"#;
        let err = parse_query_response(body).unwrap_err();
        assert_eq!(err, LookupError::NotFound("Qwertyuiop".to_string()));
        assert_eq!(
            err.to_string(),
            "Couldn't find a Wikipedia entry for Qwertyuiop."
        );
    }

    #[test]
    fn test_parse_malformed_json() {
        let err = parse_query_response("<html>Service unavailable</html>").unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
        assert_eq!(err.to_string(), "Unable to parse Wikipedia's reply.");
    }

    #[test]
    fn test_parse_unexpected_shape() {
        let err = parse_query_response(r#"{"error":{"code":"internal_api_error"}}"#).unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }

    #[test]
    fn test_parse_empty_pages_object() {
        let err = parse_query_response(r#"{"query":{"pages":{}}}"#).unwrap_err();
        assert!(matches!(err, LookupError::Parse(_)));
    }

    #[test]
    fn test_parse_links_page_preserves_order_and_duplicates() {
        let body = r#"{
            "query": {
                "pages": {
                    "36579": {
                        "pageid": 36579,
                        "ns": 0,
                        "title": "Mercury",
                        "links": [
                            {"ns": 0, "title": "Mercury (element)"},
                            {"ns": 0, "title": "Mercury (planet)"},
                            {"ns": 0, "title": "Mercury (element)"}
                        ]
                    }
                }
            }
        }"#;
        let page = parse_query_response(body).unwrap();
        let titles: Vec<&str> = page.link_titles().collect();
        assert_eq!(
            titles,
            vec!["Mercury (element)", "Mercury (planet)", "Mercury (element)"]
        );
    }
}
