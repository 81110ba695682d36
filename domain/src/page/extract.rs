//! Extract text rules.
//!
//! Wikipedia's plain-text intro extracts need two checks before display:
//! disambiguation pages are recognized by their trailing marker phrase, and
//! article text occasionally arrives with collapsed sentence boundaries
//! (`word.Next`) that the TextExtracts prop produces when it strips markup.

use regex::Regex;
use std::sync::OnceLock;

/// Phrase that ends the intro extract of a disambiguation page.
pub const DISAMBIGUATION_MARKER: &str = "may refer to:";

fn sentence_boundary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([a-z0-9])\.([A-Z])").expect("sentence boundary regex must compile")
    })
}

/// Whether an extract marks its page as a disambiguation page.
///
/// The check is case-sensitive and anchored to the end of the extract.
pub fn is_disambiguation(extract: &str) -> bool {
    extract.ends_with(DISAMBIGUATION_MARKER)
}

/// Re-insert the space after a sentence-ending period.
///
/// A lowercase letter or digit directly followed by `.` and an uppercase
/// letter gets one space inserted after the period. Anything else, such as
/// abbreviations like `ABC.DEF`, is left alone.
pub fn repair_sentence_spacing(extract: &str) -> String {
    sentence_boundary_re()
        .replace_all(extract, "$1. $2")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_at_end_is_disambiguation() {
        assert!(is_disambiguation("Mercury may refer to:"));
    }

    #[test]
    fn test_marker_elsewhere_is_not_disambiguation() {
        assert!(!is_disambiguation("The phrase may refer to: something, but goes on."));
        assert!(!is_disambiguation("Mercury is a planet."));
        assert!(!is_disambiguation(""));
    }

    #[test]
    fn test_marker_is_case_sensitive() {
        assert!(!is_disambiguation("Mercury May Refer To:"));
    }

    #[test]
    fn test_collapsed_sentences_get_a_space() {
        assert_eq!(
            repair_sentence_spacing("This is a test.Another sentence"),
            "This is a test. Another sentence"
        );
    }

    #[test]
    fn test_digit_before_period_counts_as_sentence_end() {
        assert_eq!(
            repair_sentence_spacing("released in 1991.It was"),
            "released in 1991. It was"
        );
    }

    #[test]
    fn test_abbreviations_are_untouched() {
        assert_eq!(repair_sentence_spacing("ABC.DEF"), "ABC.DEF");
    }

    #[test]
    fn test_existing_spacing_is_untouched() {
        let text = "One sentence. Another sentence.";
        assert_eq!(repair_sentence_spacing(text), text);
    }

    #[test]
    fn test_repair_applies_to_every_boundary() {
        assert_eq!(
            repair_sentence_spacing("First.Second and third.Fourth"),
            "First. Second and third. Fourth"
        );
    }
}
