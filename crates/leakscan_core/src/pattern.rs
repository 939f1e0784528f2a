//! Regex fragment helpers shared by detector patterns.
//!
//! Detector patterns are assembled from two fragments: a case-insensitive
//! provider-keyword prefix and a boundary-delimited token shape. Keeping
//! the prefix grammar in one place means every detector tolerates the same
//! distance between the keyword and the credential it introduces.

/// Maximum number of characters allowed between a provider keyword and the
/// credential token it introduces.
const MAX_PREFIX_DISTANCE: usize = 40;

/// Regex fragment matching an 8-4-4-4-12 lowercase hexadecimal UUID,
/// bounded by non-word characters.
pub const UUID_TOKEN: &str = r"\b([0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12})\b";

/// Builds the case-insensitive keyword-prefix fragment for a detector
/// pattern.
///
/// The fragment matches any of `keywords` followed by up to 40 characters
/// of arbitrary content (newlines included), matched lazily so the token
/// group binds to the nearest occurrence. Surround the token group that
/// follows with boundary characters to reduce false positives.
#[must_use]
pub fn keyword_prefix(keywords: &[&str]) -> String {
    format!(
        r"(?i:{})(?:.|[\n\r]){{0,{MAX_PREFIX_DISTANCE}}}?",
        keywords.join("|")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::bytes::Regex;

    fn compile(keywords: &[&str], token: &str) -> Regex {
        Regex::new(&format!("{}{token}", keyword_prefix(keywords))).unwrap()
    }

    #[test]
    fn prefix_matches_keyword_case_insensitively() {
        let re = compile(&["opsgenie"], UUID_TOKEN);
        assert!(re.is_match(b"OPSGENIE_KEY=1b3ec8d4-5a2f-4c3e-9a1e-2f6b7c8d9e0a"));
        assert!(re.is_match(b"opsgenie_key=1b3ec8d4-5a2f-4c3e-9a1e-2f6b7c8d9e0a"));
    }

    #[test]
    fn prefix_joins_multiple_keywords_as_alternation() {
        let re = compile(&["alpha", "beta"], UUID_TOKEN);
        assert!(re.is_match(b"beta token 1b3ec8d4-5a2f-4c3e-9a1e-2f6b7c8d9e0a"));
    }

    #[test]
    fn prefix_spans_newlines_between_keyword_and_token() {
        let re = compile(&["opsgenie"], UUID_TOKEN);
        assert!(re.is_match(b"opsgenie:\n  1b3ec8d4-5a2f-4c3e-9a1e-2f6b7c8d9e0a"));
    }

    #[test]
    fn prefix_rejects_keyword_too_far_from_token() {
        let re = compile(&["opsgenie"], UUID_TOKEN);
        let padding = "x".repeat(MAX_PREFIX_DISTANCE + 1);
        let content = format!("opsgenie {padding} 1b3ec8d4-5a2f-4c3e-9a1e-2f6b7c8d9e0a");
        assert!(!re.is_match(content.as_bytes()));
    }

    #[test]
    fn uuid_token_requires_lowercase_hex_groups() {
        let re = compile(&["opsgenie"], UUID_TOKEN);
        assert!(!re.is_match(b"opsgenie 1B3EC8D4-5A2F-4C3E-9A1E-2F6B7C8D9E0A"));
        assert!(!re.is_match(b"opsgenie 1b3ec8d4-5a2f-4c3e-9a1e"));
    }

    #[test]
    fn uuid_token_rejects_word_adjacent_matches() {
        let re = compile(&["opsgenie"], UUID_TOKEN);
        assert!(!re.is_match(b"opsgenie x1b3ec8d4-5a2f-4c3e-9a1e-2f6b7c8d9e0ay"));
    }
}
