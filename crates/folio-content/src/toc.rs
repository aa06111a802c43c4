//! Table of contents from raw page text.
//!
//! Headings are found with a line regex over the source instead of a second
//! compile pass.

use std::sync::LazyLock;

use folio_markup::slugify;
use regex::Regex;
use serde::Serialize;

/// `##` to `####` followed by whitespace and the heading text.
static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?mR)^(#{2,4})\s(.+)$").expect("invalid heading regex"));

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeadingEntry {
    /// Heading level, 2 to 4.
    pub level: u8,
    pub text: String,
    /// In-page anchor, e.g. `#getting-started`.
    pub href: String,
}

/// Extract level 2-4 headings from raw markup in document order.
#[must_use]
pub fn extract_headings(raw: &str) -> Vec<HeadingEntry> {
    HEADING_PATTERN
        .captures_iter(raw)
        .map(|caps| {
            let text = caps[2].trim().to_owned();
            HeadingEntry {
                // At most 4 hashes
                level: u8::try_from(caps[1].len()).unwrap_or(4),
                href: heading_anchor(&text),
                text,
            }
        })
        .collect()
}

/// In-page link for a heading text: `#` plus the id the compiler assigns
/// to that heading (before any duplicate suffix).
#[must_use]
pub fn heading_anchor(text: &str) -> String {
    format!("#{}", slugify(text))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn entry(level: u8, text: &str, href: &str) -> HeadingEntry {
        HeadingEntry {
            level,
            text: text.to_owned(),
            href: href.to_owned(),
        }
    }

    #[test]
    fn test_extract_levels_two_to_four() {
        let raw = "# Title\n\n## Title One\n\ntext\n\n### Sub Two\n#### Deep\n##### Too Deep\n";
        assert_eq!(
            extract_headings(raw),
            vec![
                entry(2, "Title One", "#title-one"),
                entry(3, "Sub Two", "#sub-two"),
                entry(4, "Deep", "#deep"),
            ]
        );
    }

    #[test]
    fn test_requires_space_after_hashes() {
        assert!(extract_headings("##NoSpace\n").is_empty());
        assert!(extract_headings("  ## Indented\n").is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            extract_headings("## One\r\n## Two\r\n"),
            vec![entry(2, "One", "#one"), entry(2, "Two", "#two")]
        );
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(
            extract_headings("##   Padded   \n"),
            vec![entry(2, "Padded", "#padded")]
        );
    }

    #[test]
    fn test_anchor_rules() {
        assert_eq!(heading_anchor("What's New?"), "#whats-new");
        assert_eq!(heading_anchor("API  v2 \t Reference"), "#api-v2-reference");
        assert_eq!(heading_anchor("Café & Co"), "#caf--co");
        assert_eq!(heading_anchor("pre-built"), "#pre-built");
        assert_eq!(heading_anchor("a - b"), "#a---b");
        assert_eq!(heading_anchor("snake_case"), "#snakecase");
    }
}
