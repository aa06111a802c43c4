//! YAML frontmatter splitting and parsing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Delimiter line around the frontmatter block.
const DELIMITER: &str = "---";

/// Document metadata from the frontmatter block.
///
/// Keys other than `title` and `description` are kept in `extra`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Page title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Page description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Remaining keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Split a document into its frontmatter YAML and body.
///
/// The frontmatter block must start on the first line with `---` and end with
/// the next `---` line. Documents without a complete block return `None` and
/// the whole input as body.
#[must_use]
pub fn split_frontmatter(text: &str) -> (Option<&str>, &str) {
    let Some(rest) = text.strip_prefix(DELIMITER) else {
        return (None, text);
    };
    let Some(rest) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
        return (None, text);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, text)
}

/// Parse frontmatter YAML. An empty block yields empty metadata.
pub fn parse_frontmatter(yaml: &str) -> Result<Frontmatter, serde_yaml::Error> {
    if yaml.trim().is_empty() {
        return Ok(Frontmatter::default());
    }
    serde_yaml::from_str(yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_frontmatter() {
        let (yaml, body) = split_frontmatter("---\ntitle: Hello\n---\n# Body\n");
        assert_eq!(yaml, Some("title: Hello\n"));
        assert_eq!(body, "# Body\n");
    }

    #[test]
    fn test_split_without_frontmatter() {
        let text = "# Just a heading\n";
        assert_eq!(split_frontmatter(text), (None, text));
    }

    #[test]
    fn test_split_unterminated_block() {
        let text = "---\ntitle: Hello\n# Body\n";
        assert_eq!(split_frontmatter(text), (None, text));
    }

    #[test]
    fn test_split_crlf() {
        let (yaml, body) = split_frontmatter("---\r\ntitle: Hi\r\n---\r\nBody");
        assert_eq!(yaml, Some("title: Hi\r\n"));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_split_empty_block() {
        let (yaml, body) = split_frontmatter("---\n---\nBody");
        assert_eq!(yaml, Some(""));
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_horizontal_rule_not_frontmatter() {
        let text = "----\ntext\n";
        assert_eq!(split_frontmatter(text), (None, text));
    }

    #[test]
    fn test_parse_frontmatter_fields() {
        let fm = parse_frontmatter("title: Intro\ndescription: First steps\nkeywords: [a, b]\n")
            .unwrap();
        assert_eq!(fm.title.as_deref(), Some("Intro"));
        assert_eq!(fm.description.as_deref(), Some("First steps"));
        assert!(fm.extra.contains_key("keywords"));
    }

    #[test]
    fn test_parse_empty_frontmatter() {
        assert_eq!(parse_frontmatter("  \n").unwrap(), Frontmatter::default());
    }

    #[test]
    fn test_parse_malformed_frontmatter() {
        assert!(parse_frontmatter("title: [unclosed\n").is_err());
    }

    #[test]
    fn test_frontmatter_json_shape() {
        let fm = parse_frontmatter("title: Intro\nauthor: Sam\n").unwrap();
        let json = serde_json::to_value(&fm).unwrap();
        assert_eq!(json, serde_json::json!({"title": "Intro", "author": "Sam"}));
    }
}
