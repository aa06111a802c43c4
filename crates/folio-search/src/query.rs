//! Substring search over the corpus.

use crate::record::SearchRecord;

/// Records whose title, description or content contain `term`, ignoring
/// case. An empty term matches nothing.
#[must_use]
pub fn query<'a>(records: &'a [SearchRecord], term: &str) -> Vec<&'a SearchRecord> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    records
        .iter()
        .filter(|record| {
            [&record.title, &record.description, &record.content]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(slug: &str, title: &str, content: &str) -> SearchRecord {
        SearchRecord {
            slug: slug.to_owned(),
            title: title.to_owned(),
            description: String::new(),
            content: content.to_owned(),
        }
    }

    #[test]
    fn test_query_matches_any_field_case_insensitively() {
        let records = vec![
            record("/intro", "Introduction", "Welcome aboard"),
            record("/install", "Install", "Run NPM install"),
            record("/faq", "FAQ", "Questions"),
        ];

        let slugs: Vec<_> = query(&records, "npm").iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/install"]);

        let slugs: Vec<_> = query(&records, "IN").iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(slugs, vec!["/intro", "/install"]);
    }

    #[test]
    fn test_query_description() {
        let mut with_description = record("/a", "A", "");
        with_description.description = "Billing overview".to_owned();
        let records = [with_description];
        assert_eq!(query(&records, "billing").len(), 1);
    }

    #[test]
    fn test_empty_term_matches_nothing() {
        let records = vec![record("/a", "A", "text")];
        assert!(query(&records, "").is_empty());
    }
}
