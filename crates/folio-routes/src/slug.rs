//! Slug normalization and path joining.

/// Path separator used in slugs and route hrefs.
pub const SEPARATOR: char = '/';

/// Normalize a path-like string into a canonical slug.
///
/// Leading, trailing and repeated separators are dropped, and a segment equal
/// to its immediate predecessor is collapsed. Case is preserved.
///
/// # Examples
///
/// ```
/// use folio_routes::normalize_slug;
///
/// assert_eq!(normalize_slug("/a//b/"), "a/b");
/// assert_eq!(normalize_slug("a/a/b"), "a/b");
/// assert_eq!(normalize_slug("///"), "");
/// ```
#[must_use]
pub fn normalize_slug(raw: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split(SEPARATOR).filter(|s| !s.is_empty()) {
        if segments.last() != Some(&segment) {
            segments.push(segment);
        }
    }
    segments.join("/")
}

/// Append a route href to its parent's accumulated path.
///
/// The href always joins with exactly one separator. An empty href resolves
/// to the parent path itself.
///
/// # Examples
///
/// ```
/// use folio_routes::join_path;
///
/// assert_eq!(join_path("", "intro"), "/intro");
/// assert_eq!(join_path("/api", "/get"), "/api/get");
/// assert_eq!(join_path("/api", "//get"), "/api/get");
/// ```
#[must_use]
pub fn join_path(parent: &str, href: &str) -> String {
    let href = href.trim_start_matches(SEPARATOR);
    if href.is_empty() {
        return if parent.is_empty() {
            SEPARATOR.to_string()
        } else {
            parent.to_owned()
        };
    }
    format!("{parent}{SEPARATOR}{href}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_examples() {
        assert_eq!(normalize_slug("/a//b/"), "a/b");
        assert_eq!(normalize_slug("a/a/b"), "a/b");
        assert_eq!(normalize_slug(""), "");
        assert_eq!(normalize_slug("///"), "");
    }

    #[test]
    fn test_normalize_preserves_case() {
        assert_eq!(normalize_slug("/Guide/Setup"), "Guide/Setup");
        assert_eq!(normalize_slug("a/A"), "a/A");
    }

    #[test]
    fn test_normalize_collapses_runs_of_duplicates() {
        assert_eq!(normalize_slug("docs/docs/docs/intro"), "docs/intro");
    }

    #[test]
    fn test_normalize_keeps_non_adjacent_duplicates() {
        assert_eq!(normalize_slug("a/b/a"), "a/b/a");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "",
            "/",
            "//x//",
            "a/a/a/b/b",
            "/getting-started/installation/",
            "x/y/x/y",
            "  spaced / path ",
        ];
        for input in inputs {
            let once = normalize_slug(input);
            assert_eq!(normalize_slug(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_join_path_root() {
        assert_eq!(join_path("", "/intro"), "/intro");
        assert_eq!(join_path("", ""), "/");
    }

    #[test]
    fn test_join_path_nested() {
        assert_eq!(join_path("/api", "get"), "/api/get");
        assert_eq!(join_path("/api/v1", "/users"), "/api/v1/users");
    }

    #[test]
    fn test_join_path_empty_href_keeps_parent() {
        assert_eq!(join_path("/guides", ""), "/guides");
        assert_eq!(join_path("/guides", "/"), "/guides");
    }
}
