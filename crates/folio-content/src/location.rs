//! Content locations and the startup location table.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use folio_routes::{FlatPage, normalize_slug};

use crate::source::ContentSource;

/// Where a page's raw text lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContentLocation {
    /// File on the local filesystem.
    Path(PathBuf),
    /// Raw file URL.
    Url(String),
}

impl fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Immutable `slug -> location` mapping for every navigable page.
///
/// Built once from the flattened page list. Slugs outside the table are
/// resolved on demand by the source without being recorded.
#[derive(Clone, Debug, Default)]
pub struct LocationTable {
    entries: HashMap<String, ContentLocation>,
}

impl LocationTable {
    /// Resolve the location of every page in `pages`.
    pub fn build<S: ContentSource + ?Sized>(pages: &[FlatPage], source: &S) -> Self {
        let entries = pages
            .iter()
            .map(|page| normalize_slug(&page.href))
            .filter(|slug| !slug.is_empty())
            .map(|slug| {
                let location = source.locate(&slug);
                (slug, location)
            })
            .collect();
        Self { entries }
    }

    /// Precomputed location for a normalized slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ContentLocation> {
        self.entries.get(slug)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::source::LocalSource;

    fn page(href: &str) -> FlatPage {
        FlatPage {
            title: href.to_owned(),
            href: href.to_owned(),
        }
    }

    #[test]
    fn test_build_resolves_every_page() {
        let source = LocalSource::new("/site/contents/docs", "index.mdx");
        let table = LocationTable::build(&[page("/intro"), page("/api/get")], &source);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.get("api/get"),
            Some(&ContentLocation::Path(
                Path::new("/site/contents/docs/api/get/index.mdx").to_path_buf()
            ))
        );
        assert_eq!(table.get("missing"), None);
    }

    #[test]
    fn test_build_skips_empty_slugs() {
        let source = LocalSource::new("/docs", "index.mdx");
        let table = LocationTable::build(&[page("/"), page("")], &source);
        assert!(table.is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ContentLocation::Url("https://example.com/raw".to_owned()).to_string(),
            "https://example.com/raw"
        );
        assert_eq!(
            ContentLocation::Path(PathBuf::from("/a/b.mdx")).to_string(),
            "/a/b.mdx"
        );
    }
}
