//! Document assembly.

use folio_markup::{CompileOptions, Frontmatter, compile};
use folio_routes::{PageIndex, PrevNext, normalize_slug};
use serde::Serialize;

use crate::error::LoadError;
use crate::location::LocationTable;
use crate::source::ContentSource;
use crate::toc::{HeadingEntry, extract_headings};

/// Fully loaded page.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Normalized slug.
    pub slug: String,
    pub frontmatter: Frontmatter,
    /// Rendered HTML.
    pub content: String,
    /// Level 2-4 headings.
    pub tocs: Vec<HeadingEntry>,
    pub last_updated: Option<String>,
    pub prev_next: PrevNext,
}

/// Loads documents by slug.
///
/// Owns the page index and the location table derived from it; both are
/// built once in [`DocumentLoader::new`] and never change.
pub struct DocumentLoader<S> {
    source: S,
    index: PageIndex,
    locations: LocationTable,
    options: CompileOptions,
}

impl<S: ContentSource> DocumentLoader<S> {
    /// Create a loader, resolving the location of every indexed page.
    pub fn new(source: S, index: PageIndex) -> Self {
        let locations = LocationTable::build(index.pages(), &source);
        tracing::debug!(pages = locations.len(), "Resolved page locations");
        Self {
            source,
            index,
            locations,
            options: CompileOptions::default(),
        }
    }

    /// Replace the compiler options.
    #[must_use]
    pub fn with_options(mut self, options: CompileOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn index(&self) -> &PageIndex {
        &self.index
    }

    #[must_use]
    pub fn locations(&self) -> &LocationTable {
        &self.locations
    }

    /// Load the document for `slug`.
    ///
    /// # Errors
    ///
    /// - [`LoadError::InvalidSlug`] if the slug normalizes to nothing or has
    ///   a `.` or `..` segment
    /// - [`LoadError::ReadFailed`] / [`LoadError::FetchFailed`] if the source
    ///   cannot provide the text
    /// - [`LoadError::CompileFailed`] if the text does not compile
    pub fn load(&self, slug: &str) -> Result<Document, LoadError> {
        let normalized = normalize_slug(slug);
        if normalized.is_empty() || normalized.split('/').any(|s| s == "." || s == "..") {
            return Err(LoadError::InvalidSlug {
                raw: slug.to_owned(),
            });
        }

        let location = match self.locations.get(&normalized) {
            Some(location) => location.clone(),
            None => self.source.locate(&normalized),
        };
        let raw = self.source.fetch(&location)?;

        let compiled = compile(&raw.text, &self.options).map_err(|source| {
            LoadError::CompileFailed {
                slug: normalized.clone(),
                source,
            }
        })?;
        let tocs = extract_headings(&raw.text);
        let prev_next = self.index.prev_next(&normalized);

        Ok(Document {
            slug: normalized,
            frontmatter: compiled.frontmatter,
            content: compiled.content,
            tocs,
            last_updated: raw.last_updated,
            prev_next,
        })
    }

    /// Load the document for `slug`, logging any failure and returning
    /// `None` so callers can render a not-found page.
    pub fn load_or_not_found(&self, slug: &str) -> Option<Document> {
        match self.load(slug) {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::error!(slug, kind = ?e.kind(), error = %e, "Error processing document");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_markup::TransformChain;
    use folio_routes::{FlatPage, RoutePage, RouteTree};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::LoadErrorKind;
    use crate::location::ContentLocation;
    use crate::source::RawContent;
    use crate::{LocalSource, MockSource};

    fn index() -> PageIndex {
        PageIndex::from_tree(&RouteTree::new(vec![
            RoutePage::new("Intro", "/intro").into(),
            RoutePage::new("API", "/api")
                .group()
                .with_items(vec![
                    RoutePage::new("Get", "/get").into(),
                    RoutePage::new("Put", "/put").into(),
                ])
                .into(),
        ]))
    }

    fn page(title: &str, href: &str) -> FlatPage {
        FlatPage {
            title: title.to_owned(),
            href: href.to_owned(),
        }
    }

    #[test]
    fn test_load_assembles_document() {
        let source = MockSource::new().with_raw(
            "api/get",
            RawContent {
                text: "---\ntitle: Get\ndescription: Fetch things\n---\n## Usage\n\nCall it.\n\n### Options\n".to_owned(),
                last_updated: Some("2024-05-01T10:00:00.000Z".to_owned()),
            },
        );
        let loader = DocumentLoader::new(source, index());
        let document = loader.load("/api/get/").unwrap();

        assert_eq!(document.slug, "api/get");
        assert_eq!(document.frontmatter.title.as_deref(), Some("Get"));
        assert_eq!(document.frontmatter.description.as_deref(), Some("Fetch things"));
        assert!(document.content.contains("<p>Call it.</p>"));
        assert_eq!(
            document.tocs,
            vec![
                HeadingEntry {
                    level: 2,
                    text: "Usage".to_owned(),
                    href: "#usage".to_owned(),
                },
                HeadingEntry {
                    level: 3,
                    text: "Options".to_owned(),
                    href: "#options".to_owned(),
                },
            ]
        );
        assert_eq!(
            document.last_updated.as_deref(),
            Some("2024-05-01T10:00:00.000Z")
        );
        assert_eq!(
            document.prev_next,
            PrevNext {
                prev: Some(page("Intro", "/intro")),
                next: Some(page("Put", "/api/put")),
            }
        );
    }

    #[test]
    fn test_load_invalid_slug() {
        let loader = DocumentLoader::new(MockSource::new(), index());
        let err = loader.load("///").unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::NotFound);
        assert!(loader.load_or_not_found("").is_none());
    }

    #[test]
    fn test_load_rejects_dot_segments() {
        let source = MockSource::new().with_page("../secret", "TOP SECRET\n");
        let loader = DocumentLoader::new(source, index());
        for slug in ["/../secret", "intro/../../secret", "./intro"] {
            let err = loader.load(slug).unwrap_err();
            assert!(matches!(err, LoadError::InvalidSlug { .. }), "{slug}");
        }
    }

    #[test]
    fn test_toc_links_match_heading_ids() {
        let source = MockSource::new().with_page(
            "intro",
            "## a - b\n\n## snake_case\n\n## Café & Co\n\n### Getting Started\n",
        );
        let loader = DocumentLoader::new(source, index());
        let document = loader.load("intro").unwrap();

        assert_eq!(document.tocs.len(), 4);
        for entry in &document.tocs {
            let id = entry.href.trim_start_matches('#');
            assert!(
                document.content.contains(&format!(r#"id="{id}""#)),
                "{} missing from {}",
                entry.href,
                document.content
            );
        }
    }

    #[test]
    fn test_load_missing_page() {
        let loader = DocumentLoader::new(MockSource::new(), index());
        let err = loader.load("intro").unwrap_err();
        assert_eq!(err.kind(), LoadErrorKind::ReadFailed);
        assert!(loader.load_or_not_found("intro").is_none());
    }

    #[test]
    fn test_load_fetch_failure() {
        let loader = DocumentLoader::new(MockSource::new().with_failure("intro", 503), index());
        assert_eq!(
            loader.load("intro").unwrap_err().kind(),
            LoadErrorKind::FetchFailed
        );
    }

    #[test]
    fn test_load_compile_failure() {
        let source = MockSource::new().with_page("intro", "---\ntitle: [broken\n---\nBody\n");
        let loader = DocumentLoader::new(source, index());
        assert_eq!(
            loader.load("intro").unwrap_err().kind(),
            LoadErrorKind::CompileFailed
        );
    }

    #[test]
    fn test_load_page_outside_navigation() {
        let source = MockSource::new().with_page("drafts/idea", "Draft\n");
        let loader = DocumentLoader::new(source, index());

        assert_eq!(loader.locations().get("drafts/idea"), None);
        let document = loader.load("drafts/idea").unwrap();
        assert_eq!(document.prev_next, PrevNext::default());
        assert!(document.tocs.is_empty());
    }

    #[test]
    fn test_location_table_covers_navigation() {
        let loader = DocumentLoader::new(MockSource::new(), index());
        assert_eq!(loader.locations().len(), 3);
        assert_eq!(
            loader.locations().get("api/put"),
            Some(&ContentLocation::Path("mock/api/put".into()))
        );
    }

    #[test]
    fn test_first_and_last_page_links() {
        let source = MockSource::new()
            .with_page("intro", "Hi\n")
            .with_page("api/put", "Put\n");
        let loader = DocumentLoader::new(source, index());

        assert_eq!(loader.load("intro").unwrap().prev_next.prev, None);
        assert_eq!(loader.load("api/put").unwrap().prev_next.next, None);
    }

    #[test]
    fn test_with_options() {
        let source = MockSource::new().with_page("intro", "## Hello\n");
        let loader = DocumentLoader::new(source, index()).with_options(CompileOptions {
            frontmatter: true,
            chain: TransformChain::empty(),
        });
        let document = loader.load("intro").unwrap();
        assert_eq!(document.content, "<h2>Hello</h2>");
    }

    #[test]
    fn test_local_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("intro")).unwrap();
        std::fs::write(
            dir.path().join("intro/index.mdx"),
            "---\ntitle: Introduction\n---\n## Welcome\n",
        )
        .unwrap();

        let loader = DocumentLoader::new(LocalSource::new(dir.path(), "index.mdx"), index());
        let document = loader.load_or_not_found("intro").unwrap();

        assert_eq!(document.frontmatter.title.as_deref(), Some("Introduction"));
        assert!(document.last_updated.is_some());
        assert_eq!(document.tocs.len(), 1);
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let source = MockSource::new().with_page("intro", "Hi\n");
        let loader = DocumentLoader::new(source, index());
        let json = serde_json::to_value(loader.load("intro").unwrap()).unwrap();

        assert_eq!(json["slug"], "intro");
        assert!(json["lastUpdated"].is_null());
        assert_eq!(json["prevNext"]["next"]["href"], "/api/get");
    }
}
