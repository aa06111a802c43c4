//! In-memory content source for testing.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::LoadError;
use crate::location::ContentLocation;
use crate::source::{ContentSource, RawContent};

/// Content source backed by a map of slug to page text.
///
/// Locations are `mock/<slug>` paths. Unknown slugs fail with
/// [`LoadError::ReadFailed`], failing slugs with [`LoadError::FetchFailed`].
///
/// # Example
///
/// ```ignore
/// use folio_content::MockSource;
///
/// let source = MockSource::new()
///     .with_page("intro", "---\ntitle: Intro\n---\n## Start\n")
///     .with_failure("broken", 503);
/// ```
#[derive(Debug, Default)]
pub struct MockSource {
    pages: HashMap<String, RawContent>,
    failures: HashMap<String, u16>,
}

const ROOT: &str = "mock";

impl MockSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page without a modification time.
    #[must_use]
    pub fn with_page(self, slug: impl Into<String>, text: impl Into<String>) -> Self {
        self.with_raw(
            slug,
            RawContent {
                text: text.into(),
                last_updated: None,
            },
        )
    }

    /// Add a page with full raw content.
    #[must_use]
    pub fn with_raw(mut self, slug: impl Into<String>, raw: RawContent) -> Self {
        self.pages.insert(slug.into(), raw);
        self
    }

    /// Make fetching `slug` fail with an HTTP status.
    #[must_use]
    pub fn with_failure(mut self, slug: impl Into<String>, status: u16) -> Self {
        self.failures.insert(slug.into(), status);
        self
    }

    fn slug_of(location: &ContentLocation) -> Option<String> {
        match location {
            ContentLocation::Path(path) => path
                .strip_prefix(ROOT)
                .ok()
                .map(|rest| rest.to_string_lossy().replace('\\', "/")),
            ContentLocation::Url(_) => None,
        }
    }
}

impl ContentSource for MockSource {
    fn locate(&self, slug: &str) -> ContentLocation {
        ContentLocation::Path(PathBuf::from(ROOT).join(slug))
    }

    fn fetch(&self, location: &ContentLocation) -> Result<RawContent, LoadError> {
        let not_found = || {
            LoadError::read(
                location.to_string(),
                std::io::Error::from(std::io::ErrorKind::NotFound),
            )
        };
        let slug = Self::slug_of(location).ok_or_else(not_found)?;

        if let Some(&status) = self.failures.get(&slug) {
            return Err(LoadError::FetchFailed {
                url: location.to_string(),
                status: Some(status),
                message: status.to_string(),
            });
        }
        self.pages.get(&slug).cloned().ok_or_else(not_found)
    }
}
