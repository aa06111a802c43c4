//! Batch corpus construction and the `documents.json` artifact.

use std::path::{Path, PathBuf};

use folio_markup::mdx::{DEFAULT_DENYLIST, strip_components};
use folio_markup::{parse_frontmatter, split_frontmatter};
use folio_routes::{RouteTree, find_by_slug};

use crate::discover::{derive_slug, discover_files};
use crate::error::{BatchError, SearchError};
use crate::record::{SearchRecord, UNTITLED};

/// Artifact file name.
/// Name of the search artifact inside the output directory.
pub const DOCUMENTS_FILENAME: &str = "documents.json";

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    /// Records written.
    pub written: usize,
    /// Files skipped because of per-file errors.
    pub skipped: usize,
    /// Artifact path.
    pub path: PathBuf,
}

/// Builds search records from a content directory.
#[derive(Debug)]
pub struct CorpusBuilder {
    content_dir: PathBuf,
    extension: String,
    index_name: String,
    denylist: Vec<String>,
    routes: RouteTree,
}

impl CorpusBuilder {
    /// Builder for `.mdx` files with `index` pages and the default denylist.
    pub fn new(content_dir: impl Into<PathBuf>, routes: RouteTree) -> Self {
        Self {
            content_dir: content_dir.into(),
            extension: "mdx".to_owned(),
            index_name: "index".to_owned(),
            denylist: DEFAULT_DENYLIST.iter().map(|&s| s.to_owned()).collect(),
            routes,
        }
    }

    #[must_use]
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    #[must_use]
    pub fn with_index_name(mut self, index_name: impl Into<String>) -> Self {
        self.index_name = index_name.into();
        self
    }

    /// Component names to remove from page bodies.
    #[must_use]
    pub fn with_denylist(mut self, denylist: Vec<String>) -> Self {
        self.denylist = denylist;
        self
    }

    /// Turn one content file into a search record.
    ///
    /// # Errors
    ///
    /// Returns a [`SearchError`] if the file cannot be read, its frontmatter
    /// is invalid or its component markup is malformed.
    pub fn process_file(&self, path: &Path) -> Result<SearchRecord, SearchError> {
        let raw = std::fs::read_to_string(path).map_err(|source| SearchError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let (yaml, body) = split_frontmatter(&raw);
        let frontmatter = yaml
            .map(parse_frontmatter)
            .transpose()
            .map_err(|source| SearchError::Frontmatter {
                path: path.to_path_buf(),
                source,
            })?
            .unwrap_or_default();

        let content = strip_components(body, self.denylist.as_slice()).map_err(|source| {
            SearchError::Components {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let slug = derive_slug(&self.content_dir, path, &self.index_name);
        let title = frontmatter
            .title
            .or_else(|| find_by_slug(self.routes.nodes(), &slug).map(|page| page.title.clone()))
            .unwrap_or_else(|| UNTITLED.to_owned());

        Ok(SearchRecord {
            slug,
            title,
            description: frontmatter.description.unwrap_or_default(),
            content,
        })
    }

    /// Build records for every content file, skipping files that fail.
    ///
    /// Returns the records and the number of skipped files.
    ///
    /// # Errors
    ///
    /// Returns [`BatchError::Discover`] if the content directory cannot be
    /// walked.
    pub fn build(&self) -> Result<(Vec<SearchRecord>, usize), BatchError> {
        let files = discover_files(&self.content_dir, &self.extension)?;
        tracing::debug!(count = files.len(), "Discovered content files");

        let mut records = Vec::with_capacity(files.len());
        let mut skipped = 0;
        for file in &files {
            match self.process_file(file) {
                Ok(record) => records.push(record),
                Err(e) => {
                    tracing::warn!(
                        path = %file.display(),
                        error = %e,
                        "Skipping file due to error"
                    );
                    skipped += 1;
                }
            }
        }
        Ok((records, skipped))
    }

    /// Build the corpus and write `documents.json` into `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns a [`BatchError`] if discovery or writing fails. Nothing is
    /// written in that case.
    pub fn run(&self, output_dir: &Path) -> Result<BatchReport, BatchError> {
        let (records, skipped) = self.build()?;
        let path = write_documents(&records, output_dir)?;
        tracing::info!(
            skipped,
            "Successfully processed {} files",
            records.len()
        );
        Ok(BatchReport {
            written: records.len(),
            skipped,
            path,
        })
    }
}

/// Write records as pretty-printed JSON to `<output_dir>/documents.json`,
/// creating the directory if needed.
///
/// # Errors
///
/// Returns [`BatchError::Write`] if the directory or file cannot be written.
pub fn write_documents(records: &[SearchRecord], output_dir: &Path) -> Result<PathBuf, BatchError> {
    let write_error = |path: &Path, source| BatchError::Write {
        path: path.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(output_dir).map_err(|e| write_error(output_dir, e))?;
    let path = output_dir.join(DOCUMENTS_FILENAME);
    let json = serde_json::to_string_pretty(records).map_err(|e| BatchError::Json {
        path: path.clone(),
        source: e,
    })?;
    std::fs::write(&path, json).map_err(|e| write_error(&path, e))?;
    Ok(path)
}

/// Read a previously written `documents.json`.
///
/// # Errors
///
/// Returns [`BatchError::Read`] or [`BatchError::Json`] if the artifact is
/// missing or malformed.
pub fn read_documents(path: &Path) -> Result<Vec<SearchRecord>, BatchError> {
    let text = std::fs::read_to_string(path).map_err(|source| BatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| BatchError::Json {
        path: path.to_path_buf(),
        source,
    })
}
