//! Document loading errors.

use std::path::PathBuf;

use folio_markup::CompileError;

/// Category of a loading failure.
///
/// Callers that do not care about the distinction treat every kind as
/// "not found".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The slug does not name a page.
    NotFound,
    /// Remote retrieval failed.
    FetchFailed,
    /// Local retrieval failed.
    ReadFailed,
    /// The markup compiler rejected the content.
    CompileFailed,
}

/// Error loading a document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Slug normalizes to nothing.
    #[error("Invalid slug: {raw:?}")]
    InvalidSlug { raw: String },
    /// Remote request failed or returned a non-success status.
    #[error("Failed to fetch {url}: {message}")]
    FetchFailed {
        url: String,
        /// HTTP status, absent for transport errors.
        status: Option<u16>,
        message: String,
    },
    /// Local file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Compilation failed.
    #[error("Failed to compile {slug}: {source}")]
    CompileFailed {
        slug: String,
        #[source]
        source: CompileError,
    },
}

impl LoadError {
    /// Semantic category of this error.
    #[must_use]
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            Self::InvalidSlug { .. } => LoadErrorKind::NotFound,
            Self::FetchFailed { .. } => LoadErrorKind::FetchFailed,
            Self::ReadFailed { .. } => LoadErrorKind::ReadFailed,
            Self::CompileFailed { .. } => LoadErrorKind::CompileFailed,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }
}
