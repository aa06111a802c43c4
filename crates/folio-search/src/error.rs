//! Corpus errors.

use std::path::PathBuf;

use folio_markup::mdx::PruneError;

/// Failure processing a single content file. The file is skipped.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid frontmatter in {}: {source}", path.display())]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("Malformed components in {}: {source}", path.display())]
    Components {
        path: PathBuf,
        #[source]
        source: PruneError,
    },
}

/// Failure that aborts the whole batch.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Error reading directory {}: {source}", path.display())]
    Discover {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid search data in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
