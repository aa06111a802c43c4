//! CLI error types.

use folio_config::ConfigError;
use folio_routes::RoutesError;
use folio_search::BatchError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Routes(#[from] RoutesError),

    #[error("{0}")]
    Batch(#[from] BatchError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),

    #[error("Page not found: {0}")]
    NotFound(String),
}
