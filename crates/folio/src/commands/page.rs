//! `folio page` command implementation.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_content::{ContentSource, DocumentLoader, LocalSource, RemoteSource};
use folio_routes::PageIndex;

use super::load_routes;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Page slug, e.g. `getting-started/installation`.
    slug: String,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Content directory (overrides config).
    #[arg(long)]
    content_dir: Option<PathBuf>,

    /// Fetch content from the remote repository (overrides config).
    #[arg(long)]
    remote: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl PageArgs {
    /// Load a page and print it as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::NotFound`] if the page cannot be loaded for any
    /// reason; the cause is logged.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let cli_settings = CliSettings {
            content_dir: self.content_dir,
            remote_enabled: self.remote.then_some(true),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let index = PageIndex::from_tree(&load_routes(&config, &output)?);

        let docs = &config.docs_resolved;
        if config.remote.enabled {
            let remote = &config.remote;
            let source = RemoteSource::new(
                &remote.repo_base,
                &remote.branch,
                &docs.content_path,
                docs.page_file_name(),
                remote.timeout(),
            );
            print_page(&DocumentLoader::new(source, index), &self.slug)
        } else {
            let source = LocalSource::new(&docs.content_dir, docs.page_file_name());
            print_page(&DocumentLoader::new(source, index), &self.slug)
        }
    }
}

fn print_page<S: ContentSource>(loader: &DocumentLoader<S>, slug: &str) -> Result<(), CliError> {
    let document = loader
        .load_or_not_found(slug)
        .ok_or_else(|| CliError::NotFound(slug.to_owned()))?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &document)?;
    writeln!(stdout)?;
    Ok(())
}
