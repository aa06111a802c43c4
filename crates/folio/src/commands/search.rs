//! `folio search` command implementation.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use folio_config::Config;
use folio_search::{query, read_documents};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the search command.
#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Text to look for in titles, descriptions and content.
    term: String,

    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show at most this many results.
    #[arg(short, long)]
    limit: Option<usize>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SearchArgs {
    /// Query the written search artifact and print matching pages.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let records = read_documents(&config.search_resolved.documents_path())?;

        let matches = query(&records, &self.term);
        if matches.is_empty() {
            output.detail(&format!("No results for \"{}\"", self.term));
            return Ok(());
        }

        let mut stdout = io::stdout().lock();
        let limit = self.limit.unwrap_or(usize::MAX);
        for record in matches.iter().take(limit) {
            writeln!(stdout, "{}\t{}", record.slug, record.title)?;
        }
        output.detail(&format!("{} result(s)", matches.len()));
        Ok(())
    }
}
