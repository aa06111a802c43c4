//! `folio routes` command implementation.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use folio_config::Config;
use folio_routes::flatten;

use super::load_routes;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    /// Path to configuration file (default: auto-discover folio.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the page list as JSON.
    #[arg(long)]
    json: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl RoutesArgs {
    /// Print the flattened page list in navigation order.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let config = Config::load(self.config.as_deref(), None)?;
        let tree = load_routes(&config, &output)?;
        let pages = flatten(tree.nodes());

        let mut stdout = io::stdout().lock();
        if self.json {
            serde_json::to_writer_pretty(&mut stdout, &pages)?;
            writeln!(stdout)?;
            return Ok(());
        }

        for page in &pages {
            writeln!(stdout, "{}\t{}", page.href, page.title)?;
        }
        output.detail(&format!("{} pages", pages.len()));
        Ok(())
    }
}
