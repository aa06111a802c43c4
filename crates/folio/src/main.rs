//! Folio CLI - static documentation site generator.
//!
//! Provides commands for:
//! - `search-index`: Build the search corpus (`documents.json`)
//! - `routes`: Print the flattened page list
//! - `page`: Load a page and print it as JSON
//! - `search`: Query the search corpus

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{PageArgs, RoutesArgs, SearchArgs};
use output::Output;

/// Folio - static documentation site generator.
#[derive(Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the search index from the content directory.
    SearchIndex,
    /// Print pages in navigation order.
    Routes(RoutesArgs),
    /// Load a page and print it as JSON.
    Page(PageArgs),
    /// Search the built index.
    Search(SearchArgs),
}

impl Commands {
    fn verbose(&self) -> bool {
        match self {
            Self::SearchIndex => false,
            Self::Routes(args) => args.verbose,
            Self::Page(args) => args.verbose,
            Self::Search(args) => args.verbose,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.command.verbose() {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::SearchIndex => commands::search_index::execute(),
        Commands::Routes(args) => args.execute(),
        Commands::Page(args) => args.execute(),
        Commands::Search(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
