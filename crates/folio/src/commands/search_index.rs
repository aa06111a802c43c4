//! `folio search-index` command implementation.

use folio_config::Config;
use folio_search::CorpusBuilder;

use super::load_routes;
use crate::error::CliError;
use crate::output::Output;

/// Build `documents.json` from the content directory.
///
/// Takes no arguments: paths come from the discovered `folio.toml` or the
/// defaults.
///
/// # Errors
///
/// Returns an error if configuration, the route tree, directory traversal
/// or writing the artifact fails. Per-file errors only skip the file.
pub(crate) fn execute() -> Result<(), CliError> {
    let output = Output::new();
    let config = Config::load(None, None)?;
    let routes = load_routes(&config, &output)?;

    let docs = &config.docs_resolved;
    let search = &config.search_resolved;
    output.info(&format!("Content: {}", docs.content_dir.display()));

    let report = CorpusBuilder::new(&docs.content_dir, routes)
        .with_extension(&docs.extension)
        .with_index_name(&docs.index_name)
        .with_denylist(search.denylist.clone())
        .run(&search.output_dir)?;

    output.corpus_summary(report.written, report.skipped, &report.path);
    Ok(())
}
