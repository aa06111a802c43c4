//! CLI command implementations.

pub(crate) mod page;
pub(crate) mod routes;
pub(crate) mod search;
pub(crate) mod search_index;

pub(crate) use page::PageArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use search::SearchArgs;

use folio_config::Config;
use folio_routes::RouteTree;

use crate::error::CliError;
use crate::output::Output;

/// Load the route tree named in the config.
///
/// A missing routes file yields an empty tree; an invalid one is an error.
pub(crate) fn load_routes(config: &Config, output: &Output) -> Result<RouteTree, CliError> {
    let path = &config.docs_resolved.routes;
    if !path.exists() {
        output.warning(&format!(
            "Routes file not found: {} (continuing without navigation)",
            path.display()
        ));
        return Ok(RouteTree::default());
    }
    Ok(RouteTree::load(path)?)
}
