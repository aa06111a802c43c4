//! Search records.

use serde::{Deserialize, Serialize};

/// One searchable page.
///
/// Field names are the contract with the client search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Markup body with frontmatter and denylisted components removed.
    pub content: String,
}

/// Title used when neither frontmatter nor the route tree provide one.
pub(crate) const UNTITLED: &str = "Untitled";
