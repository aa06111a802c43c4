//! Sidebar navigation tree.

use serde::Serialize;

use crate::route::RouteNode;
use crate::slug::join_path;

/// Entry in the sidebar navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavEntry {
    /// Page or group label with resolved path.
    Link {
        /// Display title.
        title: String,
        /// Full path from the tree root.
        href: String,
        /// Section label rendered above this entry.
        #[serde(skip_serializing_if = "Option::is_none")]
        heading: Option<String>,
        /// False for group labels.
        clickable: bool,
        /// Nested entries.
        #[serde(skip_serializing_if = "Vec::is_empty")]
        children: Vec<NavEntry>,
    },
    /// Visual separator.
    Spacer,
}

/// Build the sidebar tree with full paths resolved.
///
/// Unlike [`flatten`](crate::flatten), nothing is deduplicated or dropped.
#[must_use]
pub fn navigation(nodes: &[RouteNode]) -> Vec<NavEntry> {
    build(nodes, "")
}

fn build(nodes: &[RouteNode], parent: &str) -> Vec<NavEntry> {
    nodes
        .iter()
        .map(|node| match node {
            RouteNode::Spacer => NavEntry::Spacer,
            RouteNode::Page(page) => {
                let href = join_path(parent, &page.href);
                let children = build(&page.items, &href);
                NavEntry::Link {
                    title: page.title.clone(),
                    href,
                    heading: page.heading.clone(),
                    clickable: !page.no_link,
                    children,
                }
            }
        })
        .collect()
}
