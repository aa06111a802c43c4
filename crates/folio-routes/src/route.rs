//! Route tree model.
//!
//! A route tree is an ordered sequence of [`RouteNode`]s. Each node is either
//! a navigable page (possibly a non-clickable group label) or a visual spacer.
//!
//! Trees are authored in YAML (JSON is accepted too, being a YAML subset):
//!
//! ```yaml
//! - title: Introduction
//!   href: /introduction
//!   heading: Getting Started
//!   items:
//!     - title: Installation
//!       href: /installation
//! - spacer: true
//! - title: API Reference
//!   href: /api
//!   noLink: true
//!   items:
//!     - title: Endpoints
//!       href: /endpoints
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// A node in the route tree.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawRouteNode")]
pub enum RouteNode {
    /// A page or group label.
    Page(RoutePage),
    /// Visual separator with no navigational data.
    Spacer,
}

impl RouteNode {
    /// Return the page if this node is not a spacer.
    #[must_use]
    pub fn as_page(&self) -> Option<&RoutePage> {
        match self {
            Self::Page(page) => Some(page),
            Self::Spacer => None,
        }
    }
}

impl From<RoutePage> for RouteNode {
    fn from(page: RoutePage) -> Self {
        Self::Page(page)
    }
}

/// Page entry in the route tree.
///
/// `href` is relative to the parent's accumulated path.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutePage {
    /// Display title.
    pub title: String,
    /// Path fragment appended to the parent path.
    pub href: String,
    /// Group label only; not navigable by itself.
    #[serde(default, rename = "noLink", alias = "no_link")]
    pub no_link: bool,
    /// Section label rendered above this entry in the sidebar.
    #[serde(default)]
    pub heading: Option<String>,
    /// Child entries, nested under this page's path.
    #[serde(default)]
    pub items: Vec<RouteNode>,
}

impl RoutePage {
    /// Create a navigable page with no children.
    #[must_use]
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
            no_link: false,
            heading: None,
            items: Vec::new(),
        }
    }

    /// Mark this page as a non-clickable group label.
    #[must_use]
    pub fn group(mut self) -> Self {
        self.no_link = true;
        self
    }

    /// Set the sidebar section heading.
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Set child entries.
    #[must_use]
    pub fn with_items(mut self, items: Vec<RouteNode>) -> Self {
        self.items = items;
        self
    }
}

/// Untagged wire form; the spacer shape is tried first so a page can never
/// be mistaken for one.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawRouteNode {
    Spacer(RawSpacer),
    Page(RoutePage),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSpacer {
    spacer: bool,
}

impl TryFrom<RawRouteNode> for RouteNode {
    type Error = String;

    fn try_from(raw: RawRouteNode) -> Result<Self, Self::Error> {
        match raw {
            RawRouteNode::Spacer(RawSpacer { spacer: true }) => Ok(Self::Spacer),
            RawRouteNode::Spacer(RawSpacer { spacer: false }) => {
                Err("spacer node must have `spacer: true`".to_owned())
            }
            RawRouteNode::Page(page) => Ok(Self::Page(page)),
        }
    }
}

/// Error loading a route tree.
#[derive(Debug, thiserror::Error)]
pub enum RoutesError {
    /// Routes file could not be read.
    #[error("Failed to read routes file {}: {source}", path.display())]
    Io {
        /// Routes file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Routes document is not a valid route tree.
    #[error("Invalid route tree: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// The authored route tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RouteTree {
    nodes: Vec<RouteNode>,
}

impl RouteTree {
    /// Create a tree from top-level nodes.
    #[must_use]
    pub fn new(nodes: Vec<RouteNode>) -> Self {
        Self { nodes }
    }

    /// Parse a tree from YAML or JSON text.
    pub fn from_yaml(text: &str) -> Result<Self, RoutesError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load a tree from a routes file.
    pub fn load(path: &Path) -> Result<Self, RoutesError> {
        let text = std::fs::read_to_string(path).map_err(|source| RoutesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    /// Top-level nodes in authored order.
    #[must_use]
    pub fn nodes(&self) -> &[RouteNode] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_pages_and_spacer() {
        let yaml = r"
- title: Intro
  href: /intro
- spacer: true
- title: API
  href: /api
  noLink: true
  heading: Reference
  items:
    - title: Get
      href: /get
";
        let tree = RouteTree::from_yaml(yaml).unwrap();

        assert_eq!(
            tree,
            RouteTree::new(vec![
                RoutePage::new("Intro", "/intro").into(),
                RouteNode::Spacer,
                RoutePage::new("API", "/api")
                    .group()
                    .with_heading("Reference")
                    .with_items(vec![RoutePage::new("Get", "/get").into()])
                    .into(),
            ])
        );
    }

    #[test]
    fn test_parse_json_tree() {
        let json = r#"[{"title": "Intro", "href": "/intro"}, {"spacer": true}]"#;
        let tree = RouteTree::from_yaml(json).unwrap();
        assert_eq!(tree.nodes().len(), 2);
        assert_eq!(tree.nodes()[1], RouteNode::Spacer);
    }

    #[test]
    fn test_spacer_false_rejected() {
        let result = RouteTree::from_yaml("- spacer: false");
        assert!(matches!(result, Err(RoutesError::Parse(_))));
    }

    #[test]
    fn test_mixed_fields_rejected() {
        let yaml = "- title: Intro\n  href: /intro\n  spacer: true";
        assert!(RouteTree::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_page_requires_href() {
        assert!(RouteTree::from_yaml("- title: Intro").is_err());
    }

    #[test]
    fn test_no_link_snake_case_alias() {
        let tree = RouteTree::from_yaml("- title: A\n  href: /a\n  no_link: true").unwrap();
        assert!(tree.nodes()[0].as_page().unwrap().no_link);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RouteTree::load(&dir.path().join("routes.yaml"));
        assert!(matches!(result, Err(RoutesError::Io { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.yaml");
        std::fs::write(&path, "- title: Home\n  href: /home\n").unwrap();

        let tree = RouteTree::load(&path).unwrap();
        assert_eq!(
            tree.nodes(),
            &[RouteNode::Page(RoutePage::new("Home", "/home"))]
        );
    }
}
