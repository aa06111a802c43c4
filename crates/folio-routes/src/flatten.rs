//! Route flattening and slug matching.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::route::{RouteNode, RoutePage};
use crate::slug::join_path;

/// Navigable page with its fully-qualified href.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatPage {
    /// Display title.
    pub title: String,
    /// Full path from the tree root (e.g., `/api/get`).
    pub href: String,
}

/// Flatten a route tree into its linear page order.
///
/// Pre-order depth-first traversal. Group labels (`noLink`) are omitted but
/// their children are kept; spacers contribute nothing. Entries whose href
/// matches an earlier one case-insensitively are dropped.
#[must_use]
pub fn flatten(nodes: &[RouteNode]) -> Vec<FlatPage> {
    let mut seen = HashSet::new();
    walk(nodes, "")
        .into_iter()
        .filter(|page| seen.insert(page.href.to_lowercase()))
        .collect()
}

fn walk(nodes: &[RouteNode], parent: &str) -> Vec<FlatPage> {
    nodes
        .iter()
        .filter_map(RouteNode::as_page)
        .flat_map(|page| {
            let full_path = join_path(parent, &page.href);
            let own = (!page.no_link).then(|| FlatPage {
                title: page.title.clone(),
                href: full_path.clone(),
            });
            own.into_iter().chain(walk(&page.items, &full_path))
        })
        .collect()
}

/// Find the route entry whose accumulated path equals `slug`.
///
/// Paths accumulate the same way as in [`flatten`]. Group labels match too,
/// since they still carry a title. The first match in pre-order wins.
#[must_use]
pub fn find_by_slug<'a>(nodes: &'a [RouteNode], slug: &str) -> Option<&'a RoutePage> {
    search(nodes, "", slug)
}

fn search<'a>(nodes: &'a [RouteNode], parent: &str, slug: &str) -> Option<&'a RoutePage> {
    nodes.iter().filter_map(RouteNode::as_page).find_map(|page| {
        let full_path = join_path(parent, &page.href);
        if full_path == slug {
            Some(page)
        } else {
            search(&page.items, &full_path, slug)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flat(title: &str, href: &str) -> FlatPage {
        FlatPage {
            title: title.to_owned(),
            href: href.to_owned(),
        }
    }

    #[test]
    fn test_flatten_intro_spacer_group() {
        let tree: Vec<RouteNode> = vec![
            RoutePage::new("Intro", "/intro").into(),
            RouteNode::Spacer,
            RoutePage::new("API", "/api")
                .group()
                .with_items(vec![RoutePage::new("Get", "/get").into()])
                .into(),
        ];

        assert_eq!(
            flatten(&tree),
            vec![flat("Intro", "/intro"), flat("Get", "/api/get")]
        );
    }

    #[test]
    fn test_flatten_pre_order() {
        let tree: Vec<RouteNode> = vec![
            RoutePage::new("Guide", "/guide")
                .with_items(vec![
                    RoutePage::new("Setup", "/setup")
                        .with_items(vec![RoutePage::new("Linux", "/linux").into()])
                        .into(),
                    RoutePage::new("Usage", "/usage").into(),
                ])
                .into(),
            RoutePage::new("FAQ", "/faq").into(),
        ];

        assert_eq!(
            flatten(&tree),
            vec![
                flat("Guide", "/guide"),
                flat("Setup", "/guide/setup"),
                flat("Linux", "/guide/setup/linux"),
                flat("Usage", "/guide/usage"),
                flat("FAQ", "/faq"),
            ]
        );
    }

    #[test]
    fn test_flatten_dedup_case_insensitive_first_wins() {
        let tree: Vec<RouteNode> = vec![
            RoutePage::new("First", "/Intro").into(),
            RoutePage::new("Other", "/other").into(),
            RoutePage::new("Second", "/intro").into(),
        ];

        assert_eq!(
            flatten(&tree),
            vec![flat("First", "/Intro"), flat("Other", "/other")]
        );
    }

    #[test]
    fn test_spacer_does_not_break_accumulation() {
        let tree: Vec<RouteNode> = vec![
            RoutePage::new("Docs", "/docs")
                .with_items(vec![
                    RoutePage::new("A", "/a").into(),
                    RouteNode::Spacer,
                    RoutePage::new("B", "/b").into(),
                ])
                .into(),
        ];

        assert_eq!(
            flatten(&tree),
            vec![
                flat("Docs", "/docs"),
                flat("A", "/docs/a"),
                flat("B", "/docs/b"),
            ]
        );
    }

    #[test]
    fn test_hrefs_without_leading_separator() {
        let tree: Vec<RouteNode> = vec![
            RoutePage::new("Docs", "docs")
                .with_items(vec![RoutePage::new("A", "a").into()])
                .into(),
        ];

        assert_eq!(
            flatten(&tree),
            vec![flat("Docs", "/docs"), flat("A", "/docs/a")]
        );
    }

    #[test]
    fn test_flatten_empty_tree() {
        assert!(flatten(&[]).is_empty());
        assert!(flatten(&[RouteNode::Spacer]).is_empty());
    }

    #[test]
    fn test_find_by_slug_nested() {
        let tree: Vec<RouteNode> = vec![
            RoutePage::new("Guide", "/guide")
                .with_items(vec![RoutePage::new("Setup", "/setup").into()])
                .into(),
        ];

        let page = find_by_slug(&tree, "/guide/setup").unwrap();
        assert_eq!(page.title, "Setup");
    }

    #[test]
    fn test_find_by_slug_matches_group_label() {
        let tree: Vec<RouteNode> = vec![
            RoutePage::new("API", "/api")
                .group()
                .with_items(vec![RoutePage::new("Get", "/get").into()])
                .into(),
        ];

        assert_eq!(find_by_slug(&tree, "/api").unwrap().title, "API");
    }

    #[test]
    fn test_find_by_slug_missing() {
        let tree: Vec<RouteNode> = vec![RoutePage::new("Guide", "/guide").into()];
        assert!(find_by_slug(&tree, "/other").is_none());
        assert!(find_by_slug(&tree, "/Guide").is_none());
    }

    #[test]
    fn test_find_by_slug_first_match_wins() {
        let tree: Vec<RouteNode> = vec![
            RoutePage::new("One", "/dup").into(),
            RouteNode::Spacer,
            RoutePage::new("Two", "/dup").into(),
        ];
        assert_eq!(find_by_slug(&tree, "/dup").unwrap().title, "One");
    }
}
