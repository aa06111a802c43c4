//! Position index over the flattened page list.

use std::collections::HashMap;

use serde::Serialize;

use crate::flatten::{FlatPage, flatten};
use crate::route::RouteTree;
use crate::slug::normalize_slug;

/// Neighbouring pages in navigation order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct PrevNext {
    /// Page before the current one.
    pub prev: Option<FlatPage>,
    /// Page after the current one.
    pub next: Option<FlatPage>,
}

/// Flattened page list with O(1) lookup by normalized href.
///
/// Built once from the route tree and immutable afterward.
#[derive(Clone, Debug, Default)]
pub struct PageIndex {
    pages: Vec<FlatPage>,
    positions: HashMap<String, usize>,
}

impl PageIndex {
    /// Index an already flattened page list.
    #[must_use]
    pub fn new(pages: Vec<FlatPage>) -> Self {
        let mut positions = HashMap::with_capacity(pages.len());
        for (i, page) in pages.iter().enumerate() {
            positions.entry(normalize_slug(&page.href)).or_insert(i);
        }
        Self { pages, positions }
    }

    /// Flatten and index a route tree.
    #[must_use]
    pub fn from_tree(tree: &RouteTree) -> Self {
        Self::new(flatten(tree.nodes()))
    }

    /// Pages in navigation order.
    #[must_use]
    pub fn pages(&self) -> &[FlatPage] {
        &self.pages
    }

    /// Position of `path` in navigation order.
    #[must_use]
    pub fn position(&self, path: &str) -> Option<usize> {
        self.positions.get(&normalize_slug(path)).copied()
    }

    /// Page at `path`, if it is part of the navigation.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FlatPage> {
        self.position(path).and_then(|i| self.pages.get(i))
    }

    /// Previous and next pages around `path`.
    ///
    /// Unknown paths have neither.
    #[must_use]
    pub fn prev_next(&self, path: &str) -> PrevNext {
        let Some(i) = self.position(path) else {
            return PrevNext::default();
        };
        PrevNext {
            prev: i.checked_sub(1).and_then(|p| self.pages.get(p)).cloned(),
            next: self.pages.get(i + 1).cloned(),
        }
    }
}
