//! Route tree model and page ordering for Folio.
//!
//! The route tree is the authored, hierarchical description of the
//! documentation site. Everything downstream derives from it once:
//!
//! - [`normalize_slug`] maps path-like strings to canonical slugs
//! - [`flatten`] produces the deduplicated, linear page list
//! - [`PageIndex`] answers previous/next lookups in O(1)
//! - [`find_by_slug`] matches a slug back to its authored route entry
//! - [`navigation`] builds the sidebar tree
//!
//! # Example
//!
//! ```
//! use folio_routes::{PageIndex, RoutePage, RouteTree};
//!
//! let tree = RouteTree::new(vec![
//!     RoutePage::new("Intro", "/intro").into(),
//!     RoutePage::new("Setup", "/setup").into(),
//! ]);
//! let index = PageIndex::from_tree(&tree);
//! let links = index.prev_next("/intro");
//! assert_eq!(links.next.map(|p| p.title), Some("Setup".to_owned()));
//! ```

mod flatten;
mod index;
mod nav;
mod route;
mod slug;

pub use flatten::{FlatPage, find_by_slug, flatten};
pub use index::{PageIndex, PrevNext};
pub use nav::{NavEntry, navigation};
pub use route::{RouteNode, RoutePage, RouteTree, RoutesError};
pub use slug::{SEPARATOR, join_path, normalize_slug};
