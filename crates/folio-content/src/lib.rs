//! Page content loading for Folio.
//!
//! Given a slug, the [`DocumentLoader`] resolves where the page lives,
//! retrieves its raw text through a [`ContentSource`], compiles it, scans
//! its headings and attaches previous/next links.
//!
//! # Architecture
//!
//! - [`LocationTable`] resolves every navigable slug once at startup
//! - [`LocalSource`] reads files under the content directory
//! - [`RemoteSource`] fetches raw files from a repository over HTTP
//! - [`MockSource`] serves pages from memory (behind the `mock` feature)
//! - [`extract_headings`] builds the table of contents from raw text
//!
//! # Example
//!
//! ```ignore
//! use folio_content::{DocumentLoader, LocalSource};
//! use folio_routes::{PageIndex, RouteTree};
//!
//! let tree = RouteTree::load("routes.yaml".as_ref())?;
//! let source = LocalSource::new("contents/docs", "index.mdx");
//! let loader = DocumentLoader::new(source, PageIndex::from_tree(&tree));
//! let document = loader.load("getting-started/installation")?;
//! ```

mod error;
mod loader;
mod location;
#[cfg(feature = "mock")]
mod mock;
mod source;
mod toc;

pub use error::{LoadError, LoadErrorKind};
pub use loader::{Document, DocumentLoader};
pub use location::{ContentLocation, LocationTable};
#[cfg(feature = "mock")]
pub use mock::MockSource;
pub use source::{ContentSource, LocalSource, RawContent, RemoteSource};
pub use toc::{HeadingEntry, extract_headings, heading_anchor};
