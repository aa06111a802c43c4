//! Search corpus for Folio.
//!
//! The corpus is a build-time artifact: every content file is stripped of
//! interactive components, matched back to its route for a title, and
//! written as `documents.json` for the client search.
//!
//! # Example
//!
//! ```ignore
//! use folio_search::CorpusBuilder;
//! use folio_routes::RouteTree;
//!
//! let routes = RouteTree::load("routes.yaml".as_ref())?;
//! let report = CorpusBuilder::new("contents/docs", routes).run("public/search-data".as_ref())?;
//! println!("{} documents", report.written);
//! ```

mod corpus;
mod discover;
mod error;
mod query;
mod record;

pub use corpus::{
    BatchReport, CorpusBuilder, DOCUMENTS_FILENAME, read_documents, write_documents,
};
pub use discover::{derive_slug, discover_files};
pub use error::{BatchError, SearchError};
pub use query::query;
pub use record::SearchRecord;
