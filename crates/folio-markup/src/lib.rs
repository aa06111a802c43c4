//! Markup compiler for Folio documents.
//!
//! This crate turns a raw document (YAML frontmatter plus Markdown/MDX body)
//! into rendered HTML, and provides the structural component pruner used to
//! build the plain-text search corpus.
//!
//! # Architecture
//!
//! - [`split_frontmatter`] and [`Frontmatter`] handle the metadata block
//! - [`MarkdownRenderer`] walks pulldown-cmark events, delegating
//!   format-specific output to a [`RenderBackend`] ([`HtmlBackend`])
//! - [`TransformChain`] is the ordered list of structural transforms the
//!   renderer applies (heading slugs, anchors, code titles, math,
//!   highlighting, raw-copy capture/attach, GFM)
//! - [`mdx`] parses MDX flow elements so components can be removed
//!   structurally and the remaining text re-serialized verbatim
//!
//! # Example
//!
//! ```
//! use folio_markup::{CompileOptions, compile};
//!
//! let doc = "---\ntitle: Hello\n---\n## Getting Started\n";
//! let compiled = compile(doc, &CompileOptions::default()).unwrap();
//! assert_eq!(compiled.frontmatter.title.as_deref(), Some("Hello"));
//! assert!(compiled.content.contains(r#"id="getting-started""#));
//! ```

mod backend;
mod code_block;
mod compile;
mod frontmatter;
mod html;
pub mod mdx;
mod renderer;
mod state;
mod transform;

pub use backend::{AlertKind, RenderBackend};
pub use code_block::CodeBlockNode;
pub use compile::{CompileError, CompileOptions, Compiled, compile};
pub use frontmatter::{Frontmatter, parse_frontmatter, split_frontmatter};
pub use html::HtmlBackend;
pub use renderer::MarkdownRenderer;
pub use state::{escape_html, slugify};
pub use transform::{Transform, TransformChain};
