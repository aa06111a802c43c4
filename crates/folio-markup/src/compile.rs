//! Document compilation: frontmatter plus rendered body.

use crate::frontmatter::{Frontmatter, parse_frontmatter, split_frontmatter};
use crate::html::HtmlBackend;
use crate::renderer::MarkdownRenderer;
use crate::transform::TransformChain;

/// Compiler configuration.
#[derive(Clone, Debug)]
pub struct CompileOptions {
    /// Parse a leading frontmatter block. When off, the block is rendered
    /// as part of the body.
    pub frontmatter: bool,
    /// Structural transforms, in order.
    pub chain: TransformChain,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            frontmatter: true,
            chain: TransformChain::standard(),
        }
    }
}

/// Compiled document.
#[derive(Clone, Debug, PartialEq)]
pub struct Compiled {
    pub frontmatter: Frontmatter,
    /// Rendered HTML body.
    pub content: String,
}

/// Compilation error.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("Invalid frontmatter: {0}")]
    Frontmatter(#[from] serde_yaml::Error),
}

/// Compile a raw document into frontmatter and HTML.
pub fn compile(text: &str, options: &CompileOptions) -> Result<Compiled, CompileError> {
    let (yaml, body) = if options.frontmatter {
        split_frontmatter(text)
    } else {
        (None, text)
    };
    let frontmatter = match yaml {
        Some(yaml) => parse_frontmatter(yaml)?,
        None => Frontmatter::default(),
    };

    let content =
        MarkdownRenderer::<HtmlBackend>::with_chain(options.chain.clone()).render_markdown(body);

    Ok(Compiled {
        frontmatter,
        content,
    })
}
