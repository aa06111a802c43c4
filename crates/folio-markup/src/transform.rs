//! Ordered structural transforms applied during compilation.

use pulldown_cmark::Options;

use crate::code_block::CodeBlockNode;

/// A structural transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Capture the unformatted text of code blocks.
    RawCopyCapture,
    /// Turn `lang:title` fences into a title element above the block.
    CodeTitles,
    /// Parse `$...$` and `$$...$$` into math containers.
    Math,
    /// Mark up code lines for syntax highlighting.
    Highlight,
    /// Assign unique ids to headings.
    HeadingSlugs,
    /// Prepend an anchor link to headings that have an id.
    HeadingAnchors,
    /// Attach captured raw text as a `raw` attribute on `<pre>`.
    RawCopyAttach,
    /// Tables, strikethrough, task lists and alerts.
    Gfm,
}

impl Transform {
    fn apply_code(self, node: &mut CodeBlockNode) {
        match self {
            Self::RawCopyCapture => node.capture_raw(),
            Self::CodeTitles => node.extract_title(),
            Self::Highlight => node.highlight(),
            Self::RawCopyAttach => node.attach_raw(),
            Self::Math | Self::HeadingSlugs | Self::HeadingAnchors | Self::Gfm => {}
        }
    }
}

/// Ordered list of transforms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformChain {
    steps: Vec<Transform>,
}

impl TransformChain {
    /// Create a chain running `steps` in the given order.
    #[must_use]
    pub fn new(steps: Vec<Transform>) -> Self {
        Self { steps }
    }

    /// The document chain: raw capture runs before highlighting and raw attach
    /// after it.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![
            Transform::RawCopyCapture,
            Transform::CodeTitles,
            Transform::Math,
            Transform::Highlight,
            Transform::HeadingSlugs,
            Transform::HeadingAnchors,
            Transform::RawCopyAttach,
            Transform::Gfm,
        ])
    }

    /// Chain with no transforms (plain CommonMark).
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[must_use]
    pub fn contains(&self, transform: Transform) -> bool {
        self.steps.contains(&transform)
    }

    #[must_use]
    pub fn steps(&self) -> &[Transform] {
        &self.steps
    }

    /// Parser options the chain requires.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        let mut options = Options::empty();
        if self.contains(Transform::Gfm) {
            options |= Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM;
        }
        if self.contains(Transform::Math) {
            options |= Options::ENABLE_MATH;
        }
        options
    }

    /// Run every code-block transform on `node`, in order.
    pub(crate) fn apply_code(&self, node: &mut CodeBlockNode) {
        for step in &self.steps {
            step.apply_code(node);
        }
    }
}

impl Default for TransformChain {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_standard_order() {
        let chain = TransformChain::standard();
        let pos = |t| chain.steps().iter().position(|s| *s == t).unwrap();
        assert!(pos(Transform::RawCopyCapture) < pos(Transform::Highlight));
        assert!(pos(Transform::Highlight) < pos(Transform::RawCopyAttach));
        assert!(pos(Transform::HeadingSlugs) < pos(Transform::HeadingAnchors));
    }

    #[test]
    fn test_parser_options() {
        let options = TransformChain::standard().parser_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_GFM));
        assert!(options.contains(Options::ENABLE_MATH));

        assert_eq!(TransformChain::empty().parser_options(), Options::empty());
    }

    #[test]
    fn test_apply_code_standard_chain() {
        let mut node = CodeBlockNode::new(Some("rust:main.rs"), "fn main() {}\n");
        TransformChain::standard().apply_code(&mut node);

        assert_eq!(node.language.as_deref(), Some("rust"));
        assert_eq!(node.title.as_deref(), Some("main.rs"));
        assert!(node.highlighted.is_some());
        assert_eq!(
            node.pre_attrs,
            vec![("raw".to_owned(), "fn main() {}\n".to_owned())]
        );
    }

    #[test]
    fn test_apply_code_empty_chain_is_identity() {
        let mut node = CodeBlockNode::new(Some("rust:main.rs"), "x\n");
        let before = node.clone();
        TransformChain::empty().apply_code(&mut node);
        assert_eq!(node, before);
    }
}
