//! Render backend trait for format-specific rendering.
//!
//! The renderer handles shared structure (lists, tables, inline formatting)
//! and delegates elements whose markup depends on the target to the backend.

use pulldown_cmark::BlockQuoteKind;

use crate::code_block::CodeBlockNode;

/// GFM alert type (`> [!NOTE]` etc.).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Note,
    Tip,
    Important,
    Warning,
    Caution,
}

impl From<BlockQuoteKind> for AlertKind {
    fn from(kind: BlockQuoteKind) -> Self {
        match kind {
            BlockQuoteKind::Note => Self::Note,
            BlockQuoteKind::Tip => Self::Tip,
            BlockQuoteKind::Important => Self::Important,
            BlockQuoteKind::Warning => Self::Warning,
            BlockQuoteKind::Caution => Self::Caution,
        }
    }
}

/// Backend trait for format-specific rendering operations.
pub trait RenderBackend {
    /// Render a code block after the transform chain ran on it.
    fn code_block(node: &CodeBlockNode, out: &mut String);

    /// Render a heading. `id` is set when heading slugs are enabled and
    /// `anchor` when an anchor link should be prepended.
    fn heading(level: u8, id: Option<&str>, anchor: bool, inner_html: &str, out: &mut String);

    /// Render inline math.
    fn math_inline(tex: &str, out: &mut String);

    /// Render display math.
    fn math_display(tex: &str, out: &mut String);

    fn blockquote_start(out: &mut String);

    fn blockquote_end(out: &mut String);

    fn alert_start(kind: AlertKind, out: &mut String);

    fn alert_end(kind: AlertKind, out: &mut String);

    /// Render an image.
    fn image(src: &str, alt: &str, title: &str, out: &mut String);

    /// Render a hard break.
    ///
    /// Default uses `<br>`.
    fn hard_break(out: &mut String) {
        out.push_str("<br>");
    }

    /// Render a horizontal rule.
    ///
    /// Default uses `<hr>`.
    fn horizontal_rule(out: &mut String) {
        out.push_str("<hr>");
    }

    /// Render a task list marker.
    ///
    /// Default uses HTML checkbox.
    fn task_list_marker(checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" checked disabled> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled> "#);
        }
    }
}
