//! HTML backend for markdown rendering.
//!
//! Produces HTML5 output for the documentation pages. Math and code are
//! emitted as containers for client-side typesetting and highlighting.

use std::fmt::Write;

use crate::backend::{AlertKind, RenderBackend};
use crate::code_block::CodeBlockNode;
use crate::state::escape_html;

/// HTML render backend.
pub struct HtmlBackend;

impl RenderBackend for HtmlBackend {
    fn code_block(node: &CodeBlockNode, out: &mut String) {
        if let Some(title) = &node.title {
            write!(
                out,
                r#"<div class="code-title">{}</div>"#,
                escape_html(title)
            )
            .unwrap();
        }

        out.push_str("<pre");
        for (name, value) in &node.pre_attrs {
            write!(out, r#" {name}="{}""#, escape_html(value)).unwrap();
        }
        out.push('>');

        match &node.language {
            Some(lang) => write!(out, r#"<code class="language-{}">"#, escape_html(lang)).unwrap(),
            None => out.push_str("<code>"),
        }
        out.push_str(&node.inner_html());
        out.push_str("</code></pre>");
    }

    fn heading(level: u8, id: Option<&str>, anchor: bool, inner_html: &str, out: &mut String) {
        match id {
            Some(id) => write!(out, r#"<h{level} id="{id}">"#).unwrap(),
            None => write!(out, "<h{level}>").unwrap(),
        }
        if let (Some(id), true) = (id, anchor) {
            write!(
                out,
                r##"<a class="anchor" aria-hidden="true" tabindex="-1" href="#{id}"></a>"##
            )
            .unwrap();
        }
        write!(out, "{}</h{level}>", inner_html.trim()).unwrap();
    }

    fn math_inline(tex: &str, out: &mut String) {
        write!(
            out,
            r#"<span class="math math-inline">{}</span>"#,
            escape_html(tex)
        )
        .unwrap();
    }

    fn math_display(tex: &str, out: &mut String) {
        write!(
            out,
            r#"<div class="math math-display">{}</div>"#,
            escape_html(tex)
        )
        .unwrap();
    }

    fn blockquote_start(out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(out: &mut String) {
        out.push_str("</blockquote>");
    }

    fn alert_start(kind: AlertKind, out: &mut String) {
        let (class, title) = match kind {
            AlertKind::Note => ("note", "Note"),
            AlertKind::Tip => ("tip", "Tip"),
            AlertKind::Important => ("important", "Important"),
            AlertKind::Warning => ("warning", "Warning"),
            AlertKind::Caution => ("caution", "Caution"),
        };
        write!(
            out,
            r#"<div class="alert alert-{class}"><div class="alert-title">{title}</div><div class="alert-content">"#
        )
        .unwrap();
    }

    fn alert_end(_kind: AlertKind, out: &mut String) {
        out.push_str("</div></div>");
    }

    fn image(src: &str, alt: &str, title: &str, out: &mut String) {
        let title_attr = if title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(title))
        };
        write!(
            out,
            r#"<img src="{}"{title_attr} alt="{}">"#,
            escape_html(src),
            escape_html(alt)
        )
        .unwrap();
    }
}
