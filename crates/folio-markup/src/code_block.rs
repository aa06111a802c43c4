//! Fenced code block node and its transforms.

use std::fmt::Write;

use crate::state::escape_html;

/// Fenced code block as it moves through the transform chain.
///
/// Transforms run in chain order, so each step sees the result of the ones
/// before it. In particular the raw-copy capture only finds the original text
/// while the block has not been highlighted yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeBlockNode {
    /// Language from the fence info string.
    pub language: Option<String>,
    /// Title shown above the block.
    pub title: Option<String>,
    /// Unformatted source text.
    pub source: String,
    /// Highlighted inner HTML, once highlighting ran.
    pub highlighted: Option<String>,
    /// Raw text captured for copy-to-clipboard.
    pub raw: Option<String>,
    /// Extra attributes on the `<pre>` element, in insertion order.
    pub pre_attrs: Vec<(String, String)>,
}

impl CodeBlockNode {
    /// Build a node from fence info and source.
    ///
    /// The language is the first whitespace-separated token of `info`.
    #[must_use]
    pub fn new(info: Option<&str>, source: impl Into<String>) -> Self {
        let language = info
            .and_then(|info| info.split_whitespace().next())
            .map(str::to_owned);
        Self {
            language,
            source: source.into(),
            ..Self::default()
        }
    }

    /// First child text of the block: the source before highlighting.
    fn first_text(&self) -> Option<&str> {
        match self.highlighted {
            Some(_) => None,
            None => Some(&self.source),
        }
    }

    /// Remember the unformatted text for copy-to-clipboard.
    pub(crate) fn capture_raw(&mut self) {
        if let Some(text) = self.first_text() {
            self.raw = Some(text.to_owned());
        }
    }

    /// Expose the captured text as a `raw` attribute on `<pre>`.
    pub(crate) fn attach_raw(&mut self) {
        if let Some(raw) = &self.raw {
            self.pre_attrs.push(("raw".to_owned(), raw.clone()));
        }
    }

    /// Split `lang:title` into language and title.
    pub(crate) fn extract_title(&mut self) {
        let Some(language) = &self.language else {
            return;
        };
        if let Some((lang, title)) = language.split_once(':')
            && !title.is_empty()
        {
            self.title = Some(title.to_owned());
            self.language = (!lang.is_empty()).then(|| lang.to_owned());
        }
    }

    /// Wrap each source line in a `code-line` span for the client highlighter.
    pub(crate) fn highlight(&mut self) {
        if self.language.is_none() || self.highlighted.is_some() {
            return;
        }
        let mut html = String::with_capacity(self.source.len() * 2);
        for line in self.source.lines() {
            write!(
                html,
                r#"<span class="code-line">{}</span>"#,
                escape_html(line)
            )
            .unwrap();
            html.push('\n');
        }
        self.highlighted = Some(html);
    }

    /// Inner HTML of the `<code>` element.
    #[must_use]
    pub fn inner_html(&self) -> String {
        match &self.highlighted {
            Some(html) => html.clone(),
            None => escape_html(&self.source),
        }
    }
}
