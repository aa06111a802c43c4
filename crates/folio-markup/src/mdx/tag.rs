//! Component tag scanning.

/// Tag found at the start of a line (after indentation).
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineTag<'a> {
    /// `<Name` followed by attributes; the header may continue on later lines.
    Open {
        name: &'a str,
        /// Byte offset just past the name.
        header_start: usize,
    },
    /// `</Name>`, with the byte offset just past `>`.
    Close { name: &'a str, end: usize },
}

/// Classify the start of `rest`, which begins after the line's indentation.
pub(crate) fn line_tag(rest: &str) -> Option<LineTag<'_>> {
    if let Some(after) = rest.strip_prefix("</") {
        let name = tag_name(after)?;
        let tail = &after[name.len()..];
        let gt = tail.find('>')?;
        if !tail[..gt].trim().is_empty() {
            return None;
        }
        return Some(LineTag::Close {
            name,
            end: 2 + name.len() + gt + 1,
        });
    }

    let after = rest.strip_prefix('<')?;
    let name = tag_name(after)?;
    match after[name.len()..].chars().next() {
        None | Some('>' | '/') => {}
        Some(c) if c.is_whitespace() => {}
        Some(_) => return None,
    }
    Some(LineTag::Open {
        name,
        header_start: 1 + name.len(),
    })
}

/// Element name: a letter followed by letters, digits, `.`, `-`, `_` or `:`.
fn tag_name(s: &str) -> Option<&str> {
    if !s.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let len = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | ':')))
        .unwrap_or(s.len());
    Some(&s[..len])
}

/// Finds the `>` ending an opening tag header.
///
/// `>` inside quoted attribute values or `{...}` expressions does not end the
/// header. State carries over between chunks so headers may span lines.
#[derive(Debug, Default)]
pub(crate) struct HeaderScanner {
    quote: Option<char>,
    depth: usize,
    /// Last non-whitespace character seen outside quotes.
    last: Option<char>,
}

impl HeaderScanner {
    /// Scan the next chunk. Returns the byte offset of the closing `>`.
    pub(crate) fn feed(&mut self, chunk: &str) -> Option<usize> {
        for (i, c) in chunk.char_indices() {
            match (self.quote, c) {
                (Some(q), _) if c == q => self.quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'' | '`') => self.quote = Some(c),
                (None, '{') => self.depth += 1,
                (None, '}') => self.depth = self.depth.saturating_sub(1),
                (None, '>') if self.depth == 0 => return Some(i),
                _ => {}
            }
            if self.quote.is_none() && !c.is_whitespace() {
                self.last = Some(c);
            }
        }
        None
    }

    /// Whether the header ended with `/>`.
    pub(crate) fn self_closing(&self) -> bool {
        self.last == Some('/')
    }
}
