//! MDX flow-element parsing and structural component pruning.
//!
//! The body of an MDX document is parsed into a shallow tree of flow
//! elements (component tags that begin a line) and verbatim text. Fenced
//! code is always text. Pruning drops denylisted elements together with
//! their subtree; serializing the result reproduces every retained byte.
//!
//! ```
//! use folio_markup::mdx::strip_components;
//!
//! let body = "Intro\n\n<Tabs>\n<TabsList>x</TabsList>\n</Tabs>\n\nOutro\n";
//! let plain = strip_components(body, &["Tabs"]).unwrap();
//! assert_eq!(plain, "Intro\n\nOutro\n");
//! ```

mod fence;
mod tag;

use fence::FenceTracker;
use tag::{HeaderScanner, LineTag, line_tag};

/// Interactive and presentational components excluded from search content.
pub const DEFAULT_DENYLIST: &[&str] = &["Tabs", "TabsList", "TabsTrigger", "pre", "Mermaid"];

/// Node in the flow tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowNode {
    /// Verbatim markup text.
    Text(String),
    /// Component element.
    Element(Element),
}

/// Flow element with its verbatim opening and closing tag text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    /// Tag name, case-sensitive.
    pub name: String,
    /// Opening tag text including indentation (and its line break when the
    /// tag ends its line).
    pub open: String,
    pub children: Vec<FlowNode>,
    /// Closing tag text; `None` for self-closing elements.
    pub close: Option<String>,
    /// 1-based line where the element starts.
    pub line: usize,
}

/// Malformed component markup.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PruneError {
    #[error("element <{name}> opened on line {line} is never closed")]
    Unclosed { name: String, line: usize },
    #[error("unexpected closing tag </{name}> on line {line}")]
    UnexpectedClose { name: String, line: usize },
    #[error("tag <{name}> starting on line {line} is never terminated")]
    UnterminatedTag { name: String, line: usize },
}

/// Parse a document body into flow nodes.
pub fn parse(body: &str) -> Result<Vec<FlowNode>, PruneError> {
    let lines: Vec<&str> = body.split_inclusive('\n').collect();
    let mut builder = TreeBuilder::default();
    let mut fence = FenceTracker::default();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let line_no = i + 1;
        i += 1;

        if fence.observe(line) {
            builder.push_text(line);
            continue;
        }

        let indent = line.len() - line.trim_start().len();
        match line_tag(&line[indent..]) {
            Some(LineTag::Close { name, end }) => {
                let end = indent + end;
                builder.close(name, &line[..end], &line[end..], line_no)?;
            }
            Some(LineTag::Open { name, header_start }) => {
                let mut scanner = HeaderScanner::default();
                let mut open = String::new();
                let mut current = line;
                let mut offset = indent + header_start;
                let remainder = loop {
                    if let Some(pos) = scanner.feed(&current[offset..]) {
                        let end = offset + pos + 1;
                        open.push_str(&current[..end]);
                        break &current[end..];
                    }
                    open.push_str(current);
                    let Some(next) = lines.get(i) else {
                        return Err(PruneError::UnterminatedTag {
                            name: name.to_owned(),
                            line: line_no,
                        });
                    };
                    current = next;
                    offset = 0;
                    i += 1;
                };
                builder.open(name, open, remainder, scanner.self_closing(), line_no);
            }
            None => builder.push_text(line),
        }
    }

    builder.finish()
}

#[derive(Default)]
struct TreeBuilder {
    root: Vec<FlowNode>,
    stack: Vec<Element>,
}

impl TreeBuilder {
    fn children_mut(&mut self) -> &mut Vec<FlowNode> {
        match self.stack.last_mut() {
            Some(element) => &mut element.children,
            None => &mut self.root,
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let children = self.children_mut();
        if let Some(FlowNode::Text(last)) = children.last_mut() {
            last.push_str(text);
        } else {
            children.push(FlowNode::Text(text.to_owned()));
        }
    }

    /// Attach trailing text after a tag: blank remainders stay with the tag,
    /// anything else belongs to the enclosing container.
    fn split_tail(tag_text: &mut String, tail: &str) -> Option<String> {
        if tail.trim().is_empty() {
            tag_text.push_str(tail);
            None
        } else {
            Some(tail.to_owned())
        }
    }

    fn open(
        &mut self,
        name: &str,
        mut open: String,
        remainder: &str,
        self_closing: bool,
        line: usize,
    ) {
        let mut element = Element {
            name: name.to_owned(),
            open: String::new(),
            children: Vec::new(),
            close: None,
            line,
        };

        if self_closing {
            let tail = Self::split_tail(&mut open, remainder);
            element.open = open;
            self.children_mut().push(FlowNode::Element(element));
            if let Some(tail) = tail {
                self.push_text(&tail);
            }
            return;
        }

        let close_tag = format!("</{name}>");
        if let Some(pos) = remainder.find(&close_tag) {
            // Opened and closed on the same line
            let inner = &remainder[..pos];
            let after = &remainder[pos + close_tag.len()..];
            let mut close = close_tag;
            let tail = Self::split_tail(&mut close, after);
            if !inner.is_empty() {
                element.children.push(FlowNode::Text(inner.to_owned()));
            }
            element.open = open;
            element.close = Some(close);
            self.children_mut().push(FlowNode::Element(element));
            if let Some(tail) = tail {
                self.push_text(&tail);
            }
            return;
        }

        if remainder.trim().is_empty() {
            open.push_str(remainder);
        } else {
            element.children.push(FlowNode::Text(remainder.to_owned()));
        }
        element.open = open;
        self.stack.push(element);
    }

    fn close(
        &mut self,
        name: &str,
        tag_text: &str,
        tail: &str,
        line: usize,
    ) -> Result<(), PruneError> {
        let unexpected = || PruneError::UnexpectedClose {
            name: name.to_owned(),
            line,
        };
        let mut element = self.stack.pop().ok_or_else(unexpected)?;
        if element.name != name {
            return Err(unexpected());
        }

        let mut close = tag_text.to_owned();
        let tail = Self::split_tail(&mut close, tail);
        element.close = Some(close);
        self.children_mut().push(FlowNode::Element(element));
        if let Some(tail) = tail {
            self.push_text(&tail);
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<FlowNode>, PruneError> {
        match self.stack.pop() {
            Some(element) => Err(PruneError::Unclosed {
                name: element.name,
                line: element.line,
            }),
            None => Ok(self.root),
        }
    }
}

/// Remove every element whose name is in `denylist`, with its subtree.
///
/// Where a removed block leaves two blank-line gaps next to each other they
/// collapse into one.
#[must_use]
pub fn prune<S: AsRef<str>>(nodes: Vec<FlowNode>, denylist: &[S]) -> Vec<FlowNode> {
    prune_level(nodes, denylist, true)
}

fn prune_level<S: AsRef<str>>(nodes: Vec<FlowNode>, denylist: &[S], root: bool) -> Vec<FlowNode> {
    let denied = |name: &str| denylist.iter().any(|d| d.as_ref() == name);
    let mut out: Vec<FlowNode> = Vec::with_capacity(nodes.len());
    let mut after_removal = false;

    for node in nodes {
        match node {
            FlowNode::Element(element) if denied(&element.name) => after_removal = true,
            FlowNode::Element(mut element) => {
                element.children = prune_level(element.children, denylist, false);
                out.push(FlowNode::Element(element));
                after_removal = false;
            }
            FlowNode::Text(text) => {
                let text = if after_removal && gap_before(&out, root) {
                    text.trim_start_matches(['\r', '\n']).to_owned()
                } else {
                    text
                };
                match out.last_mut() {
                    Some(FlowNode::Text(last)) => last.push_str(&text),
                    _ if text.is_empty() => {}
                    _ => out.push(FlowNode::Text(text)),
                }
                after_removal = false;
            }
        }
    }
    out
}

/// Whether the content before a removed element already ends in a blank line.
fn gap_before(out: &[FlowNode], root: bool) -> bool {
    let mut tail = String::new();
    for node in out.iter().rev() {
        let text = match node {
            FlowNode::Text(text) => text.as_str(),
            FlowNode::Element(element) => element.close.as_deref().unwrap_or(&element.open),
        };
        tail.insert_str(0, text);
        if tail.len() >= 3 {
            break;
        }
    }
    if tail.is_empty() {
        return root;
    }
    tail.ends_with("\n\n") || tail.ends_with("\n\r\n")
}

/// Serialize flow nodes back to markup text.
#[must_use]
pub fn serialize(nodes: &[FlowNode]) -> String {
    let mut out = String::new();
    write_nodes(nodes, &mut out);
    out
}

fn write_nodes(nodes: &[FlowNode], out: &mut String) {
    for node in nodes {
        match node {
            FlowNode::Text(text) => out.push_str(text),
            FlowNode::Element(element) => {
                out.push_str(&element.open);
                write_nodes(&element.children, out);
                if let Some(close) = &element.close {
                    out.push_str(close);
                }
            }
        }
    }
}

/// Parse `body`, drop denylisted components and serialize the rest.
pub fn strip_components<S: AsRef<str>>(body: &str, denylist: &[S]) -> Result<String, PruneError> {
    Ok(serialize(&prune(parse(body)?, denylist)))
}
