//! Fenced code block tracking for line-based scanning.
//!
//! Component tags inside fenced code are literal text, so the scanner needs
//! to know which lines belong to a fence.

/// Opening fence marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Fence {
    marker: char,
    len: usize,
}

/// Tracks whether scanning is inside a fenced code block.
///
/// Fences use three or more backticks or tildes. The closing fence must use
/// the same character, be at least as long, and carry nothing else.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<Fence>,
}

impl FenceTracker {
    /// Feed the next line. Returns `true` when the line is part of a fenced
    /// block, including its opening and closing marker lines.
    pub(crate) fn observe(&mut self, line: &str) -> bool {
        let trimmed = line.trim_start();
        match self.open {
            Some(fence) => {
                if closes(trimmed, fence) {
                    self.open = None;
                }
                true
            }
            None => {
                self.open = opening(trimmed);
                self.open.is_some()
            }
        }
    }
}

fn run_length(trimmed: &str, marker: char) -> usize {
    trimmed.chars().take_while(|&c| c == marker).count()
}

fn opening(trimmed: &str) -> Option<Fence> {
    let marker = trimmed.chars().next().filter(|c| matches!(c, '`' | '~'))?;
    let len = run_length(trimmed, marker);
    (len >= 3).then_some(Fence { marker, len })
}

fn closes(trimmed: &str, fence: Fence) -> bool {
    let len = run_length(trimmed, fence.marker);
    // Marker chars are ASCII, so `len` is also a byte offset
    len >= fence.len && trimmed[len..].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backtick_fence() {
        let mut tracker = FenceTracker::default();
        assert!(!tracker.observe("text\n"));
        assert!(tracker.observe("```tsx\n"));
        assert!(tracker.observe("<Tabs>\n"));
        assert!(tracker.observe("```\n"));
        assert!(!tracker.observe("<Tabs>\n"));
    }

    #[test]
    fn test_tilde_not_closed_by_backticks() {
        let mut tracker = FenceTracker::default();
        assert!(tracker.observe("~~~\n"));
        assert!(tracker.observe("```\n"));
        assert!(tracker.observe("still code\n"));
        assert!(tracker.observe("~~~~\n"));
        assert!(!tracker.observe("prose\n"));
    }

    #[test]
    fn test_shorter_fence_does_not_close() {
        let mut tracker = FenceTracker::default();
        assert!(tracker.observe("````\n"));
        assert!(tracker.observe("```\n"));
        assert!(tracker.observe("````\n"));
        assert!(!tracker.observe("after\n"));
    }

    #[test]
    fn test_closing_fence_with_info_is_content() {
        let mut tracker = FenceTracker::default();
        assert!(tracker.observe("```\n"));
        assert!(tracker.observe("```js\n"));
        assert!(tracker.observe("```\n"));
        assert!(!tracker.observe("after\n"));
    }

    #[test]
    fn test_indented_fence_and_inline_code() {
        let mut tracker = FenceTracker::default();
        assert!(!tracker.observe("``inline``\n"));
        assert!(tracker.observe("  ```\n"));
        assert!(tracker.observe("  ```  \n"));
        assert!(!tracker.observe("after\n"));
    }
}
