//! Status lines on stderr.
//!
//! Command results go to stdout; everything a person reads while a command
//! runs goes through [`Output`].

use std::path::Path;

use console::{Style, Term};

#[derive(Clone, Copy)]
enum Tone {
    Plain,
    Success,
    Warning,
    Error,
    Detail,
}

impl Tone {
    fn style(self) -> Style {
        match self {
            Self::Plain => Style::new(),
            Self::Success => Style::new().green(),
            Self::Warning => Style::new().yellow(),
            Self::Error => Style::new().red().bold(),
            Self::Detail => Style::new().dim(),
        }
    }
}

pub(crate) struct Output {
    term: Term,
}

impl Output {
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn line(&self, tone: Tone, msg: &str) {
        // Styling is dropped automatically when stderr is not a terminal
        let _ = self.term.write_line(&tone.style().apply_to(msg).to_string());
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(Tone::Plain, msg);
    }

    pub(crate) fn success(&self, msg: &str) {
        self.line(Tone::Success, msg);
    }

    pub(crate) fn warning(&self, msg: &str) {
        self.line(Tone::Warning, msg);
    }

    pub(crate) fn error(&self, msg: &str) {
        self.line(Tone::Error, msg);
    }

    pub(crate) fn detail(&self, msg: &str) {
        self.line(Tone::Detail, msg);
    }

    /// Summarize a corpus build: a warning for skipped files, then the
    /// success line naming the artifact.
    pub(crate) fn corpus_summary(&self, written: usize, skipped: usize, path: &Path) {
        if skipped > 0 {
            self.warning(&format!("Skipped {skipped} file(s) due to errors"));
        }
        self.success(&format!(
            "Successfully processed {written} files into {}",
            path.display()
        ));
    }
}
