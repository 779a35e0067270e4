//! Blank-line runs (S006).

use pystyle_core::{Issue, IssueCode, LineRule, SourceLine};

/// Longest run of blank lines allowed before a code line.
pub const MAX_BLANK_RUN: usize = 2;

/// Counts consecutive blank lines over an ordered line stream.
///
/// Blank lines themselves never produce an issue. The first non-blank line
/// after a run longer than [`MAX_BLANK_RUN`] gets S006, and every non-blank
/// line resets the counter.
#[derive(Debug, Clone, Default)]
pub struct BlankRunTracker {
    consecutive_blank: usize,
}

impl BlankRunTracker {
    /// Creates a tracker with an empty run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current number of consecutive blank lines.
    #[must_use]
    pub fn consecutive_blank(&self) -> usize {
        self.consecutive_blank
    }

    /// Feeds the next line.
    pub fn observe(&mut self, line: &SourceLine) -> Option<Issue> {
        if line.is_blank() {
            self.consecutive_blank += 1;
            return None;
        }

        let run = std::mem::take(&mut self.consecutive_blank);
        (run > MAX_BLANK_RUN).then(|| Issue::new(line.index, IssueCode::S006))
    }
}

/// Line rule wrapping a fresh [`BlankRunTracker`] per file.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLines;

impl BlankLines {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for BlankLines {
    fn name(&self) -> &'static str {
        "blank-lines"
    }

    fn codes(&self) -> &'static [IssueCode] {
        &[IssueCode::S006]
    }

    fn check(&self, lines: &[SourceLine]) -> Vec<Issue> {
        let mut tracker = BlankRunTracker::new();
        lines.iter().filter_map(|l| tracker.observe(l)).collect()
    }
}
