//! Merges issue streams into one ordered report.

use crate::types::Issue;

/// Collects issues from every pass and orders them.
///
/// Issues are kept in insertion order until [`IssueAggregator::finish`],
/// which sorts by `(line, code)` with a stable sort, so issues sharing a key
/// keep their relative order. Nothing is deduplicated.
#[derive(Debug, Default)]
pub struct IssueAggregator {
    issues: Vec<Issue>,
}

impl IssueAggregator {
    /// Creates an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one issue.
    pub fn push(&mut self, issue: Issue) {
        self.issues.push(issue);
    }

    /// Adds a stream of issues.
    pub fn extend(&mut self, issues: impl IntoIterator<Item = Issue>) {
        self.issues.extend(issues);
    }

    /// Number of issues collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Returns true if nothing was collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the issues ordered by line, then code ordinal.
    #[must_use]
    pub fn finish(mut self) -> Vec<Issue> {
        self.issues.sort_by_key(|issue| (issue.line, issue.code));
        self.issues
    }
}
