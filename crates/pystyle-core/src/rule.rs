//! Rule traits for defining style checks.

use crate::source::SourceLine;
use crate::syntax::SyntaxTree;
use crate::types::{Issue, IssueCode};

/// A check over the physical lines of a file.
///
/// Rules receive every line of one file, in order, on each call. Any state
/// a rule keeps (such as a blank-line counter) must live inside a single
/// call so nothing leaks from one file into the next.
///
/// # Example
///
/// ```ignore
/// use pystyle_core::{Issue, IssueCode, LineRule, SourceLine};
///
/// pub struct NoTabs;
///
/// impl LineRule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn codes(&self) -> &'static [IssueCode] { &[IssueCode::S002] }
///
///     fn check(&self, lines: &[SourceLine]) -> Vec<Issue> {
///         lines
///             .iter()
///             .filter(|l| l.raw.starts_with('\t'))
///             .map(|l| Issue::new(l.index, IssueCode::S002))
///             .collect()
///     }
/// }
/// ```
pub trait LineRule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "blank-lines").
    fn name(&self) -> &'static str;

    /// Returns the issue codes this rule can emit.
    fn codes(&self) -> &'static [IssueCode];

    /// Checks all lines of one file.
    fn check(&self, lines: &[SourceLine]) -> Vec<Issue>;
}

/// Type alias for boxed `LineRule` trait objects.
pub type LineRuleBox = Box<dyn LineRule>;

/// A check over the parsed syntax tree of a file.
///
/// Tree rules only run when the file parsed; on a parse failure the engine
/// skips them and keeps the line rules' results.
pub trait TreeRule: Send + Sync {
    /// Returns the kebab-case name of this rule.
    fn name(&self) -> &'static str;

    /// Returns the issue codes this rule can emit.
    fn codes(&self) -> &'static [IssueCode];

    /// Checks the syntax tree of one file.
    fn check(&self, tree: &SyntaxTree) -> Vec<Issue>;
}

/// Type alias for boxed `TreeRule` trait objects.
pub type TreeRuleBox = Box<dyn TreeRule>;

#[cfg(test)]
mod tests {
    use super::*;

    struct TrailingTab;

    impl LineRule for TrailingTab {
        fn name(&self) -> &'static str {
            "trailing-tab"
        }

        fn codes(&self) -> &'static [IssueCode] {
            &[IssueCode::S002]
        }

        fn check(&self, lines: &[SourceLine]) -> Vec<Issue> {
            lines
                .iter()
                .filter(|l| l.raw.ends_with('\t'))
                .map(|l| Issue::new(l.index, IssueCode::S002))
                .collect()
        }
    }

    #[test]
    fn test_line_rule_trait() {
        let rule = TrailingTab;
        let lines = SourceLine::split("a\t\nb\n");
        assert_eq!(rule.name(), "trailing-tab");
        assert_eq!(rule.check(&lines), vec![Issue::new(1, IssueCode::S002)]);
    }
}
