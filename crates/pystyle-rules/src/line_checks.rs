//! Per-line layout checks (S001–S005, S007).
//!
//! Every check looks at one physical line in isolation and never consults
//! the syntax tree, so they also run on files that fail to parse. String
//! and comment detection is a single-line heuristic: quotes are tracked
//! with backslash escapes, but strings spanning several lines (triple
//! quoted blocks) are not followed across line boundaries.

use pystyle_core::{Issue, IssueCode, LineRule, SourceLine};
use std::sync::LazyLock;

/// Lines longer than this many characters get S001.
pub const MAX_LINE_LENGTH: usize = 79;

/// Indentation unit for S002.
pub const INDENT_WIDTH: usize = 4;

/// Minimum number of spaces between code and an inline comment (S004).
pub const INLINE_COMMENT_GAP: usize = 2;

#[allow(clippy::expect_used)]
static DEFINITION_SPACING: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^\s*(?:async\s+)?(?:def|class) {2,}\w").expect("valid pattern")
});

/// A physical line split into code and comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan<'a> {
    /// Text before the comment marker (the whole line if there is none).
    pub code: &'a str,
    /// Comment text starting at `#`.
    pub comment: Option<&'a str>,
    /// True if `code` ends inside an unterminated quoted string.
    pub ends_in_string: bool,
}

/// Splits a line at the first `#` that is outside quoted text.
#[must_use]
pub fn scan_line(text: &str) -> LineScan<'_> {
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (i, c) in text.char_indices() {
        match quote {
            Some(q) => {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '#' => {
                    return LineScan {
                        code: &text[..i],
                        comment: Some(&text[i..]),
                        ends_in_string: false,
                    }
                }
                _ => {}
            },
        }
    }

    LineScan {
        code: text,
        comment: None,
        ends_in_string: quote.is_some(),
    }
}

/// S001: line is longer than [`MAX_LINE_LENGTH`] characters.
#[must_use]
pub fn is_too_long(line: &SourceLine) -> bool {
    line.width() > MAX_LINE_LENGTH
}

/// S002: leading spaces are not a multiple of [`INDENT_WIDTH`].
#[must_use]
pub fn has_bad_indentation(line: &SourceLine) -> bool {
    let width = line.stripped.chars().take_while(|c| *c == ' ').count();
    width % INDENT_WIDTH != 0
}

/// S003: the statement ends with a semicolon outside strings and comments.
#[must_use]
pub fn has_trailing_semicolon(line: &SourceLine) -> bool {
    let scan = scan_line(&line.stripped);
    !scan.ends_in_string && scan.code.trim_end().ends_with(';')
}

/// S004: code precedes an inline comment by fewer than two spaces.
#[must_use]
pub fn lacks_comment_gap(line: &SourceLine) -> bool {
    let scan = scan_line(&line.stripped);
    if scan.comment.is_none() || scan.code.trim().is_empty() {
        return false;
    }
    let gap = scan.code.chars().rev().take_while(|c| *c == ' ').count();
    gap < INLINE_COMMENT_GAP
}

/// S005: the comment text starts with `TODO`, in any case.
#[must_use]
pub fn has_todo(line: &SourceLine) -> bool {
    let Some(comment) = scan_line(&line.stripped).comment else {
        return false;
    };
    let text = comment.trim_start_matches(|c: char| c == '#' || c.is_whitespace());
    text.get(..4).is_some_and(|head| head.eq_ignore_ascii_case("todo"))
}

/// S007: more than one space between `def`/`class` and the name.
#[must_use]
pub fn has_definition_spacing(line: &SourceLine) -> bool {
    DEFINITION_SPACING.is_match(&line.stripped)
}

/// Classifies each physical line into layout issues.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Creates a new classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns every layout issue on `line`, in code order.
    #[must_use]
    pub fn classify(&self, line: &SourceLine) -> Vec<Issue> {
        let checks: [(IssueCode, fn(&SourceLine) -> bool); 6] = [
            (IssueCode::S001, is_too_long),
            (IssueCode::S002, has_bad_indentation),
            (IssueCode::S003, has_trailing_semicolon),
            (IssueCode::S004, lacks_comment_gap),
            (IssueCode::S005, has_todo),
            (IssueCode::S007, has_definition_spacing),
        ];

        checks
            .into_iter()
            .filter(|(_, check)| check(line))
            .map(|(code, _)| Issue::new(line.index, code))
            .collect()
    }
}

impl LineRule for LineClassifier {
    fn name(&self) -> &'static str {
        "line-classifier"
    }

    fn codes(&self) -> &'static [IssueCode] {
        &[
            IssueCode::S001,
            IssueCode::S002,
            IssueCode::S003,
            IssueCode::S004,
            IssueCode::S005,
            IssueCode::S007,
        ]
    }

    fn check(&self, lines: &[SourceLine]) -> Vec<Issue> {
        lines.iter().flat_map(|line| self.classify(line)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> SourceLine {
        SourceLine::new(1, text)
    }

    fn codes(text: &str) -> Vec<IssueCode> {
        LineClassifier::new()
            .classify(&line(text))
            .into_iter()
            .map(|i| i.code)
            .collect()
    }

    #[test]
    fn scan_ignores_hash_in_strings() {
        let scan = scan_line(r#"x = "a # b"  # real"#);
        assert_eq!(scan.code, r#"x = "a # b"  "#);
        assert_eq!(scan.comment, Some("# real"));
    }

    #[test]
    fn scan_handles_escaped_quotes() {
        let scan = scan_line(r#"s = 'it\'s # not'"#);
        assert!(scan.comment.is_none());
        assert!(!scan.ends_in_string);
    }

    #[test]
    fn scan_reports_open_string() {
        assert!(scan_line("s = 'abc;").ends_in_string);
    }

    #[test]
    fn line_of_79_is_fine_80_is_too_long() {
        assert!(!is_too_long(&line(&"a".repeat(79))));
        assert!(is_too_long(&line(&"a".repeat(80))));
    }

    #[test]
    fn indentation_must_be_multiple_of_four() {
        assert!(!has_bad_indentation(&line("x = 1")));
        assert!(!has_bad_indentation(&line("        x = 1")));
        assert!(has_bad_indentation(&line("   x = 1")));
        assert!(has_bad_indentation(&line("      x = 1")));
    }

    #[test]
    fn whitespace_only_line_has_no_indentation() {
        assert!(!has_bad_indentation(&line("   ")));
    }

    #[test]
    fn trailing_semicolon_detected() {
        assert!(has_trailing_semicolon(&line("x = 1;")));
        assert!(has_trailing_semicolon(&line("x = 1;   ")));
        assert!(has_trailing_semicolon(&line("x = 1;  # note")));
    }

    #[test]
    fn semicolon_in_string_or_comment_ignored() {
        assert!(!has_trailing_semicolon(&line("print('a;')")));
        assert!(!has_trailing_semicolon(&line("x = 1  # a;")));
        assert!(!has_trailing_semicolon(&line("s = 'abc;")));
        assert!(!has_trailing_semicolon(&line("a = 1; b = 2")));
    }

    #[test]
    fn inline_comment_needs_two_spaces() {
        assert!(lacks_comment_gap(&line("x = 1 # note")));
        assert!(lacks_comment_gap(&line("x = 1# note")));
        assert!(!lacks_comment_gap(&line("x = 1  # note")));
        assert!(!lacks_comment_gap(&line("x = 1   # note")));
    }

    #[test]
    fn comment_only_lines_are_not_inline() {
        assert!(!lacks_comment_gap(&line("# top")));
        assert!(!lacks_comment_gap(&line("    # indented")));
        assert!(!lacks_comment_gap(&line(" # odd indent")));
    }

    #[test]
    fn todo_at_comment_start_any_case() {
        assert!(has_todo(&line("# TODO: fix")));
        assert!(has_todo(&line("x = 1  # todo later")));
        assert!(has_todo(&line("##Todo")));
        assert!(!has_todo(&line("# fix this, TODO")));
        assert!(!has_todo(&line("print('# TODO')")));
        assert!(!has_todo(&line("todo = 1")));
    }

    #[test]
    fn definition_spacing() {
        assert!(has_definition_spacing(&line("def  f():")));
        assert!(has_definition_spacing(&line("    class   Foo:")));
        assert!(has_definition_spacing(&line("async def  fetch():")));
        assert!(!has_definition_spacing(&line("def f():")));
        assert!(!has_definition_spacing(&line("class Foo:")));
        assert!(!has_definition_spacing(&line("# def  f():")));
        assert!(!has_definition_spacing(&line("undef  = 1")));
    }

    #[test]
    fn one_line_can_emit_several_codes() {
        assert_eq!(
            codes("  x = 1;# TODO"),
            vec![
                IssueCode::S002,
                IssueCode::S003,
                IssueCode::S004,
                IssueCode::S005
            ]
        );
    }

    #[test]
    fn clean_line_has_no_issues() {
        assert!(codes("def snake_case(value):").is_empty());
    }

    #[test]
    fn rule_checks_every_line() {
        let lines = SourceLine::split("x = 1;\ny = 2\nz = 3;\n");
        let issues = LineClassifier::new().check(&lines);
        assert_eq!(
            issues,
            vec![Issue::new(1, IssueCode::S003), Issue::new(3, IssueCode::S003)]
        );
    }
}
