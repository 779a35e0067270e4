//! Core types for style issues and results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::syntax::ParseFailure;

/// Code of a style issue.
///
/// Ordering follows the ordinal `S001 < S002 < ... < S012`, which is the
/// secondary sort key of every report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IssueCode {
    /// Line longer than 79 characters.
    #[serde(rename = "S001")]
    S001,
    /// Indentation is not a multiple of four.
    #[serde(rename = "S002")]
    S002,
    /// Unnecessary trailing semicolon.
    #[serde(rename = "S003")]
    S003,
    /// Less than two spaces before an inline comment.
    #[serde(rename = "S004")]
    S004,
    /// `TODO` comment.
    #[serde(rename = "S005")]
    S005,
    /// More than two blank lines before a code line.
    #[serde(rename = "S006")]
    S006,
    /// Too many spaces after `def` or `class`.
    #[serde(rename = "S007")]
    S007,
    /// Class name is not CamelCase.
    #[serde(rename = "S008")]
    S008,
    /// Function name is not snake_case.
    #[serde(rename = "S009")]
    S009,
    /// Argument name is not snake_case.
    #[serde(rename = "S010")]
    S010,
    /// Local variable name is not snake_case.
    #[serde(rename = "S011")]
    S011,
    /// Mutable default argument value.
    #[serde(rename = "S012")]
    S012,
}

/// Static description of one rule in the fixed taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleInfo {
    /// Issue code emitted by the rule.
    pub code: IssueCode,
    /// Kebab-case rule name (e.g., "line-too-long").
    pub name: &'static str,
    /// Message template; `{name}` is replaced by the offending identifier.
    pub template: &'static str,
    /// Short description for `list-rules`.
    pub description: &'static str,
}

/// The closed code → message table.
pub static RULES: [RuleInfo; 12] = [
    RuleInfo {
        code: IssueCode::S001,
        name: "line-too-long",
        template: "Too long",
        description: "Line is longer than 79 characters",
    },
    RuleInfo {
        code: IssueCode::S002,
        name: "indentation",
        template: "Indentation is not a multiple of four",
        description: "Leading spaces must come in multiples of four",
    },
    RuleInfo {
        code: IssueCode::S003,
        name: "trailing-semicolon",
        template: "Unnecessary semicolon after a statement",
        description: "Statements must not end with a semicolon",
    },
    RuleInfo {
        code: IssueCode::S004,
        name: "inline-comment-spacing",
        template: "Less than two spaces before inline comments",
        description: "Inline comments need at least two spaces before `#`",
    },
    RuleInfo {
        code: IssueCode::S005,
        name: "todo-comment",
        template: "TODO found",
        description: "Comments starting with TODO",
    },
    RuleInfo {
        code: IssueCode::S006,
        name: "blank-lines",
        template: "More than two blank lines preceding a code line",
        description: "At most two blank lines may precede a code line",
    },
    RuleInfo {
        code: IssueCode::S007,
        name: "definition-spacing",
        template: "Too many spaces after construction_name (def or class)",
        description: "Exactly one space after `def` and `class`",
    },
    RuleInfo {
        code: IssueCode::S008,
        name: "class-name",
        template: "Class name `{name}` should be written in CamelCase",
        description: "Class names must be CamelCase",
    },
    RuleInfo {
        code: IssueCode::S009,
        name: "function-name",
        template: "Function name `{name}` should be written in snake_case",
        description: "Function names must be snake_case",
    },
    RuleInfo {
        code: IssueCode::S010,
        name: "argument-name",
        template: "Argument name `{name}` should be written in snake_case",
        description: "Argument names must be snake_case",
    },
    RuleInfo {
        code: IssueCode::S011,
        name: "variable-name",
        template: "Variable `{name}` should be written in snake_case",
        description: "Variables assigned inside functions must be snake_case",
    },
    RuleInfo {
        code: IssueCode::S012,
        name: "mutable-default",
        template: "The default argument value is mutable",
        description: "Default argument values must not be list, dict or set literals",
    },
];

impl IssueCode {
    /// All codes in ordinal order.
    pub const ALL: [Self; 12] = [
        Self::S001,
        Self::S002,
        Self::S003,
        Self::S004,
        Self::S005,
        Self::S006,
        Self::S007,
        Self::S008,
        Self::S009,
        Self::S010,
        Self::S011,
        Self::S012,
    ];

    /// Zero-based ordinal (S001 → 0).
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the rule table entry for this code.
    #[must_use]
    pub fn info(self) -> &'static RuleInfo {
        &RULES[self.ordinal()]
    }

    /// Returns the literal code string (e.g., "S001").
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::S001 => "S001",
            Self::S002 => "S002",
            Self::S003 => "S003",
            Self::S004 => "S004",
            Self::S005 => "S005",
            Self::S006 => "S006",
            Self::S007 => "S007",
            Self::S008 => "S008",
            Self::S009 => "S009",
            Self::S010 => "S010",
            Self::S011 => "S011",
            Self::S012 => "S012",
        }
    }

    /// Returns the kebab-case rule name.
    #[must_use]
    pub fn rule_name(self) -> &'static str {
        self.info().name
    }

    /// Returns the message template.
    #[must_use]
    pub fn template(self) -> &'static str {
        self.info().template
    }

    /// Looks up a code by its literal ("S005", case-insensitive) or rule name.
    #[must_use]
    pub fn lookup(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(key) || c.rule_name() == key)
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for IssueCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| format!("unknown rule '{s}'"))
    }
}

/// A style issue found on one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Issue {
    /// Line number (1-indexed).
    pub line: usize,
    /// Issue code.
    pub code: IssueCode,
    /// Identifier the message is about (S008–S011).
    pub name: Option<String>,
}

impl Issue {
    /// Creates an issue with a fixed message.
    #[must_use]
    pub fn new(line: usize, code: IssueCode) -> Self {
        Self {
            line,
            code,
            name: None,
        }
    }

    /// Creates an issue whose message names an identifier.
    #[must_use]
    pub fn named(line: usize, code: IssueCode, name: impl Into<String>) -> Self {
        Self {
            line,
            code,
            name: Some(name.into()),
        }
    }

    /// Renders the human-readable message.
    #[must_use]
    pub fn message(&self) -> String {
        let template = self.code.template();
        match &self.name {
            Some(name) => template.replace("{name}", name),
            None => template.to_string(),
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {} {}", self.line, self.code, self.message())
    }
}

impl Serialize for Issue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Issue", 4)?;
        state.serialize_field("line", &self.line)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Converts an [`Issue`] to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{code} {message}")]
pub struct IssueDiagnostic {
    code: IssueCode,
    message: String,
    #[label("{rule}")]
    span: SourceSpan,
    rule: &'static str,
}

impl IssueDiagnostic {
    /// Builds a diagnostic whose label covers the issue's line in `content`.
    #[must_use]
    pub fn new(issue: &Issue, content: &str) -> Self {
        let (offset, length) = crate::source::line_span(content, issue.line);
        Self {
            code: issue.code,
            message: issue.message(),
            span: SourceSpan::from((offset, length)),
            rule: issue.code.rule_name(),
        }
    }
}

/// Result of analyzing one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as given by the caller.
    pub path: PathBuf,
    /// Issues in report order.
    pub issues: Vec<Issue>,
    /// Set when the structural pass was skipped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_failure: Option<ParseFailure>,
}

impl FileReport {
    /// Formats each issue as `<path>: Line <line>: <code> <message>`.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.issues
            .iter()
            .map(|issue| format!("{}: {issue}", self.path.display()))
            .collect()
    }
}

/// Result of analyzing a set of files.
#[derive(Debug, Default, Serialize)]
pub struct LintResult {
    /// Per-file reports, sorted by path.
    pub files: Vec<FileReport>,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file report, keeping files ordered by path.
    pub fn push(&mut self, report: FileReport) {
        let at = self.files.partition_point(|f| f.path <= report.path);
        self.files.insert(at, report);
    }

    /// Number of files analyzed.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Total number of issues over all files.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.files.iter().map(|f| f.issues.len()).sum()
    }

    /// Number of files whose structural pass was skipped.
    #[must_use]
    pub fn parse_failures(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.parse_failure.is_some())
            .count()
    }

    /// Returns true if no file produced an issue.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}
