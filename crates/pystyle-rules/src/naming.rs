//! Naming and mutable-default checks over the syntax tree (S008–S012).
//!
//! # Scope
//!
//! Class and function names, argument names and mutable defaults are
//! checked wherever they appear. Variable names (S011) are only checked
//! for assignments whose innermost enclosing definition is a function:
//! module-level and class-level attributes are exempt, including the body
//! of a class nested inside a function.

use pystyle_core::{DefaultValueKind, Issue, IssueCode, SyntaxNode, SyntaxTree, TreeRule};

/// Returns true for `lower_case_with_underscores` names.
///
/// Only ASCII lowercase letters, digits and underscores, not starting with
/// a digit.
#[must_use]
pub fn is_snake_case(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_lowercase() || first == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// Returns true for `CapitalizedWords` names.
///
/// First character uppercase, no underscores, the rest alphanumeric.
#[must_use]
pub fn is_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_uppercase() && chars.all(|c| c.is_ascii_alphanumeric())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Module,
    Class,
    Function,
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    scope: Scope,
    /// Line of the innermost `def`; arguments are reported there.
    def_line: Option<usize>,
    /// Line of the assignment whose targets are being visited.
    assignment_line: Option<usize>,
}

impl Frame {
    const MODULE: Self = Self {
        scope: Scope::Module,
        def_line: None,
        assignment_line: None,
    };

    fn scoped(scope: Scope, def_line: Option<usize>) -> Self {
        Self {
            scope,
            def_line,
            assignment_line: None,
        }
    }
}

/// Depth-first walk applying the naming checks.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingWalker;

impl NamingWalker {
    /// Creates a new walker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Walks the tree and returns issues in traversal order.
    #[must_use]
    pub fn walk(&self, tree: &SyntaxTree) -> Vec<Issue> {
        let mut issues = Vec::new();
        visit(&tree.root, Frame::MODULE, &mut issues);
        issues
    }
}

fn visit(node: &SyntaxNode, frame: Frame, issues: &mut Vec<Issue>) {
    match node {
        SyntaxNode::Module { children } => {
            for child in children {
                visit(child, Frame::MODULE, issues);
            }
        }
        SyntaxNode::ClassDef {
            name,
            line,
            children,
        } => {
            if !is_camel_case(name) {
                issues.push(Issue::named(*line, IssueCode::S008, name.clone()));
            }
            let inner = Frame::scoped(Scope::Class, None);
            for child in children {
                visit(child, inner, issues);
            }
        }
        SyntaxNode::FunctionDef {
            name,
            line,
            children,
        } => {
            if !is_snake_case(name) {
                issues.push(Issue::named(*line, IssueCode::S009, name.clone()));
            }
            let inner = Frame::scoped(Scope::Function, Some(*line));
            for child in children {
                visit(child, inner, issues);
            }
        }
        SyntaxNode::Argument {
            name,
            line,
            default,
        } => {
            let at = frame.def_line.unwrap_or(*line);
            if !is_snake_case(name) {
                issues.push(Issue::named(at, IssueCode::S010, name.clone()));
            }
            if *default == DefaultValueKind::MutableLiteral {
                issues.push(Issue::named(at, IssueCode::S012, name.clone()));
            }
        }
        SyntaxNode::Assignment { line, children } => {
            let targets = Frame {
                assignment_line: Some(*line),
                ..frame
            };
            for child in children {
                visit(child, targets, issues);
            }
        }
        SyntaxNode::NameReference { name, line } => {
            let Some(at) = frame.assignment_line else {
                return;
            };
            if frame.scope == Scope::Function && !is_snake_case(name) {
                tracing::trace!("local {name} on line {line} is not snake_case");
                issues.push(Issue::named(at, IssueCode::S011, name.clone()));
            }
        }
    }
}

impl TreeRule for NamingWalker {
    fn name(&self) -> &'static str {
        "naming"
    }

    fn codes(&self) -> &'static [IssueCode] {
        &[
            IssueCode::S008,
            IssueCode::S009,
            IssueCode::S010,
            IssueCode::S011,
            IssueCode::S012,
        ]
    }

    fn check(&self, tree: &SyntaxTree) -> Vec<Issue> {
        self.walk(tree)
    }
}
