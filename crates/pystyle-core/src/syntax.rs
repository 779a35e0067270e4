//! Language-agnostic syntax tree model.
//!
//! The tree is produced by a [`SyntaxTreeProvider`] (the tree-sitter
//! frontend in `pystyle-ts`) and is read-only to the engine. It keeps only
//! the declarations, arguments and assignments the naming checks need.

use miette::Diagnostic;
use serde::Serialize;

/// How an argument's default value was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultValueKind {
    /// No default value.
    None,
    /// A list, dict or set literal.
    MutableLiteral,
    /// Any other expression.
    Other,
}

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SyntaxNode {
    /// The whole file.
    Module {
        /// Top-level nodes in source order.
        children: Vec<SyntaxNode>,
    },
    /// `class Name: ...`
    ClassDef {
        /// Class name.
        name: String,
        /// Line of the `class` keyword (1-indexed).
        line: usize,
        /// Nodes of the class body.
        children: Vec<SyntaxNode>,
    },
    /// `def name(...): ...`
    FunctionDef {
        /// Function name.
        name: String,
        /// Line of the `def` keyword (1-indexed).
        line: usize,
        /// [`SyntaxNode::Argument`] nodes first, then nodes of the body.
        children: Vec<SyntaxNode>,
    },
    /// One parameter of a function signature.
    Argument {
        /// Parameter name.
        name: String,
        /// Line of the parameter (1-indexed).
        line: usize,
        /// Kind of the default value.
        default: DefaultValueKind,
    },
    /// `target = value`
    Assignment {
        /// Line of the statement (1-indexed).
        line: usize,
        /// Assignment targets; simple identifiers are [`SyntaxNode::NameReference`].
        children: Vec<SyntaxNode>,
    },
    /// A bare identifier.
    NameReference {
        /// Identifier.
        name: String,
        /// Line of the identifier (1-indexed).
        line: usize,
    },
}

impl SyntaxNode {
    /// Identifier carried by the node, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::ClassDef { name, .. }
            | Self::FunctionDef { name, .. }
            | Self::Argument { name, .. }
            | Self::NameReference { name, .. } => Some(name),
            Self::Module { .. } | Self::Assignment { .. } => None,
        }
    }

    /// Line number of the node; `None` for the module.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Module { .. } => None,
            Self::ClassDef { line, .. }
            | Self::FunctionDef { line, .. }
            | Self::Argument { line, .. }
            | Self::Assignment { line, .. }
            | Self::NameReference { line, .. } => Some(*line),
        }
    }

    /// Nested nodes in source order.
    #[must_use]
    pub fn children(&self) -> &[SyntaxNode] {
        match self {
            Self::Module { children }
            | Self::ClassDef { children, .. }
            | Self::FunctionDef { children, .. }
            | Self::Assignment { children, .. } => children,
            Self::Argument { .. } | Self::NameReference { .. } => &[],
        }
    }

    /// Counts this node and all its descendants.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(SyntaxNode::node_count)
            .sum::<usize>()
    }
}

/// A parsed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxTree {
    /// Always a [`SyntaxNode::Module`].
    pub root: SyntaxNode,
}

impl SyntaxTree {
    /// Creates a tree from the module's top-level nodes.
    #[must_use]
    pub fn new(children: Vec<SyntaxNode>) -> Self {
        Self {
            root: SyntaxNode::Module { children },
        }
    }
}

/// The input is not syntactically valid.
///
/// Recovered by the engine: textual checks still run, structural checks
/// are skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error, Diagnostic)]
#[error(
    "syntax error{}: {message}",
    .line.map(|l| format!(" on line {l}")).unwrap_or_default()
)]
#[diagnostic(
    code(pystyle::parse),
    help("naming checks were skipped; line checks are still reported")
)]
pub struct ParseFailure {
    /// First line with a syntax error, when known (1-indexed).
    pub line: Option<usize>,
    /// Parser message.
    pub message: String,
}

impl ParseFailure {
    /// Creates a failure located at a line.
    #[must_use]
    pub fn at(line: usize, message: impl Into<String>) -> Self {
        Self {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Creates a failure without a location.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            line: None,
            message: message.into(),
        }
    }
}

/// Parses source text into a [`SyntaxTree`].
///
/// Implement this to plug in a language frontend.
pub trait SyntaxTreeProvider: Send + Sync {
    /// Language identifier (e.g., `"python"`).
    fn language_id(&self) -> &'static str;

    /// Parses `text`, or reports why it is not valid source.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFailure`] when the text does not parse.
    fn parse(&self, text: &str) -> Result<SyntaxTree, ParseFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SyntaxTree {
        SyntaxTree::new(vec![SyntaxNode::FunctionDef {
            name: "f".into(),
            line: 1,
            children: vec![
                SyntaxNode::Argument {
                    name: "x".into(),
                    line: 1,
                    default: DefaultValueKind::None,
                },
                SyntaxNode::Assignment {
                    line: 2,
                    children: vec![SyntaxNode::NameReference {
                        name: "y".into(),
                        line: 2,
                    }],
                },
            ],
        }])
    }

    #[test]
    fn accessors_cover_every_variant() {
        let tree = sample();
        assert_eq!(tree.root.name(), None);
        assert_eq!(tree.root.line(), None);

        let func = &tree.root.children()[0];
        assert_eq!(func.name(), Some("f"));
        assert_eq!(func.line(), Some(1));

        let assign = &func.children()[1];
        assert_eq!(assign.name(), None);
        assert_eq!(assign.children()[0].name(), Some("y"));
        assert!(func.children()[0].children().is_empty());
    }

    #[test]
    fn node_count_includes_root() {
        assert_eq!(sample().root.node_count(), 5);
    }

    #[test]
    fn parse_failure_message() {
        assert_eq!(
            ParseFailure::at(3, "unexpected token").to_string(),
            "syntax error on line 3: unexpected token"
        );
        assert_eq!(
            ParseFailure::new("no tree").to_string(),
            "syntax error: no tree"
        );
    }
}
