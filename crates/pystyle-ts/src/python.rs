//! Python syntax tree provider using Tree-sitter.

use pystyle_core::{DefaultValueKind, ParseFailure, SyntaxNode, SyntaxTree, SyntaxTreeProvider};
use tree_sitter::{Language, Node, Parser};

/// The Python grammar cannot be loaded by the linked Tree-sitter runtime.
#[derive(Debug, thiserror::Error)]
#[error("failed to load the python grammar: {0}")]
pub struct LanguageError(#[from] tree_sitter::LanguageError);

/// Parses Python source into a [`SyntaxTree`].
pub struct PythonParser {
    language: Language,
}

impl PythonParser {
    /// Creates a parser, checking that the grammar matches the runtime ABI.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageError`] if the grammar version is incompatible.
    pub fn new() -> Result<Self, LanguageError> {
        let language: Language = tree_sitter_python::LANGUAGE.into();
        Parser::new().set_language(&language)?;
        Ok(Self { language })
    }

    fn text<'a>(node: &Node<'_>, src: &'a str) -> &'a str {
        src.get(node.byte_range()).unwrap_or("")
    }

    fn line(node: &Node<'_>) -> usize {
        node.start_position().row + 1
    }

    /// Collects the definitions and assignments below `node`, in source order.
    fn collect(node: &Node<'_>, src: &str, out: &mut Vec<SyntaxNode>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if !child.is_named() {
                continue;
            }
            match child.kind() {
                "function_definition" => {
                    if let Some(func) = Self::function(&child, src) {
                        out.push(func);
                    }
                }
                "class_definition" => {
                    if let Some(class) = Self::class(&child, src) {
                        out.push(class);
                    }
                }
                "assignment" => {
                    if let Some(assign) = Self::assignment(&child, src) {
                        out.push(assign);
                    }
                }
                _ => Self::collect(&child, src, out),
            }
        }
    }

    fn function(node: &Node<'_>, src: &str) -> Option<SyntaxNode> {
        let name = Self::text(&node.child_by_field_name("name")?, src).to_owned();
        let line = Self::line(node);

        let mut children = Vec::new();
        if let Some(params) = node.child_by_field_name("parameters") {
            let mut cursor = params.walk();
            for param in params.children(&mut cursor) {
                if let Some(arg) = Self::argument(&param, src) {
                    children.push(arg);
                }
            }
        }
        if let Some(body) = node.child_by_field_name("body") {
            Self::collect(&body, src, &mut children);
        }

        Some(SyntaxNode::FunctionDef {
            name,
            line,
            children,
        })
    }

    fn class(node: &Node<'_>, src: &str) -> Option<SyntaxNode> {
        let name = Self::text(&node.child_by_field_name("name")?, src).to_owned();

        let mut children = Vec::new();
        if let Some(body) = node.child_by_field_name("body") {
            Self::collect(&body, src, &mut children);
        }

        Some(SyntaxNode::ClassDef {
            name,
            line: Self::line(node),
            children,
        })
    }

    /// Converts one entry of a `parameters` list.
    ///
    /// Separators (`*`, `/`), comments and tuple parameters yield `None`.
    fn argument(param: &Node<'_>, src: &str) -> Option<SyntaxNode> {
        let (name_node, default) = match param.kind() {
            "identifier" => (*param, DefaultValueKind::None),
            "list_splat_pattern" | "dictionary_splat_pattern" => {
                (Self::first_named(param)?, DefaultValueKind::None)
            }
            "typed_parameter" => {
                let inner = Self::first_named(param)?;
                let name = match inner.kind() {
                    "identifier" => inner,
                    "list_splat_pattern" | "dictionary_splat_pattern" => Self::first_named(&inner)?,
                    _ => return None,
                };
                (name, DefaultValueKind::None)
            }
            "default_parameter" | "typed_default_parameter" => {
                let value = param.child_by_field_name("value")?;
                (
                    param.child_by_field_name("name")?,
                    Self::classify_default(&value),
                )
            }
            _ => return None,
        };

        if name_node.kind() != "identifier" {
            return None;
        }

        Some(SyntaxNode::Argument {
            name: Self::text(&name_node, src).to_owned(),
            line: Self::line(&name_node),
            default,
        })
    }

    fn classify_default(value: &Node<'_>) -> DefaultValueKind {
        let mut value = *value;
        while value.kind() == "parenthesized_expression" {
            match Self::first_named(&value) {
                Some(inner) => value = inner,
                None => break,
            }
        }
        match value.kind() {
            "list" | "dictionary" | "set" => DefaultValueKind::MutableLiteral,
            _ => DefaultValueKind::Other,
        }
    }

    /// Converts a plain `=` assignment; annotated ones are skipped.
    ///
    /// Chained assignments contribute one target per link.
    fn assignment(node: &Node<'_>, src: &str) -> Option<SyntaxNode> {
        if node.child_by_field_name("type").is_some() {
            return None;
        }

        let line = Self::line(node);
        let mut children = Vec::new();
        let mut link = Some(*node);

        while let Some(current) = link {
            if let Some(left) = current
                .child_by_field_name("left")
                .and_then(|left| Self::simple_target(&left))
            {
                children.push(SyntaxNode::NameReference {
                    name: Self::text(&left, src).to_owned(),
                    line: Self::line(&left),
                });
            }
            link = current
                .child_by_field_name("right")
                .filter(|right| right.kind() == "assignment");
        }

        Some(SyntaxNode::Assignment { line, children })
    }

    /// Returns the identifier of a target like `a` or `(a)`.
    ///
    /// `(a,)` is a tuple and yields `None`.
    fn simple_target<'t>(node: &Node<'t>) -> Option<Node<'t>> {
        let mut target = *node;
        loop {
            match target.kind() {
                "identifier" => return Some(target),
                "parenthesized_expression" => target = Self::first_named(&target)?,
                "tuple_pattern" => {
                    let mut cursor = target.walk();
                    let parts: Vec<Node<'t>> = target
                        .children(&mut cursor)
                        .filter(|c| c.kind() != "comment")
                        .collect();
                    let has_comma = parts.iter().any(|c| c.kind() == ",");
                    let named: Vec<Node<'t>> = parts.into_iter().filter(Node::is_named).collect();
                    match named.as_slice() {
                        [inner] if !has_comma => target = *inner,
                        _ => return None,
                    }
                }
                _ => return None,
            }
        }
    }

    fn first_named<'t>(node: &Node<'t>) -> Option<Node<'t>> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.is_named() && child.kind() != "comment" {
                return Some(child);
            }
        }
        None
    }

    fn first_error<'t>(node: &Node<'t>) -> Option<Node<'t>> {
        if node.is_error() || node.is_missing() {
            return Some(*node);
        }
        if !node.has_error() {
            return None;
        }
        let mut cursor = node.walk();
        let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
        children.iter().find_map(Self::first_error)
    }
}

impl SyntaxTreeProvider for PythonParser {
    fn language_id(&self) -> &'static str {
        "python"
    }

    fn parse(&self, text: &str) -> Result<SyntaxTree, ParseFailure> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .map_err(|e| ParseFailure::new(e.to_string()))?;

        let tree = parser
            .parse(text, None)
            .ok_or_else(|| ParseFailure::new("parser produced no tree"))?;
        let root = tree.root_node();

        if let Some(error) = Self::first_error(&root) {
            let message = if error.is_missing() {
                format!("missing {}", error.kind())
            } else {
                "invalid syntax".to_string()
            };
            return Err(ParseFailure::at(Self::line(&error), message));
        }
        if root.has_error() {
            return Err(ParseFailure::new("invalid syntax"));
        }

        let mut children = Vec::new();
        Self::collect(&root, text, &mut children);
        let syntax = SyntaxTree::new(children);
        tracing::debug!("python tree with {} node(s)", syntax.root.node_count());
        Ok(syntax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(src: &str) -> SyntaxTree {
        PythonParser::new()
            .expect("grammar loads")
            .parse(src)
            .expect("source parses")
    }

    fn top(src: &str) -> Vec<SyntaxNode> {
        match parse(src).root {
            SyntaxNode::Module { children } => children,
            other => panic!("root is not a module: {other:?}"),
        }
    }

    fn name_ref(name: &str, line: usize) -> SyntaxNode {
        SyntaxNode::NameReference {
            name: name.into(),
            line,
        }
    }

    fn arg(name: &str, line: usize, default: DefaultValueKind) -> SyntaxNode {
        SyntaxNode::Argument {
            name: name.into(),
            line,
            default,
        }
    }

    #[test]
    fn empty_source() {
        assert!(top("").is_empty());
    }

    #[test]
    fn module_assignment() {
        assert_eq!(
            top("x = 1\n"),
            vec![SyntaxNode::Assignment {
                line: 1,
                children: vec![name_ref("x", 1)],
            }]
        );
    }

    #[test]
    fn chained_assignment_has_every_target() {
        assert_eq!(
            top("a = B = 1\n"),
            vec![SyntaxNode::Assignment {
                line: 1,
                children: vec![name_ref("a", 1), name_ref("B", 1)],
            }]
        );
    }

    #[test]
    fn complex_targets_are_not_names() {
        let nodes = top("a, B = 1, 2\nobj.Attr = 3\nitems[0] = 4\n");
        assert!(nodes.iter().all(|n| n.children().is_empty()));
    }

    #[test]
    fn parenthesized_target_is_a_name() {
        let nodes = top("(A) = 1\n((b)) = 2\n(c,) = 3\n");
        assert_eq!(
            nodes,
            vec![
                SyntaxNode::Assignment {
                    line: 1,
                    children: vec![name_ref("A", 1)],
                },
                SyntaxNode::Assignment {
                    line: 2,
                    children: vec![name_ref("b", 2)],
                },
                SyntaxNode::Assignment {
                    line: 3,
                    children: vec![],
                },
            ]
        );
    }

    #[test]
    fn annotated_and_augmented_assignments_skipped() {
        assert!(top("X: int = 1\nY += 1\n").is_empty());
    }

    #[test]
    fn function_signature() {
        let nodes = top(
            "def f(a, B=[], *Args, c: int = {}, d={1}, e=(), f=([]), **Kw):\n    pass\n",
        );
        assert_eq!(
            nodes,
            vec![SyntaxNode::FunctionDef {
                name: "f".into(),
                line: 1,
                children: vec![
                    arg("a", 1, DefaultValueKind::None),
                    arg("B", 1, DefaultValueKind::MutableLiteral),
                    arg("Args", 1, DefaultValueKind::None),
                    arg("c", 1, DefaultValueKind::MutableLiteral),
                    arg("d", 1, DefaultValueKind::MutableLiteral),
                    arg("e", 1, DefaultValueKind::Other),
                    arg("f", 1, DefaultValueKind::MutableLiteral),
                    arg("Kw", 1, DefaultValueKind::None),
                ],
            }]
        );
    }

    #[test]
    fn separators_are_not_arguments() {
        let nodes = top("def f(a, /, b, *, c=1):\n    pass\n");
        let names: Vec<_> = nodes[0].children().iter().filter_map(SyntaxNode::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn typed_splat_parameters() {
        let nodes = top("def f(*args: int, **kwargs: str):\n    pass\n");
        let names: Vec<_> = nodes[0].children().iter().filter_map(SyntaxNode::name).collect();
        assert_eq!(names, vec!["args", "kwargs"]);
    }

    #[test]
    fn decorated_async_method_in_class() {
        let src = "class Api:\n    @route\n    async def Get(self):\n        Value = 1\n";
        let nodes = top(src);
        assert_eq!(
            nodes,
            vec![SyntaxNode::ClassDef {
                name: "Api".into(),
                line: 1,
                children: vec![SyntaxNode::FunctionDef {
                    name: "Get".into(),
                    line: 3,
                    children: vec![
                        arg("self", 3, DefaultValueKind::None),
                        SyntaxNode::Assignment {
                            line: 4,
                            children: vec![name_ref("Value", 4)],
                        },
                    ],
                }],
            }]
        );
    }

    #[test]
    fn assignments_inside_compound_statements() {
        let src = "def f():\n    if True:\n        for i in x:\n            Total = i\n";
        let nodes = top(src);
        assert_eq!(
            nodes[0].children(),
            &[SyntaxNode::Assignment {
                line: 4,
                children: vec![name_ref("Total", 4)],
            }]
        );
    }

    #[test]
    fn multiline_signature_keeps_def_line() {
        let nodes = top("def f(\n    a,\n    B=[],\n):\n    pass\n");
        assert_eq!(nodes[0].line(), Some(1));
        assert_eq!(nodes[0].children()[1].line(), Some(3));
    }

    #[test]
    fn syntax_error_is_parse_failure() {
        let parser = PythonParser::new().expect("grammar loads");
        let failure = parser
            .parse("x = 1\ndef broken(:\n    pass\n")
            .expect_err("invalid source");
        assert!(failure.line.is_some());
    }

    #[test]
    fn python2_print_statement_is_accepted() {
        let tree = parse("print 'x'\nX = 1\n");
        assert_eq!(tree.root.node_count(), 3);
    }
}
