use crate::syntax::errors::ParseError;
use crate::syntax::tree::{Expr, ImportAlias, SourcedNode, Span, Stmt, SyntaxTree};
use tree_sitter::{Node, Parser};

/// Tree-sitter parser wrapper for Python source code.
///
/// Lowers the tree-sitter CST into the typed statement tree the rules match
/// against. Statements whose shape no rule inspects are kept as
/// [`Stmt::Other`] so their spans still participate in conflict checks, and
/// nested blocks (function bodies, loop bodies, ...) are walked recursively.
pub struct PythonParser {
    parser: Parser,
}

impl PythonParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|_| ParseError::LanguageSet)?;
        Ok(Self { parser })
    }

    /// Parse source text into a statement tree.
    ///
    /// Any ERROR or MISSING node in the parse fails the whole invocation;
    /// no partial tree is ever returned.
    pub fn parse(&mut self, source: &str) -> Result<SyntaxTree, ParseError> {
        let ts_tree = self
            .parser
            .parse(source, None)
            .ok_or(ParseError::ParseFailed)?;

        let root = ts_tree.root_node();
        if let Some(err) = first_error_node(root) {
            return Err(ParseError::SyntaxError {
                byte_start: err.start_byte(),
                byte_end: err.end_byte(),
            });
        }

        let mut nodes = Vec::new();
        lower_block(root, source, &mut nodes);
        Ok(SyntaxTree::new(nodes))
    }
}

impl Default for PythonParser {
    fn default() -> Self {
        Self::new().expect("failed to create default PythonParser")
    }
}

fn first_error_node(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(err) = first_error_node(child) {
            return Some(err);
        }
    }

    None
}

fn text_of(node: Node<'_>, source: &str) -> String {
    source[node.byte_range()].to_string()
}

fn lower_block(block: Node<'_>, source: &str, nodes: &mut Vec<SourcedNode>) {
    let mut cursor = block.walk();
    for child in block.named_children(&mut cursor) {
        lower_stmt(child, source, nodes);
    }
}

fn lower_stmt(node: Node<'_>, source: &str, nodes: &mut Vec<SourcedNode>) {
    let span = Span::new(node.start_byte(), node.end_byte());
    match node.kind() {
        "comment" => {}
        "import_statement" => {
            nodes.push(SourcedNode {
                stmt: Stmt::Import {
                    names: lower_import_names(node, source),
                },
                span,
            });
        }
        "expression_statement" => {
            let stmt = match node.named_child(0) {
                Some(inner) if inner.kind() == "assignment" => lower_assignment(inner, source)
                    .unwrap_or_else(|| Stmt::Other {
                        text: text_of(node, source),
                    }),
                Some(inner) => Stmt::Expr {
                    value: lower_expr(inner, source),
                },
                None => Stmt::Other {
                    text: text_of(node, source),
                },
            };
            nodes.push(SourcedNode { stmt, span });
        }
        _ => {
            nodes.push(SourcedNode {
                stmt: Stmt::Other {
                    text: text_of(node, source),
                },
                span,
            });
            descend_into_blocks(node, source, nodes);
        }
    }
}

/// Find the nested blocks of a compound statement and lower their
/// statements. The search stops at each `block` boundary; the statements
/// inside it handle their own nesting.
fn descend_into_blocks(node: Node<'_>, source: &str, nodes: &mut Vec<SourcedNode>) {
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.kind() == "block" {
            lower_block(child, source, nodes);
        } else {
            descend_into_blocks(child, source, nodes);
        }
    }
}

fn lower_import_names(node: Node<'_>, source: &str) -> Vec<ImportAlias> {
    let mut names = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        match child.kind() {
            "dotted_name" => names.push(ImportAlias {
                name: text_of(child, source),
                alias: None,
            }),
            "aliased_import" => {
                let name = child
                    .child_by_field_name("name")
                    .map(|n| text_of(n, source))
                    .unwrap_or_default();
                let alias = child
                    .child_by_field_name("alias")
                    .map(|n| text_of(n, source));
                names.push(ImportAlias { name, alias });
            }
            _ => {}
        }
    }
    names
}

fn lower_assignment(node: Node<'_>, source: &str) -> Option<Stmt> {
    let left = node.child_by_field_name("left")?;
    let right = node.child_by_field_name("right")?;
    Some(Stmt::Assign {
        target: lower_expr(left, source),
        value: lower_expr(right, source),
    })
}

fn lower_expr(node: Node<'_>, source: &str) -> Expr {
    match node.kind() {
        "identifier" => Expr::Name(text_of(node, source)),
        "attribute" => {
            match (
                node.child_by_field_name("object"),
                node.child_by_field_name("attribute"),
            ) {
                (Some(object), Some(attr)) => Expr::Attribute {
                    value: Box::new(lower_expr(object, source)),
                    attr: text_of(attr, source),
                },
                _ => Expr::Verbatim(text_of(node, source)),
            }
        }
        "call" => match node.child_by_field_name("function") {
            Some(func) => {
                let args = node
                    .child_by_field_name("arguments")
                    .map(|list| {
                        let mut cursor = list.walk();
                        list.named_children(&mut cursor)
                            .filter(|arg| arg.kind() != "comment")
                            .map(|arg| lower_expr(arg, source))
                            .collect()
                    })
                    .unwrap_or_default();
                Expr::Call {
                    func: Box::new(lower_expr(func, source)),
                    args,
                }
            }
            None => Expr::Verbatim(text_of(node, source)),
        },
        _ => Expr::Verbatim(text_of(node, source)),
    }
}
