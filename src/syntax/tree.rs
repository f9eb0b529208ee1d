use std::fmt;

/// A contiguous byte range in the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Starting byte offset (inclusive)
    pub start: usize,
    /// Ending byte offset (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Strict overlap check: adjacent spans do not overlap, and a
    /// zero-width span sitting on another span's boundary does not either.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The zero-width span immediately after this one.
    pub fn after(&self) -> Span {
        Span::new(self.end, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Identity of a node within one pass's tree: its pre-order position.
pub type NodeId = usize;

/// One `name [as alias]` entry of an import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportAlias {
    pub name: String,
    pub alias: Option<String>,
}

impl ImportAlias {
    pub fn new(name: impl Into<String>, alias: Option<&str>) -> Self {
        Self {
            name: name.into(),
            alias: alias.map(str::to_string),
        }
    }
}

/// Expression shapes the rules inspect.
///
/// Anything a rule never looks inside is kept as [`Expr::Verbatim`] with its
/// original text, so lowering and printing stay total over arbitrary Python.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A bare identifier
    Name(String),
    /// `value.attr`
    Attribute { value: Box<Expr>, attr: String },
    /// `func(args...)`
    Call { func: Box<Expr>, args: Vec<Expr> },
    /// Any other expression, carried as raw source text
    Verbatim(String),
}

impl Expr {
    pub fn name(id: impl Into<String>) -> Self {
        Expr::Name(id.into())
    }

    pub fn attribute(value: Expr, attr: impl Into<String>) -> Self {
        Expr::Attribute {
            value: Box::new(value),
            attr: attr.into(),
        }
    }

    pub fn call(func: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            func: Box::new(func),
            args,
        }
    }
}

/// A statement-level node of the syntax tree.
///
/// A `Stmt` value by itself carries no position: nodes lowered from source
/// are paired with their [`Span`] in a [`SourcedNode`], while values built
/// by rules stay synthetic until the next pass re-parses them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// `import a, b as c`
    Import { names: Vec<ImportAlias> },
    /// `target = value`
    Assign { target: Expr, value: Expr },
    /// A bare expression statement
    Expr { value: Expr },
    /// Any statement kind no rule matches, kept for span bookkeeping
    Other { text: String },
}

/// A node lowered from source text, with its exact byte span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcedNode {
    pub stmt: Stmt,
    pub span: Span,
}

/// An immutable statement tree for one rewrite pass.
///
/// Nodes are stored in pre-order, left to right, recursing into nested
/// blocks; a node's index in that order is its [`NodeId`], stable for the
/// lifetime of the pass. Spans of distinct nodes only ever overlap by
/// strict containment (a compound statement containing its body).
#[derive(Debug)]
pub struct SyntaxTree {
    nodes: Vec<SourcedNode>,
}

impl SyntaxTree {
    pub(crate) fn new(nodes: Vec<SourcedNode>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&SourcedNode> {
        self.nodes.get(id)
    }

    /// Byte span of a node, or `None` when the id does not name a node in
    /// this tree.
    pub fn span_of(&self, id: NodeId) -> Option<Span> {
        self.nodes.get(id).map(|node| node.span)
    }

    /// Nodes in walk order, paired with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SourcedNode)> {
        self.nodes.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_strict() {
        let a = Span::new(0, 10);
        assert!(a.overlaps(&Span::new(5, 15)));
        assert!(a.overlaps(&Span::new(2, 8)));
        // Adjacent spans touch but do not overlap
        assert!(!a.overlaps(&Span::new(10, 20)));
        assert!(!Span::new(10, 20).overlaps(&a));
    }

    #[test]
    fn zero_width_span_overlap() {
        let replace = Span::new(5, 9);
        // Insertion point strictly inside the span conflicts
        assert!(Span::new(7, 7).overlaps(&replace));
        // Insertion point at either boundary does not
        assert!(!Span::new(9, 9).overlaps(&replace));
        assert!(!Span::new(5, 5).overlaps(&replace));
    }

    #[test]
    fn after_is_zero_width() {
        let span = Span::new(3, 8);
        assert_eq!(span.after(), Span::new(8, 8));
        assert!(span.after().is_empty());
    }

    #[test]
    fn span_of_unknown_id() {
        let tree = SyntaxTree::new(vec![SourcedNode {
            stmt: Stmt::Other {
                text: "pass".to_string(),
            },
            span: Span::new(0, 4),
        }]);
        assert_eq!(tree.span_of(0), Some(Span::new(0, 4)));
        assert_eq!(tree.span_of(1), None);
    }
}
