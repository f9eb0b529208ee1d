//! Python syntax model: tree-sitter parsing into a typed statement tree
//! with byte spans, plus deterministic printing of synthesized nodes.

pub mod errors;
pub mod parser;
mod printer;
pub mod tree;

pub use errors::ParseError;
pub use parser::PythonParser;
pub use tree::{Expr, ImportAlias, NodeId, SourcedNode, Span, Stmt, SyntaxTree};
