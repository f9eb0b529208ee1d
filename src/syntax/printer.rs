//! Deterministic pretty-printing for synthesized nodes.
//!
//! Sourced nodes are rendered from their original byte spans and never go
//! through these impls; only rule-built payloads do, so the output just has
//! to be valid, canonical Python for the shapes rules can construct.

use crate::syntax::tree::{Expr, ImportAlias, Stmt};
use std::fmt;

impl fmt::Display for ImportAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} as {}", self.name, alias),
            None => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Name(id) => write!(f, "{id}"),
            Expr::Attribute { value, attr } => write!(f, "{value}.{attr}"),
            Expr::Call { func, args } => {
                write!(f, "{func}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Expr::Verbatim(text) => write!(f, "{text}"),
        }
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::Import { names } => {
                write!(f, "import ")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}")?;
                }
                Ok(())
            }
            Stmt::Assign { target, value } => write!(f, "{target} = {value}"),
            Stmt::Expr { value } => write!(f, "{value}"),
            Stmt::Other { text } => write!(f, "{text}"),
        }
    }
}
