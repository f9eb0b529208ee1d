//! tkupgrade: rule-driven Python source rewriting.
//!
//! A generic rule-application engine plus the rules that upgrade tkinter
//! applications to the tukaan toolkit.
//!
//! # Architecture
//!
//! Each pass parses the current text into a typed statement tree with
//! exact byte spans, offers every node to every registered rule in
//! registration order, resolves conflicting edit proposals
//! deterministically, and splices the accepted edits back into the text.
//! All bytes outside the edited spans are preserved verbatim. Passes
//! repeat until one accepts nothing (fixpoint) or a configurable ceiling
//! is hit, so nodes synthesized by one pass become matchable, positioned
//! nodes in the next.
//!
//! # Example
//!
//! ```
//! use tkupgrade::rules::upgrade_session;
//!
//! let mut session = upgrade_session().unwrap();
//! let outcome = session.run("import tkinter\n").unwrap();
//! assert_eq!(outcome.text, "import tukaan as tk\n");
//! ```

pub mod engine;
pub mod rules;
pub mod syntax;

// Re-exports
pub use engine::{
    Action, ActionKind, DroppedProposal, EngineError, NodeRef, Rule, Session, SessionOutcome,
    DEFAULT_MAX_PASSES,
};
pub use rules::{upgrade_rules, upgrade_session, UpgradeState};
pub use syntax::{Expr, ImportAlias, ParseError, PythonParser, Span, Stmt, SyntaxTree};
