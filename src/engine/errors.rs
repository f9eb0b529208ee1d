use crate::syntax::ParseError;
use thiserror::Error;

/// Hard failures of the rewrite engine.
///
/// Per-rule declines and per-proposal conflicts are recovered inside the
/// session and never surface here; only malformed input and internal
/// invariant violations abort an invocation.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("parse failure: {0}")]
    Parse(#[from] ParseError),

    /// An action anchored on a node that cannot be resolved in the pass's
    /// freshly parsed tree. Unreachable by construction, since anchors are
    /// drawn from the tree being walked.
    #[error("internal invariant violated: rule '{rule}' anchored an action on unknown node {anchor}")]
    StaleAnchor { rule: &'static str, anchor: usize },
}
