use crate::syntax::{NodeId, Stmt};

/// The closed set of edit directives a rule may propose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// Replace the anchor node's source span with the payload
    Replace,
    /// Insert the payload immediately after the anchor node's span
    InsertAfter,
}

/// A proposed edit: an anchor node in the current pass's tree plus a
/// synthesized payload to print in its place (or after it).
///
/// Anchors always name sourced nodes; payloads built in this pass only
/// become matchable once the next pass re-parses the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub kind: ActionKind,
    pub anchor: NodeId,
    pub payload: Stmt,
}

impl Action {
    pub fn replace(anchor: NodeId, payload: Stmt) -> Self {
        Self {
            kind: ActionKind::Replace,
            anchor,
            payload,
        }
    }

    pub fn insert_after(anchor: NodeId, payload: Stmt) -> Self {
        Self {
            kind: ActionKind::InsertAfter,
            anchor,
            payload,
        }
    }
}

/// One rule's yield at one node.
///
/// A proposal is atomic: either every action in it is accepted in a pass or
/// the whole group is rejected, so a multi-location rewrite never lands
/// half-applied.
#[derive(Debug, Clone)]
pub struct Proposal {
    /// Name of the rule that produced the actions, for conflict reports
    pub rule: &'static str,
    /// Registration index of the rule; lower wins conflict ties
    pub rule_index: usize,
    /// Source offset of the matched node
    pub anchor_offset: usize,
    pub actions: Vec<Action>,
}
