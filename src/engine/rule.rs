use crate::engine::action::Action;
use crate::syntax::{NodeId, Span, Stmt};

/// A read-only view of one tree node offered to a rule.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    pub id: NodeId,
    pub stmt: &'a Stmt,
    pub span: Span,
}

/// A unit of matching and rewriting logic.
///
/// `C` is the shared context the session threads through every `check`
/// call: rules registered earlier may write it and rules registered later
/// read it, both within a single walking pass and across passes. A rule
/// whose preconditions on node shape or on the context are not satisfied
/// must return an empty vector — a silent decline, never an error. In
/// particular, a rule that depends on context another rule has not written
/// yet must decline rather than act on absent state.
///
/// Rules never mutate the tree. They return edit proposals, and a rule
/// returning more than one action expresses a single logical rewrite that
/// the engine accepts or rejects as a whole.
pub trait Rule<C> {
    /// Short identifier used in conflict reports.
    fn name(&self) -> &'static str;

    /// Attempt to match this rule at `node`.
    fn check(&self, node: NodeRef<'_>, state: &mut C) -> Vec<Action>;
}
