use crate::engine::action::{ActionKind, Proposal};
use crate::engine::errors::EngineError;
use crate::syntax::{Span, Stmt, SyntaxTree};

/// One accepted edit with its touched span resolved against the tree.
#[derive(Debug, Clone)]
pub struct ResolvedEdit {
    pub kind: ActionKind,
    /// For Replace, the anchor's span; for InsertAfter, the zero-width
    /// point immediately after it.
    pub span: Span,
    pub payload: Stmt,
}

/// A proposal rejected because one of its spans overlapped an
/// already-accepted edit. Reported, never fatal.
#[derive(Debug, Clone)]
pub struct DroppedProposal {
    pub rule: &'static str,
    pub span: Span,
    pub conflicts_with: Span,
}

/// Outcome of resolving one pass's proposals.
#[derive(Debug, Default)]
pub struct Resolution {
    /// Accepted edits, ordered by span start ascending
    pub accepted: Vec<ResolvedEdit>,
    pub dropped: Vec<DroppedProposal>,
}

/// Choose a mutually compatible subset of one pass's proposals.
///
/// Proposals are ordered by the start of their earliest touched span, with
/// rule registration order breaking ties, then accepted greedily when none
/// of their spans overlaps an already-accepted span. Spans that merely
/// touch are compatible. Each proposal is accepted or rejected as a whole,
/// so multi-action rewrites stay atomic. The ordering makes the outcome
/// deterministic across runs on identical input.
pub fn resolve(tree: &SyntaxTree, proposals: Vec<Proposal>) -> Result<Resolution, EngineError> {
    let mut groups = Vec::with_capacity(proposals.len());
    for proposal in proposals {
        let mut edits = Vec::with_capacity(proposal.actions.len());
        for action in &proposal.actions {
            let anchor_span =
                tree.span_of(action.anchor)
                    .ok_or(EngineError::StaleAnchor {
                        rule: proposal.rule,
                        anchor: action.anchor,
                    })?;
            let span = match action.kind {
                ActionKind::Replace => anchor_span,
                ActionKind::InsertAfter => anchor_span.after(),
            };
            edits.push(ResolvedEdit {
                kind: action.kind,
                span,
                payload: action.payload.clone(),
            });
        }
        let sort_key = edits
            .iter()
            .map(|edit| edit.span.start)
            .min()
            .unwrap_or(proposal.anchor_offset);
        groups.push((sort_key, proposal.rule_index, proposal.rule, edits));
    }

    groups.sort_by_key(|&(sort_key, rule_index, _, _)| (sort_key, rule_index));

    let mut resolution = Resolution::default();
    for (_, _, rule, edits) in groups {
        let conflict = edits.iter().find_map(|edit| {
            resolution
                .accepted
                .iter()
                .find(|accepted| accepted.span.overlaps(&edit.span))
                .map(|accepted| (edit.span, accepted.span))
        });

        match conflict {
            Some((span, conflicts_with)) => resolution.dropped.push(DroppedProposal {
                rule,
                span,
                conflicts_with,
            }),
            None => resolution.accepted.extend(edits),
        }
    }

    resolution.accepted.sort_by_key(|edit| edit.span.start);
    Ok(resolution)
}
