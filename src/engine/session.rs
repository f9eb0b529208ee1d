use crate::engine::action::Proposal;
use crate::engine::errors::EngineError;
use crate::engine::render::render;
use crate::engine::resolver::{resolve, DroppedProposal};
use crate::engine::rule::{NodeRef, Rule};
use crate::syntax::{PythonParser, SyntaxTree};

/// Default ceiling on parse→walk→resolve→render passes.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Fixpoint driver over a fixed rule list.
///
/// Each pass parses the current text from scratch, offers every node to
/// every rule in registration order, resolves the proposed edits, and
/// renders the accepted ones back into text. Passes repeat while edits are
/// being accepted: one pass's synthesized nodes become ordinary sourced
/// nodes in the next pass, which is what makes them matchable at all.
///
/// The shared state `C` is created once per session and never reset
/// between passes, so context recorded in pass 1 is still visible in
/// pass 2.
pub struct Session<C> {
    rules: Vec<Box<dyn Rule<C>>>,
    state: C,
    parser: PythonParser,
    max_passes: usize,
}

/// What one [`Session::run`] invocation produced.
#[derive(Debug)]
pub struct SessionOutcome {
    /// Final rewritten text; identical to the input when nothing matched
    pub text: String,
    /// Number of passes executed, including the final quiescent one
    pub passes: usize,
    /// Whether the input differs from the output
    pub changed: bool,
    /// False when the pass ceiling was hit before reaching a fixpoint;
    /// the text is then best-effort, not converged
    pub converged: bool,
    /// Proposals rejected by conflict resolution, across all passes
    pub dropped: Vec<DroppedProposal>,
}

impl<C> Session<C> {
    /// Create a session over a rule list and an initial shared state.
    ///
    /// Rule order is significant: it is the order every node is offered to
    /// the rules, and the tie-break when proposals conflict.
    pub fn new(rules: Vec<Box<dyn Rule<C>>>, state: C) -> Result<Self, EngineError> {
        Ok(Self {
            rules,
            state,
            parser: PythonParser::new()?,
            max_passes: DEFAULT_MAX_PASSES,
        })
    }

    pub fn with_max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes.max(1);
        self
    }

    /// Shared state as written by the rules so far.
    pub fn state(&self) -> &C {
        &self.state
    }

    /// Run passes until a pass accepts no edits, or the ceiling is hit.
    ///
    /// Parse failure is fatal and yields no output text; hitting the pass
    /// ceiling is not, and returns the last rendered text with
    /// `converged` set to false.
    pub fn run(&mut self, source: &str) -> Result<SessionOutcome, EngineError> {
        let mut text = source.to_string();
        let mut dropped = Vec::new();
        let mut passes = 0;
        let mut converged = false;

        while passes < self.max_passes {
            passes += 1;
            let tree = self.parser.parse(&text)?;
            let proposals = self.collect_proposals(&tree);
            let resolution = resolve(&tree, proposals)?;
            dropped.extend(resolution.dropped);

            if resolution.accepted.is_empty() {
                converged = true;
                break;
            }
            text = render(&text, &resolution.accepted);
        }

        let changed = text != source;
        Ok(SessionOutcome {
            text,
            passes,
            changed,
            converged,
            dropped,
        })
    }

    /// Offer every node to every rule, pre-order and left to right,
    /// collecting each non-empty yield as one atomic proposal.
    fn collect_proposals(&mut self, tree: &SyntaxTree) -> Vec<Proposal> {
        let mut proposals = Vec::new();
        for (id, node) in tree.iter() {
            for (rule_index, rule) in self.rules.iter().enumerate() {
                let node_ref = NodeRef {
                    id,
                    stmt: &node.stmt,
                    span: node.span,
                };
                let actions = rule.check(node_ref, &mut self.state);
                if !actions.is_empty() {
                    proposals.push(Proposal {
                        rule: rule.name(),
                        rule_index,
                        anchor_offset: node.span.start,
                        actions,
                    });
                }
            }
        }
        proposals
    }
}
