use crate::engine::{Action, NodeRef, Rule};
use crate::rules::{UpgradeState, NEW_ALIAS, NEW_MODULE, OLD_MODULE};
use crate::syntax::{ImportAlias, Stmt};

/// Rewrites `import tkinter [as X]` entries to `import tukaan as tk`,
/// recording the binding the rest of the file uses for the old module.
///
/// Other entries of a multi-name import are kept as they are. An import
/// with no tkinter entry declines, so the rewritten import no longer
/// matches and the session converges.
pub struct RewriteImports;

impl Rule<UpgradeState> for RewriteImports {
    fn name(&self) -> &'static str {
        "rewrite-imports"
    }

    fn check(&self, node: NodeRef<'_>, state: &mut UpgradeState) -> Vec<Action> {
        let Stmt::Import { names } = node.stmt else {
            return Vec::new();
        };

        let mut rewritten = names.clone();
        let mut matched = false;
        for entry in &mut rewritten {
            if entry.name == OLD_MODULE {
                state.tkinter_used = true;
                state.tkinter_as = entry.alias.clone();
                state.replacement_as = Some(NEW_ALIAS.to_string());
                *entry = ImportAlias::new(NEW_MODULE, Some(NEW_ALIAS));
                matched = true;
            }
        }

        if !matched {
            return Vec::new();
        }
        vec![Action::replace(node.id, Stmt::Import { names: rewritten })]
    }
}
