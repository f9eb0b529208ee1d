//! tkinter → tukaan upgrade rules layered on the generic engine.
//!
//! Registration order matters: [`RewriteImports`] records which local name
//! tkinter was bound under, and the other rules decline until that state
//! exists. Because the session threads the state through a pass in walk
//! order, a file with the import at the top upgrades fully in one pass; a
//! file using tkinter before importing it needs the fixpoint loop's second
//! pass.

mod bindings;
mod calls;
mod imports;

pub use bindings::RewriteWindowBinding;
pub use calls::RewriteMainloopCall;
pub use imports::RewriteImports;

use crate::engine::{EngineError, Rule, Session};

/// Module being replaced and its upgrade target.
pub const OLD_MODULE: &str = "tkinter";
pub const NEW_MODULE: &str = "tukaan";
/// Local name the replacement import is bound under.
pub const NEW_ALIAS: &str = "tk";
/// Name the application-context binding is introduced under.
pub const APP_NAME: &str = "app";

/// Cross-rule, cross-pass shared state for the upgrade.
///
/// Written by [`RewriteImports`] when it matches; the dependent rules call
/// [`UpgradeState::bound_name`] and decline while it reports nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpgradeState {
    /// Whether a tkinter import was seen at all
    pub tkinter_used: bool,
    /// Alias tkinter was originally bound under (`None` for a plain import)
    pub tkinter_as: Option<String>,
    /// Local name chosen for the replacement module
    pub replacement_as: Option<String>,
}

impl UpgradeState {
    /// The local name the rest of the file still refers to tkinter by, or
    /// `None` while the import rule has not matched.
    pub fn bound_name(&self) -> Option<&str> {
        if !self.tkinter_used {
            return None;
        }
        Some(self.tkinter_as.as_deref().unwrap_or(OLD_MODULE))
    }
}

/// All upgrade rules in registration order.
pub fn upgrade_rules() -> Vec<Box<dyn Rule<UpgradeState>>> {
    vec![
        Box::new(RewriteImports),
        Box::new(RewriteWindowBinding),
        Box::new(RewriteMainloopCall),
    ]
}

/// A ready-to-run session with the upgrade rules registered.
pub fn upgrade_session() -> Result<Session<UpgradeState>, EngineError> {
    Session::new(upgrade_rules(), UpgradeState::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_name_requires_a_seen_import() {
        let state = UpgradeState::default();
        assert_eq!(state.bound_name(), None);
    }

    #[test]
    fn bound_name_falls_back_to_module_name() {
        let state = UpgradeState {
            tkinter_used: true,
            tkinter_as: None,
            replacement_as: Some(NEW_ALIAS.to_string()),
        };
        assert_eq!(state.bound_name(), Some("tkinter"));
    }

    #[test]
    fn bound_name_prefers_the_recorded_alias() {
        let state = UpgradeState {
            tkinter_used: true,
            tkinter_as: Some("gui".to_string()),
            replacement_as: Some(NEW_ALIAS.to_string()),
        };
        assert_eq!(state.bound_name(), Some("gui"));
    }
}
