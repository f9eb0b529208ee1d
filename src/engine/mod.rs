//! The rule-application core: edit actions, conflict resolution, text
//! rendering, and the fixpoint session driver.
//!
//! Everything here is generic over the rule set and its shared context;
//! the tkinter-specific rewrites live in [`crate::rules`].

pub mod action;
pub mod errors;
pub mod render;
pub mod resolver;
pub mod rule;
pub mod session;

pub use action::{Action, ActionKind, Proposal};
pub use errors::EngineError;
pub use render::render;
pub use resolver::{resolve, DroppedProposal, Resolution, ResolvedEdit};
pub use rule::{NodeRef, Rule};
pub use session::{Session, SessionOutcome, DEFAULT_MAX_PASSES};
