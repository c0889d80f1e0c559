//! Ability system: the closed set of card abilities and their resolution.
//!
//! ## Key Types
//!
//! - `AbilityKind`: closed tagged union of every ability with its parameters
//! - `AbilityTrigger`: the event an ability listens on
//! - `AbilityDefinition`: a prototype's declaration (kind + trigger)
//! - `CardAbilityInstance`: per-card runtime ability state
//!
//! Resolution is organized as one strategy per kind, grouped by concern:
//! stat deltas (`stat`), the death window (`death`), and board manipulation
//! (`board`). The `engine` module routes trigger events to strategies with
//! exhaustive matches.

pub mod kind;
pub mod instance;

pub(crate) mod board;
pub(crate) mod death;
pub(crate) mod engine;
pub(crate) mod stat;

pub use instance::CardAbilityInstance;
pub use kind::{AbilityDefinition, AbilityKind, AbilityTrigger};
