//! Core engine types: players, match state, actions, outcomes, RNG.
//!
//! These are the fundamental building blocks the battle modules operate on.

pub mod action;
pub mod outcome;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{ActionKind, AttackTarget, PlayerAction};
pub use outcome::ActionOutcome;
pub use player::{PlayerId, PlayerState};
pub use rng::SelectionRng;
pub use state::{GameState, DEFAULT_OVERLORD_DEFENSE};
