//! # duelcore
//!
//! A deterministic two-player card-battle engine.
//!
//! The engine is the battle core of a collectible-card game whose matches
//! are re-executed by every validating node: players alternate turns, play
//! cards from hand, attack with creatures, and trigger abilities that
//! mutate combat stats and board state. Given the same seed and the same
//! action sequence, two runs produce byte-identical states and outcome
//! logs.
//!
//! ## Design Principles
//!
//! 1. **Pure state transitions**: resolving an action is a function of
//!    `(GameState, PlayerAction)`. No I/O, no clocks, no ambient
//!    randomness; the only random source is the match seed.
//!
//! 2. **Atomic actions**: every action mutates a cloned working copy that
//!    is committed only on full success. A failed action leaves the
//!    canonical state untouched. `im` persistent structures keep the clone
//!    cheap.
//!
//! 3. **Closed ability set**: abilities are a tagged union matched
//!    exhaustively, so every kind provably has a handler at every trigger
//!    point.
//!
//! ## Modules
//!
//! - `core`: players, match state, actions, outcomes, seeded selection
//! - `cards`: prototypes, instances, the read-only card library
//! - `abilities`: the ability union and its resolution strategies
//! - `zones`: zone model and validated movement
//! - `battle`: combat resolver, phase FSM, action processor, match setup
//! - `error`: the engine error taxonomy

pub mod abilities;
pub mod battle;
pub mod cards;
pub mod core;
pub mod error;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ActionKind, ActionOutcome, AttackTarget, GameState, PlayerAction, PlayerId, PlayerState,
    SelectionRng, DEFAULT_OVERLORD_DEFENSE,
};

pub use crate::cards::{
    CardInstance, CardKey, CardLibrary, CardPrototype, CardStats, CreatureType, Faction,
    InstanceId, StatKind,
};

pub use crate::abilities::{AbilityDefinition, AbilityKind, AbilityTrigger, CardAbilityInstance};

pub use crate::battle::{ActionProcessor, MatchBuilder, MatchPhase};

pub use crate::error::EngineError;

pub use crate::zones::{move_zone, Zone, ZoneMove};
