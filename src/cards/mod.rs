//! Card system: prototypes, instances, and the read-only library.
//!
//! ## Key Types
//!
//! - `CardKey`: library identity of a card `(mould_id, variant)`
//! - `CardPrototype`: immutable base stats plus declared abilities
//! - `CardLibrary`: read-only prototype lookup
//! - `CardInstance`: one concrete card in one match
//! - `InstanceId`: unique per-match card identity

pub mod definition;
pub mod instance;
pub mod library;

pub use definition::{CardKey, CardPrototype, CardStats, CreatureType, Faction, StatKind};
pub use instance::{CardInstance, InstanceId};
pub use library::CardLibrary;
