//! Zone system: card locations and validated movement.
//!
//! A card's zone is implied by which player sequence currently holds it;
//! there is no zone field on the card that could desynchronize. The
//! invariant the manager enforces: every instance ID appears in exactly
//! one of the eight sequences (four zones, two players) at all times.

pub mod manager;

pub use manager::{move_zone, ZoneMove};

use serde::{Deserialize, Serialize};

/// The logical location of a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Hand,
    Play,
    Deck,
    Graveyard,
}

impl Zone {
    /// All zones, in canonical scan order.
    pub const ALL: [Zone; 4] = [Zone::Hand, Zone::Play, Zone::Deck, Zone::Graveyard];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Hand => write!(f, "Hand"),
            Zone::Play => write!(f, "Play"),
            Zone::Deck => write!(f, "Deck"),
            Zone::Graveyard => write!(f, "Graveyard"),
        }
    }
}
