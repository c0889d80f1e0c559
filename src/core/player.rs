//! Player identification and per-player battle state.
//!
//! ## PlayerId
//!
//! Type-safe player identifier. A match always has exactly two players,
//! index 0 and index 1.
//!
//! ## PlayerState
//!
//! Owns the overlord defense total and the four disjoint card sequences
//! (hand, play, deck, graveyard). A card instance lives in exactly one
//! sequence across both players at all times; its zone is implied by which
//! sequence holds it, never by a field on the card.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, InstanceId};
use crate::zones::Zone;

/// Player identifier for the two seats of a match.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the opposing seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self((self.0 + 1) % 2)
    }

    /// Iterate both player IDs in seat order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..2u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player battle state.
///
/// The four card sequences are `im::Vector`s so that cloning the whole
/// state for the working-copy commit shares structure instead of copying.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Which seat this state belongs to.
    pub id: PlayerId,

    /// Overlord defense (player health). The match ends when this reaches 0.
    pub defense: i32,

    /// Cards held in hand, in draw order.
    pub hand: Vector<CardInstance>,

    /// Cards on the board, in board-position order.
    pub play: Vector<CardInstance>,

    /// Cards in the deck. The top of the deck is the end of the sequence.
    pub deck: Vector<CardInstance>,

    /// Cards in the graveyard, in death order.
    pub graveyard: Vector<CardInstance>,
}

impl PlayerState {
    /// Create an empty player state with the given starting defense.
    #[must_use]
    pub fn new(id: PlayerId, defense: i32) -> Self {
        Self {
            id,
            defense,
            hand: Vector::new(),
            play: Vector::new(),
            deck: Vector::new(),
            graveyard: Vector::new(),
        }
    }

    /// Get the sequence backing a zone.
    #[must_use]
    pub fn zone(&self, zone: Zone) -> &Vector<CardInstance> {
        match zone {
            Zone::Hand => &self.hand,
            Zone::Play => &self.play,
            Zone::Deck => &self.deck,
            Zone::Graveyard => &self.graveyard,
        }
    }

    /// Get the mutable sequence backing a zone.
    pub fn zone_mut(&mut self, zone: Zone) -> &mut Vector<CardInstance> {
        match zone {
            Zone::Hand => &mut self.hand,
            Zone::Play => &mut self.play,
            Zone::Deck => &mut self.deck,
            Zone::Graveyard => &mut self.graveyard,
        }
    }

    /// Find a card's position within a zone.
    #[must_use]
    pub fn position_in(&self, zone: Zone, instance_id: InstanceId) -> Option<usize> {
        self.zone(zone)
            .iter()
            .position(|c| c.instance_id == instance_id)
    }

    /// Find which zone currently holds a card of this player, if any.
    #[must_use]
    pub fn zone_of(&self, instance_id: InstanceId) -> Option<Zone> {
        Zone::ALL
            .iter()
            .copied()
            .find(|&zone| self.position_in(zone, instance_id).is_some())
    }

    /// Get a card in play.
    #[must_use]
    pub fn card_in_play(&self, instance_id: InstanceId) -> Option<&CardInstance> {
        self.play.iter().find(|c| c.instance_id == instance_id)
    }

    /// Get a mutable card in play.
    pub fn card_in_play_mut(&mut self, instance_id: InstanceId) -> Option<&mut CardInstance> {
        let pos = self.position_in(Zone::Play, instance_id)?;
        self.play.get_mut(pos)
    }

    /// Remove a card from a zone, returning it.
    ///
    /// Returns `None` (and removes nothing) if the card is not in the zone.
    pub fn take_from(&mut self, zone: Zone, instance_id: InstanceId) -> Option<CardInstance> {
        let pos = self.position_in(zone, instance_id)?;
        Some(self.zone_mut(zone).remove(pos))
    }

    /// Draw the top card of the deck into hand.
    ///
    /// Returns the drawn card's instance ID, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<InstanceId> {
        let card = self.deck.pop_back()?;
        let id = card.instance_id;
        self.hand.push_back(card);
        Some(id)
    }

    /// Iterate every card instance this player holds, zone by zone.
    pub fn all_cards(&self) -> impl Iterator<Item = &CardInstance> {
        Zone::ALL.iter().flat_map(move |&zone| self.zone(zone).iter())
    }

    /// Total number of card instances across all four zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        Zone::ALL.iter().map(|&zone| self.zone(zone).len()).sum()
    }
}
