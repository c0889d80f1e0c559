//! Match state: the single value every validating node must agree on.
//!
//! `GameState` owns both players, the outcome log, and the bookkeeping the
//! processor needs (turn ownership, instance-id allocation, match seed).
//! It is created once per match by the match-start collaborator, mutated
//! exclusively through the action processor, and becomes immutable once
//! `is_ended` is set.
//!
//! All card sequences use `im` persistent structures, so cloning the whole
//! state for the working-copy commit is cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::outcome::ActionOutcome;
use super::player::{PlayerId, PlayerState};
use crate::battle::MatchPhase;
use crate::cards::{CardInstance, InstanceId};
use crate::zones::Zone;

/// Default starting overlord defense.
pub const DEFAULT_OVERLORD_DEFENSE: i32 = 50;

/// Complete state of one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Both players, seat order. Exactly two.
    pub players: [PlayerState; 2],

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Current match phase, driving which action kinds are admissible.
    pub phase: MatchPhase,

    /// Next instance ID to allocate. Monotonically increasing.
    next_instance_id: u32,

    /// Match seed for all deterministic random selection.
    pub random_seed: u64,

    /// Number of actions resolved so far.
    pub current_action_index: u64,

    /// Winning player once the match has ended.
    pub winner: Option<PlayerId>,

    /// Set when the match has ended; no further actions are accepted.
    pub is_ended: bool,

    /// Append-only log of observable effects, in resolution order.
    pub outcomes: Vector<ActionOutcome>,
}

impl GameState {
    /// Create a fresh match state in the mulligan phase.
    ///
    /// Both overlords start at [`DEFAULT_OVERLORD_DEFENSE`]; the match-start
    /// collaborator adjusts defense and populates decks before play begins.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            players: [
                PlayerState::new(PlayerId::new(0), DEFAULT_OVERLORD_DEFENSE),
                PlayerState::new(PlayerId::new(1), DEFAULT_OVERLORD_DEFENSE),
            ],
            current_player: PlayerId::new(0),
            phase: MatchPhase::Mulligan,
            next_instance_id: 1,
            random_seed: seed,
            current_action_index: 0,
            winner: None,
            is_ended: false,
            outcomes: Vector::new(),
        }
    }

    /// Get a player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    /// Get a player's mutable state.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id.index()]
    }

    /// Allocate the next instance ID.
    pub fn alloc_instance_id(&mut self) -> InstanceId {
        let id = InstanceId(self.next_instance_id);
        self.next_instance_id += 1;
        id
    }

    /// Peek the next instance ID without allocating it.
    #[must_use]
    pub fn peek_instance_id(&self) -> InstanceId {
        InstanceId(self.next_instance_id)
    }

    /// Locate a card in either player's play zone, scanning seats in order.
    #[must_use]
    pub fn card_in_play(&self, instance_id: InstanceId) -> Option<&CardInstance> {
        self.players
            .iter()
            .find_map(|p| p.card_in_play(instance_id))
    }

    /// Locate a mutable card in either player's play zone.
    pub fn card_in_play_mut(&mut self, instance_id: InstanceId) -> Option<&mut CardInstance> {
        let owner = self.owner_in_play(instance_id)?;
        self.player_mut(owner).card_in_play_mut(instance_id)
    }

    /// Find which player's play zone holds a card, scanning seats in order.
    #[must_use]
    pub fn owner_in_play(&self, instance_id: InstanceId) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|p| p.card_in_play(instance_id).is_some())
            .map(|p| p.id)
    }

    /// Find a card's owner and zone anywhere in the match.
    #[must_use]
    pub fn locate(&self, instance_id: InstanceId) -> Option<(PlayerId, Zone)> {
        self.players
            .iter()
            .find_map(|p| p.zone_of(instance_id).map(|zone| (p.id, zone)))
    }

    /// End the match with a winner. Idempotent: the first ending sticks.
    pub fn set_winner(&mut self, winner: PlayerId) {
        if self.is_ended {
            return;
        }
        self.winner = Some(winner);
        self.is_ended = true;
        self.phase = MatchPhase::Ended;
    }

    /// Append an outcome to the log.
    pub fn push_outcome(&mut self, outcome: ActionOutcome) {
        self.outcomes.push_back(outcome);
    }

    /// Serialize the state for the persistence collaborator.
    ///
    /// The byte stream is canonical: two states serialize identically if
    /// and only if they are equal, which is what the determinism contract
    /// of validating nodes rests on.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Restore a state previously produced by [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKey, CardPrototype, CardStats, CreatureType, Faction};

    fn sample_card(state: &mut GameState, owner: PlayerId) -> InstanceId {
        let proto = CardPrototype::new(
            CardKey::new(1, 0),
            "Unit",
            CardStats {
                defense: 4,
                damage: 2,
                cost: 2,
                faction: Faction::Water,
                creature_type: CreatureType::Feral,
            },
        );
        let id = state.alloc_instance_id();
        let card = CardInstance::from_prototype(id, &proto, owner);
        state.player_mut(owner).play.push_back(card);
        id
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new(42);

        assert_eq!(state.current_player, PlayerId::new(0));
        assert_eq!(state.phase, MatchPhase::Mulligan);
        assert_eq!(state.player(PlayerId::new(0)).defense, 50);
        assert_eq!(state.player(PlayerId::new(1)).defense, 50);
        assert!(!state.is_ended);
        assert!(state.winner.is_none());
        assert!(state.outcomes.is_empty());
    }

    #[test]
    fn test_instance_id_allocation() {
        let mut state = GameState::new(42);

        let a = state.alloc_instance_id();
        let b = state.alloc_instance_id();

        assert_eq!(a, InstanceId(1));
        assert_eq!(b, InstanceId(2));
        assert_eq!(state.peek_instance_id(), InstanceId(3));
    }

    #[test]
    fn test_card_lookup_scans_seats_in_order() {
        let mut state = GameState::new(42);
        let id0 = sample_card(&mut state, PlayerId::new(0));
        let id1 = sample_card(&mut state, PlayerId::new(1));

        assert_eq!(state.owner_in_play(id0), Some(PlayerId::new(0)));
        assert_eq!(state.owner_in_play(id1), Some(PlayerId::new(1)));
        assert_eq!(state.owner_in_play(InstanceId(99)), None);

        assert_eq!(state.locate(id1), Some((PlayerId::new(1), Zone::Play)));
    }

    #[test]
    fn test_set_winner_is_terminal_and_idempotent() {
        let mut state = GameState::new(42);

        state.set_winner(PlayerId::new(1));
        assert!(state.is_ended);
        assert_eq!(state.winner, Some(PlayerId::new(1)));
        assert_eq!(state.phase, MatchPhase::Ended);

        // A later ending attempt changes nothing.
        state.set_winner(PlayerId::new(0));
        assert_eq!(state.winner, Some(PlayerId::new(1)));
    }

    #[test]
    fn test_byte_roundtrip() {
        let mut state = GameState::new(42);
        sample_card(&mut state, PlayerId::new(0));
        state.player_mut(PlayerId::new(1)).defense = 37;

        let bytes = state.to_bytes().unwrap();
        let restored = GameState::from_bytes(&bytes).unwrap();

        assert_eq!(state, restored);
        assert_eq!(restored.to_bytes().unwrap(), bytes);
    }
}
