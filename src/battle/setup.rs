//! Match setup: building the initial state from a library and deck lists.
//!
//! This mirrors the match-start collaborator's contract so embedders and
//! tests construct states the same way: instantiate both decks from the
//! library, shuffle them deterministically from the match seed, draw the
//! opening hands, and hand back a processor over the same library.

use im::Vector;

use crate::cards::{CardInstance, CardKey, CardLibrary};
use crate::core::{GameState, PlayerId, SelectionRng, DEFAULT_OVERLORD_DEFENSE};
use crate::error::EngineError;

use super::processor::ActionProcessor;
use super::turn::MatchPhase;

/// Builder for a fresh two-player match.
pub struct MatchBuilder {
    library: CardLibrary,
    decks: [Vec<CardKey>; 2],
    starting_defense: i32,
    starting_hand_size: usize,
    skip_mulligan: bool,
}

impl MatchBuilder {
    /// Start building a match over a card library.
    #[must_use]
    pub fn new(library: CardLibrary) -> Self {
        Self {
            library,
            decks: [Vec::new(), Vec::new()],
            starting_defense: DEFAULT_OVERLORD_DEFENSE,
            starting_hand_size: 3,
            skip_mulligan: false,
        }
    }

    /// Set a player's deck list.
    #[must_use]
    pub fn deck(mut self, player: PlayerId, keys: Vec<CardKey>) -> Self {
        self.decks[player.index()] = keys;
        self
    }

    /// Override the starting overlord defense (default 50).
    #[must_use]
    pub fn starting_defense(mut self, defense: i32) -> Self {
        self.starting_defense = defense;
        self
    }

    /// Override the opening hand size (default 3).
    #[must_use]
    pub fn starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Start directly in normal play, skipping the mulligan window.
    #[must_use]
    pub fn skip_mulligan(mut self) -> Self {
        self.skip_mulligan = true;
        self
    }

    /// Build the processor and the initial state for the given match seed.
    pub fn build(self, seed: u64) -> Result<(ActionProcessor, GameState), EngineError> {
        let mut state = GameState::new(seed);

        for player in PlayerId::both() {
            state.player_mut(player).defense = self.starting_defense;

            let keys = &self.decks[player.index()];
            let mut deck: Vec<CardInstance> = Vec::with_capacity(keys.len());
            for key in keys {
                let proto = self.library.get(*key).ok_or_else(|| {
                    EngineError::StateConstraint(format!(
                        "deck of {} references unknown card {}",
                        player, key
                    ))
                })?;
                let id = state.alloc_instance_id();
                deck.push(CardInstance::from_prototype(id, proto, player));
            }

            let mut rng =
                SelectionRng::for_context(seed, &format!("deck-shuffle-{}", player.index()));
            rng.shuffle(&mut deck);

            state.player_mut(player).deck = Vector::from_iter(deck);

            for _ in 0..self.starting_hand_size {
                let _ = state.player_mut(player).draw();
            }
        }

        if self.skip_mulligan {
            state.phase = MatchPhase::InProgress;
        }

        Ok((ActionProcessor::new(self.library), state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardPrototype, CardStats, CreatureType, Faction};

    fn small_library() -> CardLibrary {
        let mut library = CardLibrary::new();
        for mould in 1..=5u32 {
            library.register(CardPrototype::new(
                CardKey::standard(mould),
                format!("Unit {}", mould),
                CardStats {
                    defense: mould as i32,
                    damage: 1,
                    cost: mould as i32,
                    faction: Faction::Water,
                    creature_type: CreatureType::Light,
                },
            ));
        }
        library
    }

    fn deck_list() -> Vec<CardKey> {
        (1..=5).map(CardKey::standard).collect()
    }

    #[test]
    fn test_build_deals_hands_and_decks() {
        let (_, state) = MatchBuilder::new(small_library())
            .deck(PlayerId::new(0), deck_list())
            .deck(PlayerId::new(1), deck_list())
            .build(42)
            .unwrap();

        for player in PlayerId::both() {
            assert_eq!(state.player(player).hand.len(), 3);
            assert_eq!(state.player(player).deck.len(), 2);
            assert_eq!(state.player(player).defense, 50);
        }
        assert_eq!(state.phase, MatchPhase::Mulligan);
    }

    #[test]
    fn test_build_is_deterministic() {
        let build = || {
            MatchBuilder::new(small_library())
                .deck(PlayerId::new(0), deck_list())
                .deck(PlayerId::new(1), deck_list())
                .build(42)
                .unwrap()
                .1
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn test_different_seeds_shuffle_differently() {
        let build = |seed| {
            MatchBuilder::new(small_library())
                .deck(PlayerId::new(0), deck_list())
                .deck(PlayerId::new(1), deck_list())
                .build(seed)
                .unwrap()
                .1
        };

        let order = |state: &GameState| {
            state
                .player(PlayerId::new(0))
                .deck
                .iter()
                .map(|c| c.key)
                .collect::<Vec<_>>()
        };

        // With 5 cards, two seeds agreeing on both shuffles is vanishingly
        // unlikely; pick seeds known to differ.
        assert_ne!(order(&build(1)), order(&build(2)));
    }

    #[test]
    fn test_unknown_card_rejected() {
        let err = MatchBuilder::new(small_library())
            .deck(PlayerId::new(0), vec![CardKey::standard(99)])
            .build(42)
            .unwrap_err();

        assert!(matches!(err, EngineError::StateConstraint(_)));
    }

    #[test]
    fn test_skip_mulligan() {
        let (_, state) = MatchBuilder::new(small_library())
            .deck(PlayerId::new(0), deck_list())
            .deck(PlayerId::new(1), deck_list())
            .skip_mulligan()
            .build(42)
            .unwrap();

        assert_eq!(state.phase, MatchPhase::InProgress);
    }
}
