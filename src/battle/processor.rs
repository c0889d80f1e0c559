//! Action processing: validation, dispatch, atomic commit.
//!
//! `ActionProcessor::add_action` is the only entry point that mutates a
//! match. Every action resolves fully and atomically: all mutation happens
//! on a cloned working copy, committed over the canonical state only once
//! the whole action has succeeded. On error the caller observes zero
//! mutation. The `im`-backed state makes the clone cheap.

use tracing::debug;

use crate::abilities::engine;
use crate::cards::{CardLibrary, InstanceId};
use crate::core::{ActionOutcome, GameState, PlayerAction, PlayerId};
use crate::error::EngineError;
use crate::zones::Zone;

use super::combat;

/// Validates and resolves player actions against a match state.
///
/// Holds the read-only card library consulted by abilities that pick
/// replacement cards. The processor itself is stateless across actions;
/// everything mutable lives in the `GameState`.
#[derive(Clone, Debug)]
pub struct ActionProcessor {
    library: CardLibrary,
}

impl ActionProcessor {
    /// Create a processor over a card library.
    #[must_use]
    pub fn new(library: CardLibrary) -> Self {
        Self { library }
    }

    /// The card library this processor consults.
    #[must_use]
    pub fn library(&self) -> &CardLibrary {
        &self.library
    }

    /// Resolve one action.
    ///
    /// Returns the outcomes the action produced (also appended to the
    /// state's log), or an error with the state untouched.
    pub fn add_action(
        &self,
        state: &mut GameState,
        action: &PlayerAction,
    ) -> Result<Vec<ActionOutcome>, EngineError> {
        if state.is_ended {
            return Err(EngineError::match_ended());
        }
        if !state.phase.allows(action.kind()) {
            return Err(EngineError::StateConstraint(format!(
                "action {:?} is not allowed in phase {:?}",
                action.kind(),
                state.phase
            )));
        }
        let player = action.player();
        if player != state.current_player {
            return Err(EngineError::InvalidPlayer {
                expected: state.current_player,
                actual: player,
            });
        }

        debug!(action = ?action.kind(), %player, index = state.current_action_index, "resolving action");

        // All mutation goes to a working copy; commit only on full success.
        let mut working = state.clone();
        let log_mark = working.outcomes.len();

        self.dispatch(&mut working, action)?;

        working.phase = working.phase.transition(action.kind(), player);
        working.current_action_index += 1;

        let produced: Vec<ActionOutcome> =
            working.outcomes.iter().skip(log_mark).cloned().collect();
        *state = working;
        Ok(produced)
    }

    fn dispatch(&self, state: &mut GameState, action: &PlayerAction) -> Result<(), EngineError> {
        match action {
            PlayerAction::CardPlay { player, card } => self.card_play(state, *player, *card),
            PlayerAction::CardAttack {
                player,
                attacker,
                target,
            } => combat::attack(state, *player, *attacker, target),
            PlayerAction::CardAbilityUsed {
                player,
                card,
                targets,
            } => {
                if state.player(*player).card_in_play(*card).is_none() {
                    return Err(EngineError::not_in_play(*card));
                }
                engine::use_ability(state, *card, targets)
            }
            PlayerAction::EndTurn { player } => {
                state.current_player = player.opponent();
                Ok(())
            }
            PlayerAction::DrawCard { player } => {
                state
                    .player_mut(*player)
                    .draw()
                    .map(|_| ())
                    .ok_or_else(|| EngineError::InvalidAction("deck is empty".to_string()))
            }
            PlayerAction::Mulligan { player, cards } => self.mulligan(state, *player, cards),
            PlayerAction::LeaveMatch { player } => {
                state.set_winner(player.opponent());
                Ok(())
            }
        }
    }

    /// Move a card from hand to the board and fire its Entry abilities.
    fn card_play(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card_id: InstanceId,
    ) -> Result<(), EngineError> {
        let card = state
            .player_mut(player)
            .take_from(Zone::Hand, card_id)
            .ok_or(EngineError::CardNotFound {
                instance_id: card_id,
                zone: Zone::Hand,
            })?;
        state.player_mut(player).play.push_back(card);

        engine::on_entry(state, &self.library, card_id)
    }

    /// Exchange the named hand cards: return them to the deck bottom, draw
    /// the same count from the top.
    fn mulligan(
        &self,
        state: &mut GameState,
        player: PlayerId,
        cards: &[InstanceId],
    ) -> Result<(), EngineError> {
        for (i, card_id) in cards.iter().enumerate() {
            if cards[..i].contains(card_id) {
                return Err(EngineError::InvalidAction(format!(
                    "duplicate mulligan card {}",
                    card_id
                )));
            }
            if state.player(player).position_in(Zone::Hand, *card_id).is_none() {
                return Err(EngineError::CardNotFound {
                    instance_id: *card_id,
                    zone: Zone::Hand,
                });
            }
        }

        for card_id in cards {
            let card = state
                .player_mut(player)
                .take_from(Zone::Hand, *card_id)
                .ok_or(EngineError::CardNotFound {
                    instance_id: *card_id,
                    zone: Zone::Hand,
                })?;
            state.player_mut(player).deck.push_front(card);
        }
        for _ in 0..cards.len() {
            // The cards just returned guarantee the deck is large enough.
            let _ = state.player_mut(player).draw();
        }
        Ok(())
    }
}
