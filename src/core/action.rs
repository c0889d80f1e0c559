//! Player actions: the inbound interface of the engine.
//!
//! A `PlayerAction` is the "verb" a player submits, one at a time, in strict
//! sequence order. The action processor validates it against the current
//! state and either resolves it fully or rejects it without mutation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::player::PlayerId;
use crate::cards::InstanceId;

/// Target of a creature attack: an opposing creature or the opposing
/// overlord.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackTarget {
    /// Attack a creature in the opponent's play zone.
    Creature(InstanceId),
    /// Attack the opposing player's overlord directly.
    Overlord(PlayerId),
}

/// A complete player action.
///
/// Every variant carries the acting player so the processor can validate
/// turn ownership before touching any state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Play a card from hand onto the board, firing its Entry abilities.
    CardPlay {
        player: PlayerId,
        card: InstanceId,
    },

    /// Attack with a creature in play.
    CardAttack {
        player: PlayerId,
        attacker: InstanceId,
        target: AttackTarget,
    },

    /// Explicitly invoke an ability of a card in play.
    ///
    /// `targets` holds the ability's chosen targets, in the order the
    /// ability consumes them. SmallVec avoids a heap allocation for the
    /// common 0-3 target case.
    CardAbilityUsed {
        player: PlayerId,
        card: InstanceId,
        targets: SmallVec<[InstanceId; 3]>,
    },

    /// Pass the turn to the opponent.
    EndTurn { player: PlayerId },

    /// Draw the top card of the deck into hand.
    DrawCard { player: PlayerId },

    /// Exchange the named hand cards during the mulligan phase.
    Mulligan {
        player: PlayerId,
        cards: Vec<InstanceId>,
    },

    /// Concede the match.
    LeaveMatch { player: PlayerId },
}

impl PlayerAction {
    /// The player submitting this action.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            PlayerAction::CardPlay { player, .. }
            | PlayerAction::CardAttack { player, .. }
            | PlayerAction::CardAbilityUsed { player, .. }
            | PlayerAction::EndTurn { player }
            | PlayerAction::DrawCard { player }
            | PlayerAction::Mulligan { player, .. }
            | PlayerAction::LeaveMatch { player } => *player,
        }
    }

    /// The structural kind of this action, used by the phase table.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            PlayerAction::CardPlay { .. } => ActionKind::CardPlay,
            PlayerAction::CardAttack { .. } => ActionKind::CardAttack,
            PlayerAction::CardAbilityUsed { .. } => ActionKind::CardAbilityUsed,
            PlayerAction::EndTurn { .. } => ActionKind::EndTurn,
            PlayerAction::DrawCard { .. } => ActionKind::DrawCard,
            PlayerAction::Mulligan { .. } => ActionKind::Mulligan,
            PlayerAction::LeaveMatch { .. } => ActionKind::LeaveMatch,
        }
    }
}

/// Discriminant of a `PlayerAction`, without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    CardPlay,
    CardAttack,
    CardAbilityUsed,
    EndTurn,
    DrawCard,
    Mulligan,
    LeaveMatch,
}
