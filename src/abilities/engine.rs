//! Ability dispatch: routes trigger events to the strategy routines.
//!
//! Every dispatch matches on `AbilityKind` exhaustively, so adding a kind
//! without deciding its behavior at each trigger point is a compile error.

use tracing::debug;

use super::kind::{AbilityKind, AbilityTrigger};
use crate::cards::{CardLibrary, InstanceId};
use crate::core::GameState;
use crate::error::EngineError;

/// Fire a card's Entry abilities after it lands in play.
pub(crate) fn on_entry(
    state: &mut GameState,
    library: &CardLibrary,
    card_id: InstanceId,
) -> Result<(), EngineError> {
    let entry_kinds: Vec<AbilityKind> = match state.card_in_play(card_id) {
        Some(card) => card
            .active_abilities(AbilityTrigger::Entry)
            .map(|a| a.kind)
            .collect(),
        None => return Err(EngineError::not_in_play(card_id)),
    };

    for kind in entry_kinds {
        debug!(card = %card_id, ability = kind.name(), "entry ability");
        match kind {
            AbilityKind::AttackOverlord { damage } => {
                super::stat::apply_attack_overlord(state, card_id, damage)?;
            }
            AbilityKind::ReplaceUnitsWithStrongerOnes { .. } => {
                super::board::apply_replace_units(state, library, card_id)?;
            }
            AbilityKind::DealDamageToThisAndAdjacentUnits { damage } => {
                super::board::apply_adjacent_damage(state, card_id, card_id, damage)?;
            }
            // These kinds do nothing when a card enters play.
            AbilityKind::Rage { .. }
            | AbilityKind::PriorityAttack
            | AbilityKind::AdditionalDamageToHeavyInAttack { .. }
            | AbilityKind::ChangeStat { .. }
            | AbilityKind::Reanimate { .. }
            | AbilityKind::DevourAndCombineStats => {}
        }
    }
    Ok(())
}

/// Notify a card that its defense changed.
pub(crate) fn on_defense_change(
    state: &mut GameState,
    card_id: InstanceId,
    old_defense: i32,
    new_defense: i32,
) -> Result<(), EngineError> {
    if old_defense != new_defense {
        debug!(card = %card_id, old_defense, new_defense, "defense change");
    }
    super::stat::apply_rage(state, card_id)
}

/// Notify a card that it is being attacked by `attacker_id`.
///
/// Runs the attacker's conditional on-hit abilities against the target.
pub(crate) fn on_being_attacked(
    state: &mut GameState,
    target_id: InstanceId,
    attacker_id: InstanceId,
) -> Result<(), EngineError> {
    super::stat::apply_heavy_bonus(state, attacker_id, target_id)
}

/// Fire the attacker's post-attack stat deltas.
pub(crate) fn after_attacking(
    state: &mut GameState,
    attacker_id: InstanceId,
) -> Result<(), EngineError> {
    super::stat::apply_change_stat(state, attacker_id)
}

/// Run a dying card's own Death-triggered abilities.
pub(crate) fn on_death(state: &mut GameState, dying_id: InstanceId) -> Result<(), EngineError> {
    let death_kinds: Vec<AbilityKind> = match state.card_in_play(dying_id) {
        Some(card) => card
            .active_abilities(AbilityTrigger::Death)
            .map(|a| a.kind)
            .collect(),
        None => return Ok(()),
    };

    for kind in death_kinds {
        debug!(card = %dying_id, ability = kind.name(), "death ability");
        match kind {
            AbilityKind::Reanimate { .. } => {
                super::death::apply_reanimate(state, dying_id)?;
            }
            // These kinds do nothing when their card dies.
            AbilityKind::Rage { .. }
            | AbilityKind::PriorityAttack
            | AbilityKind::AdditionalDamageToHeavyInAttack { .. }
            | AbilityKind::ChangeStat { .. }
            | AbilityKind::DevourAndCombineStats
            | AbilityKind::DealDamageToThisAndAdjacentUnits { .. }
            | AbilityKind::ReplaceUnitsWithStrongerOnes { .. }
            | AbilityKind::AttackOverlord { .. } => {}
        }
    }
    Ok(())
}

/// Run the killer's kill-sensitive abilities after its victim's own death
/// abilities have resolved.
pub(crate) fn on_kill(
    state: &mut GameState,
    killer_id: InstanceId,
    pre_attack_defense: i32,
) -> Result<(), EngineError> {
    super::death::apply_priority_attack(state, killer_id, pre_attack_defense)
}

/// Explicitly invoke an ability of a card in play.
///
/// Resolves the first declared ability that supports direct invocation;
/// a card without one rejects the action.
pub(crate) fn use_ability(
    state: &mut GameState,
    card_id: InstanceId,
    targets: &[InstanceId],
) -> Result<(), EngineError> {
    let kinds: Vec<AbilityKind> = match state.card_in_play(card_id) {
        Some(card) => card.abilities.iter().map(|a| a.kind).collect(),
        None => return Err(EngineError::not_in_play(card_id)),
    };

    for kind in kinds {
        match kind {
            AbilityKind::DevourAndCombineStats => {
                debug!(card = %card_id, ability = kind.name(), "used ability");
                return super::board::apply_devour(state, card_id, targets);
            }
            AbilityKind::DealDamageToThisAndAdjacentUnits { damage } => {
                debug!(card = %card_id, ability = kind.name(), "used ability");
                let target = targets.first().copied().unwrap_or(card_id);
                return super::board::apply_adjacent_damage(state, card_id, target, damage);
            }
            // Trigger-driven kinds cannot be invoked directly.
            AbilityKind::Rage { .. }
            | AbilityKind::PriorityAttack
            | AbilityKind::AdditionalDamageToHeavyInAttack { .. }
            | AbilityKind::ChangeStat { .. }
            | AbilityKind::Reanimate { .. }
            | AbilityKind::ReplaceUnitsWithStrongerOnes { .. }
            | AbilityKind::AttackOverlord { .. } => {}
        }
    }

    Err(EngineError::InvalidAction(format!(
        "card {} has no ability that can be invoked directly",
        card_id
    )))
}
