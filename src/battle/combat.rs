//! Combat resolution.
//!
//! The resolution order for a creature-vs-creature attack is part of the
//! deterministic contract and must not be rearranged:
//!
//! 1. record both pre-attack defenses
//! 2. attacker takes counter damage, attacker defense-change triggers
//! 3. target takes attack damage, target being-attacked triggers, target
//!    defense-change triggers
//! 4. attacker after-attack triggers
//! 5. death check: attacker first, then target
//! 6. per death: the dying card's Death abilities, then the killer's
//!    kill-sensitive abilities, then re-check and bury
//!
//! Note that step 3 reads the attacker's damage *after* step 2 has run: a
//! Rage that wakes up on the counter damage hits with the boosted value.

use crate::abilities::{death, engine};
use crate::cards::InstanceId;
use crate::core::{AttackTarget, GameState, PlayerId};
use crate::error::EngineError;
use crate::zones::{self, Zone, ZoneMove};

/// Resolve an attack by one of `player`'s creatures.
pub(crate) fn attack(
    state: &mut GameState,
    player: PlayerId,
    attacker_id: InstanceId,
    target: &AttackTarget,
) -> Result<(), EngineError> {
    if state.player(player).card_in_play(attacker_id).is_none() {
        return Err(EngineError::not_in_play(attacker_id));
    }

    match target {
        AttackTarget::Overlord(target_player) => {
            if *target_player == player {
                return Err(EngineError::InvalidAction(
                    "cannot attack your own overlord".to_string(),
                ));
            }
            attack_overlord(state, attacker_id, *target_player)
        }
        AttackTarget::Creature(target_id) => {
            if state.player(player).card_in_play(*target_id).is_some() {
                return Err(EngineError::InvalidAction(
                    "cannot attack a friendly creature".to_string(),
                ));
            }
            if state
                .player(player.opponent())
                .card_in_play(*target_id)
                .is_none()
            {
                return Err(EngineError::not_in_play(*target_id));
            }
            attack_creature(state, attacker_id, *target_id)
        }
    }
}

/// Creature-vs-creature combat, in the normative order.
fn attack_creature(
    state: &mut GameState,
    attacker_id: InstanceId,
    target_id: InstanceId,
) -> Result<(), EngineError> {
    // 1. Pre-attack defenses, needed by roll-back abilities.
    let attacker_pre = state
        .card_in_play(attacker_id)
        .ok_or(EngineError::not_in_play(attacker_id))?
        .current
        .defense;
    let target_pre = state
        .card_in_play(target_id)
        .ok_or(EngineError::not_in_play(target_id))?
        .current
        .defense;

    death::reset_priority_attack(state, attacker_id);
    death::reset_priority_attack(state, target_id);

    // 2. Attacker takes counter damage.
    let counter_damage = state
        .card_in_play(target_id)
        .ok_or(EngineError::not_in_play(target_id))?
        .current
        .damage;
    if let Some(attacker) = state.card_in_play_mut(attacker_id) {
        attacker.current.defense -= counter_damage;
    }
    engine::on_defense_change(state, attacker_id, attacker_pre, attacker_pre - counter_damage)?;

    // 3. Target takes attack damage. The damage value is read here, after
    //    step 2's triggers have run.
    let attack_damage = state
        .card_in_play(attacker_id)
        .ok_or(EngineError::not_in_play(attacker_id))?
        .current
        .damage;
    if let Some(target) = state.card_in_play_mut(target_id) {
        target.current.defense -= attack_damage;
    }
    engine::on_being_attacked(state, target_id, attacker_id)?;
    let target_now = state
        .card_in_play(target_id)
        .map_or(target_pre - attack_damage, |c| c.current.defense);
    engine::on_defense_change(state, target_id, target_pre, target_now)?;

    // 4. Attacker post-attack triggers.
    engine::after_attacking(state, attacker_id)?;

    // 5-6. Death checks: attacker first, then target. The target's check
    //       happens after the attacker's resolution because a kill-
    //       sensitive ability fired there can restore the target.
    resolve_death_if_dead(state, attacker_id, Some(target_id), Some(target_pre))?;
    resolve_death_if_dead(state, target_id, Some(attacker_id), Some(attacker_pre))?;

    Ok(())
}

/// A creature strikes the opposing overlord directly.
fn attack_overlord(
    state: &mut GameState,
    attacker_id: InstanceId,
    target_player: PlayerId,
) -> Result<(), EngineError> {
    let damage = state
        .card_in_play(attacker_id)
        .ok_or(EngineError::not_in_play(attacker_id))?
        .current
        .damage;

    let player = state.player_mut(target_player);
    player.defense -= damage;
    if player.defense <= 0 {
        state.set_winner(target_player.opponent());
    }
    Ok(())
}

/// Run death resolution for a card if it is in play at or below zero
/// defense.
///
/// `killer` and `killer_pre_defense` carry the attack context into the
/// kill-sensitive ability window; ability damage passes `None` for the
/// pre-attack defense and no kill hook fires.
pub(crate) fn resolve_death_if_dead(
    state: &mut GameState,
    card_id: InstanceId,
    killer: Option<InstanceId>,
    killer_pre_defense: Option<i32>,
) -> Result<(), EngineError> {
    let dead = state.card_in_play(card_id).is_some_and(|c| c.is_dead());
    if !dead {
        return Ok(());
    }

    // The dying card's own Death abilities run first.
    engine::on_death(state, card_id)?;

    // Then the killer's kill-sensitive abilities, if it is still on board.
    if let (Some(killer_id), Some(pre_defense)) = (killer, killer_pre_defense) {
        if state.card_in_play(killer_id).is_some() {
            engine::on_kill(state, killer_id, pre_defense)?;
        }
    }

    // Only now re-check and bury.
    let still_dead = state.card_in_play(card_id).is_some_and(|c| c.is_dead());
    if still_dead {
        let moved = zones::move_zone(state, card_id, Zone::Play, Zone::Graveyard);
        debug_assert_eq!(moved, ZoneMove::Moved);
    }
    Ok(())
}
