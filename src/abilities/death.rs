//! Death-window strategies: Reanimate and PriorityAttack.
//!
//! Both run inside death resolution, after a card has dropped to zero
//! defense but before it is moved to the graveyard.

use smallvec::SmallVec;

use crate::abilities::{AbilityKind, CardAbilityInstance};
use crate::cards::{CardInstance, InstanceId};
use crate::core::{ActionOutcome, GameState};
use crate::error::EngineError;

/// Bring a dying card back as a fresh instance.
///
/// The replacement is minted under the next instance ID, carries the dying
/// card's prototype as its own baseline, has its current stats set to the
/// ability's configured defaults, and loses the Reanimate ability so it can
/// never loop. Fires at most once per original instance: `reanimated_into`
/// marks the ability consumed.
pub(crate) fn apply_reanimate(
    state: &mut GameState,
    dying_id: InstanceId,
) -> Result<(), EngineError> {
    let Some(owner) = state.owner_in_play(dying_id) else {
        return Ok(());
    };

    // Find an unconsumed Reanimate on the dying card.
    let params = state.card_in_play(dying_id).and_then(|card| {
        card.abilities.iter().find_map(|a| match a.kind {
            AbilityKind::Reanimate { defense, damage }
                if a.is_active && a.reanimated_into.is_none() =>
            {
                Some((defense, damage))
            }
            _ => None,
        })
    });
    let Some((defense, damage)) = params else {
        return Ok(());
    };

    let new_id = state.alloc_instance_id();

    let clone = {
        let Some(dying) = state.card_in_play_mut(dying_id) else {
            return Ok(());
        };

        // Mark the ability consumed on the original before cloning.
        for ability in dying.abilities.iter_mut() {
            if matches!(ability.kind, AbilityKind::Reanimate { .. }) {
                ability.reanimated_into = Some(new_id);
            }
        }

        let mut stats = dying.prototype;
        stats.defense = defense;
        stats.damage = damage;

        let abilities: SmallVec<[CardAbilityInstance; 2]> = dying
            .abilities
            .iter()
            .filter(|a| !matches!(a.kind, AbilityKind::Reanimate { .. }))
            .map(|a| CardAbilityInstance {
                kind: a.kind,
                trigger: a.trigger,
                is_active: true,
                was_applied: false,
                reanimated_into: None,
            })
            .collect();

        CardInstance {
            instance_id: new_id,
            key: dying.key,
            prototype: dying.prototype,
            current: stats,
            abilities,
            owner,
        }
    };

    state.player_mut(owner).play.push_back(clone);
    state.push_outcome(ActionOutcome::Reanimated {
        source: dying_id,
        new_instance: new_id,
        defense,
        damage,
    });
    Ok(())
}

/// Clear the per-attack PriorityAttack guard before an attack resolves.
pub(crate) fn reset_priority_attack(state: &mut GameState, card_id: InstanceId) {
    if let Some(card) = state.card_in_play_mut(card_id) {
        for ability in card.abilities.iter_mut() {
            if matches!(ability.kind, AbilityKind::PriorityAttack) {
                ability.was_applied = false;
            }
        }
    }
}

/// A lethal attack costs the attacker nothing: restore its defense to the
/// pre-attack value.
///
/// Runs once per attack resolution; `was_applied` guards against the same
/// kill being observed twice while both deaths resolve.
pub(crate) fn apply_priority_attack(
    state: &mut GameState,
    killer_id: InstanceId,
    pre_attack_defense: i32,
) -> Result<(), EngineError> {
    let mut restored_from: Option<i32> = None;

    if let Some(killer) = state.card_in_play_mut(killer_id) {
        let has_priority = killer
            .abilities
            .iter()
            .any(|a| matches!(a.kind, AbilityKind::PriorityAttack) && a.is_active && !a.was_applied);
        if has_priority {
            for ability in killer.abilities.iter_mut() {
                if matches!(ability.kind, AbilityKind::PriorityAttack) {
                    ability.was_applied = true;
                }
            }
            if killer.current.defense != pre_attack_defense {
                restored_from = Some(killer.current.defense);
                killer.current.defense = pre_attack_defense;
            }
        }
    }

    if let Some(old_defense) = restored_from {
        state.push_outcome(ActionOutcome::PriorityAttackRestore {
            instance_id: killer_id,
            restored_defense: pre_attack_defense,
        });
        // The restore is a defense change like any other; let Rage revert.
        super::engine::on_defense_change(state, killer_id, old_defense, pre_attack_defense)?;
    }
    Ok(())
}
