//! Board-manipulation strategies: devour, splash damage, unit replacement.

use crate::abilities::AbilityKind;
use crate::cards::{CardInstance, CardLibrary, InstanceId};
use crate::core::{ActionOutcome, GameState, SelectionRng};
use crate::error::EngineError;
use crate::zones::{self, Zone, ZoneMove};

/// Consume friendly units and absorb their stats.
///
/// Guarded by the ability's flags before any mutation: a repeat invocation,
/// even with the same target list, is an observable no-op.
pub(crate) fn apply_devour(
    state: &mut GameState,
    card_id: InstanceId,
    targets: &[InstanceId],
) -> Result<(), EngineError> {
    let owner = state
        .owner_in_play(card_id)
        .ok_or(EngineError::not_in_play(card_id))?;

    let consumed = {
        let Some(card) = state.card_in_play(card_id) else {
            return Err(EngineError::not_in_play(card_id));
        };
        card.abilities.iter().any(|a| {
            matches!(a.kind, AbilityKind::DevourAndCombineStats) && (a.was_applied || !a.is_active)
        })
    };
    if consumed {
        return Ok(());
    }

    if targets.is_empty() {
        return Err(EngineError::InvalidAction(
            "devour requires at least one target".to_string(),
        ));
    }

    let mut gained_defense = 0;
    let mut gained_damage = 0;
    for (i, target) in targets.iter().enumerate() {
        if *target == card_id {
            return Err(EngineError::InvalidAction(
                "a card cannot devour itself".to_string(),
            ));
        }
        if targets[..i].contains(target) {
            return Err(EngineError::InvalidAction(format!(
                "duplicate devour target {}",
                target
            )));
        }
        let victim = state
            .player(owner)
            .card_in_play(*target)
            .ok_or(EngineError::not_in_play(*target))?;
        gained_defense += victim.current.defense;
        gained_damage += victim.current.damage;
    }

    for target in targets {
        // Presence was validated above; a miss here would be a zone bug.
        let moved = zones::move_zone(state, *target, Zone::Play, Zone::Graveyard);
        debug_assert_eq!(moved, ZoneMove::Moved);
    }

    let (new_defense, new_damage) = {
        let Some(card) = state.card_in_play_mut(card_id) else {
            return Err(EngineError::not_in_play(card_id));
        };
        card.current.defense += gained_defense;
        card.current.damage += gained_damage;
        for ability in card.abilities.iter_mut() {
            if matches!(ability.kind, AbilityKind::DevourAndCombineStats) {
                ability.was_applied = true;
            }
        }
        (card.current.defense, card.current.damage)
    };

    state.push_outcome(ActionOutcome::DevouredAndCombined {
        instance_id: card_id,
        devoured: targets.to_vec(),
        new_defense,
        new_damage,
    });
    Ok(())
}

/// Damage a unit and its left/right board neighbors.
///
/// Neighbors are positional in the owner's play sequence, not id-based.
/// Every struck unit runs its own being-attacked and defense-change hooks,
/// and deaths resolve afterwards in board order. The whole ability is a
/// no-op when the owner has at most one card in play.
pub(crate) fn apply_adjacent_damage(
    state: &mut GameState,
    source_id: InstanceId,
    target_id: InstanceId,
    damage: i32,
) -> Result<(), EngineError> {
    let owner = state
        .owner_in_play(target_id)
        .ok_or(EngineError::not_in_play(target_id))?;

    let play = &state.player(owner).play;
    if play.len() <= 1 {
        return Ok(());
    }
    let idx = state
        .player(owner)
        .position_in(Zone::Play, target_id)
        .ok_or(EngineError::not_in_play(target_id))?;

    let play = &state.player(owner).play;
    let mut victims: Vec<InstanceId> = Vec::new();
    if idx > 0 {
        victims.push(play[idx - 1].instance_id);
    }
    victims.push(target_id);
    if idx + 1 < play.len() {
        victims.push(play[idx + 1].instance_id);
    }

    for victim in &victims {
        let old_defense = {
            let Some(card) = state.card_in_play_mut(*victim) else {
                continue;
            };
            let old = card.current.defense;
            card.current.defense -= damage;
            old
        };
        state.push_outcome(ActionOutcome::AdjacentDamage {
            source: source_id,
            struck: *victim,
            damage,
        });
        super::engine::on_being_attacked(state, *victim, source_id)?;
        super::engine::on_defense_change(state, *victim, old_defense, old_defense - damage)?;
    }

    for victim in &victims {
        crate::battle::combat::resolve_death_if_dead(state, *victim, Some(source_id), None)?;
    }
    Ok(())
}

/// Replace other same-faction friendly units with stronger library cards.
///
/// Each replacement keeps its board position but is a brand-new instance:
/// fresh id, the library card's stats as both prototype and current, fresh
/// abilities. The pick is the seeded permutation slot k for the k-th
/// replacement of this invocation; units with no stronger candidate are
/// left alone. The triggering ability deactivates afterward so it cannot
/// re-fire.
pub(crate) fn apply_replace_units(
    state: &mut GameState,
    library: &CardLibrary,
    card_id: InstanceId,
) -> Result<(), EngineError> {
    let owner = state
        .owner_in_play(card_id)
        .ok_or(EngineError::not_in_play(card_id))?;

    let faction = {
        let Some(card) = state.card_in_play(card_id) else {
            return Err(EngineError::not_in_play(card_id));
        };
        card.abilities.iter().find_map(|a| match a.kind {
            AbilityKind::ReplaceUnitsWithStrongerOnes { faction } if a.is_active => Some(faction),
            _ => None,
        })
    };
    let Some(faction) = faction else {
        return Ok(());
    };

    let victims: Vec<(usize, InstanceId, i32)> = state
        .player(owner)
        .play
        .iter()
        .enumerate()
        .filter(|(_, c)| c.instance_id != card_id && c.current.faction == faction)
        .map(|(pos, c)| (pos, c.instance_id, c.current.cost))
        .collect();

    let seed = state.random_seed;
    let mut slot = 0usize;
    for (pos, old_id, cost) in victims {
        let candidates = library.stronger_than(faction, cost);
        let Some(pick) = SelectionRng::pick_slot(seed, candidates.len(), slot) else {
            continue;
        };
        slot += 1;

        let proto = candidates[pick];
        let new_id = state.alloc_instance_id();
        let replacement = CardInstance::from_prototype(new_id, proto, owner);
        let new_key = proto.key;

        state.player_mut(owner).play.set(pos, replacement);
        state.push_outcome(ActionOutcome::UnitReplaced {
            old_instance: old_id,
            new_instance: new_id,
            new_key,
            position: pos,
        });
    }

    if let Some(card) = state.card_in_play_mut(card_id) {
        for ability in card.abilities.iter_mut() {
            if matches!(ability.kind, AbilityKind::ReplaceUnitsWithStrongerOnes { .. }) {
                ability.is_active = false;
            }
        }
    }
    Ok(())
}
