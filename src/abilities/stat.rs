//! Stat-delta strategies: Rage, ChangeStat, the anti-Heavy bonus, and the
//! overlord strike.
//!
//! Each routine mutates the working state and records exactly one outcome
//! per mutation; guarded no-ops record nothing.

use crate::abilities::AbilityKind;
use crate::cards::{CreatureType, InstanceId, StatKind};
use crate::core::{ActionOutcome, GameState};
use crate::error::EngineError;

/// Evaluate the Rage toggle for a card whose defense just changed.
///
/// While the card sits below its prototype defense the bonus damage is in
/// force; at or above it, the bonus is reverted. `was_applied` makes both
/// directions idempotent under repeated defense-change notifications.
pub(crate) fn apply_rage(state: &mut GameState, card_id: InstanceId) -> Result<(), EngineError> {
    let mut toggles: Vec<ActionOutcome> = Vec::new();

    if let Some(card) = state.card_in_play_mut(card_id) {
        for idx in 0..card.abilities.len() {
            let ability = card.abilities[idx];
            if !ability.is_active {
                continue;
            }
            let AbilityKind::Rage { added_damage } = ability.kind else {
                continue;
            };

            let wounded = card.current.defense < card.prototype.defense;
            if wounded && !ability.was_applied {
                card.current.damage += added_damage;
                card.abilities[idx].was_applied = true;
                toggles.push(ActionOutcome::RageToggled {
                    instance_id: card_id,
                    enabled: true,
                    new_damage: card.current.damage,
                });
            } else if !wounded && ability.was_applied {
                card.current.damage -= added_damage;
                card.abilities[idx].was_applied = false;
                toggles.push(ActionOutcome::RageToggled {
                    instance_id: card_id,
                    enabled: false,
                    new_damage: card.current.damage,
                });
            }
        }
    }

    for outcome in toggles {
        state.push_outcome(outcome);
    }
    Ok(())
}

/// Apply the attacker's anti-Heavy bonus to a target being attacked.
///
/// No effect and no outcome unless the target's creature type is Heavy.
pub(crate) fn apply_heavy_bonus(
    state: &mut GameState,
    attacker_id: InstanceId,
    target_id: InstanceId,
) -> Result<(), EngineError> {
    let bonuses: Vec<i32> = match state.card_in_play(attacker_id) {
        Some(attacker) => attacker
            .abilities
            .iter()
            .filter(|a| a.is_active)
            .filter_map(|a| match a.kind {
                AbilityKind::AdditionalDamageToHeavyInAttack { added_damage } => Some(added_damage),
                _ => None,
            })
            .collect(),
        None => return Ok(()),
    };
    if bonuses.is_empty() {
        return Ok(());
    }

    let mut landed: Vec<ActionOutcome> = Vec::new();
    if let Some(target) = state.card_in_play_mut(target_id) {
        if target.current.creature_type != CreatureType::Heavy {
            return Ok(());
        }
        for added_damage in bonuses {
            target.current.defense -= added_damage;
            landed.push(ActionOutcome::HeavyBonusDamage {
                attacker: attacker_id,
                target: target_id,
                added_damage,
            });
        }
    }

    for outcome in landed {
        state.push_outcome(outcome);
    }
    Ok(())
}

/// Apply the attacker's post-attack stat deltas.
///
/// Defense deltas route back through the defense-change notification so a
/// Rage toggle can re-enter on the attacker's own stat change.
pub(crate) fn apply_change_stat(
    state: &mut GameState,
    attacker_id: InstanceId,
) -> Result<(), EngineError> {
    let deltas: Vec<(StatKind, i32)> = match state.card_in_play(attacker_id) {
        Some(attacker) => attacker
            .abilities
            .iter()
            .filter(|a| a.is_active)
            .filter_map(|a| match a.kind {
                AbilityKind::ChangeStat { stat, value } => Some((stat, value)),
                _ => None,
            })
            .collect(),
        None => return Ok(()),
    };

    for (stat, value) in deltas {
        let Some(card) = state.card_in_play_mut(attacker_id) else {
            return Ok(());
        };
        let old_value = card.current.get(stat);
        let new_value = old_value + value;
        card.current.set(stat, new_value);

        state.push_outcome(ActionOutcome::StatChange {
            instance_id: attacker_id,
            stat,
            old_value,
            new_value,
        });

        if stat == StatKind::Defense {
            super::engine::on_defense_change(state, attacker_id, old_value, new_value)?;
        }
    }
    Ok(())
}

/// Strike the owning player's overlord once when the card enters play.
pub(crate) fn apply_attack_overlord(
    state: &mut GameState,
    card_id: InstanceId,
    damage: i32,
) -> Result<(), EngineError> {
    let owner = state
        .owner_in_play(card_id)
        .ok_or(EngineError::NoOwner {
            instance_id: card_id,
        })?;

    let already = {
        let Some(card) = state.card_in_play(card_id) else {
            return Ok(());
        };
        card.abilities
            .iter()
            .any(|a| matches!(a.kind, AbilityKind::AttackOverlord { .. }) && a.was_applied)
    };
    if already {
        return Ok(());
    }

    if let Some(card) = state.card_in_play_mut(card_id) {
        for ability in card
            .abilities
            .iter_mut()
            .filter(|a| matches!(a.kind, AbilityKind::AttackOverlord { .. }))
        {
            ability.was_applied = true;
        }
    }

    let player = state.player_mut(owner);
    player.defense -= damage;
    let new_defense = player.defense;
    state.push_outcome(ActionOutcome::OverlordDamaged {
        player: owner,
        damage,
        new_defense,
    });

    if new_defense <= 0 {
        state.set_winner(owner.opponent());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::AbilityTrigger;
    use crate::cards::{CardInstance, CardKey, CardPrototype, CardStats, Faction};
    use crate::core::PlayerId;

    fn put_in_play(state: &mut GameState, proto: &CardPrototype, owner: PlayerId) -> InstanceId {
        let id = state.alloc_instance_id();
        let card = CardInstance::from_prototype(id, proto, owner);
        state.player_mut(owner).play.push_back(card);
        id
    }

    fn stats(defense: i32, damage: i32, creature_type: CreatureType) -> CardStats {
        CardStats {
            defense,
            damage,
            cost: 2,
            faction: Faction::Fire,
            creature_type,
        }
    }

    #[test]
    fn test_rage_toggles_once_per_crossing() {
        let mut state = GameState::new(42);
        let proto = CardPrototype::new(
            CardKey::standard(1),
            "Rager",
            stats(5, 3, CreatureType::Feral),
        )
        .with_ability(AbilityKind::Rage { added_damage: 2 });
        let id = put_in_play(&mut state, &proto, PlayerId::new(0));

        // Drop below the threshold: bonus applies once.
        state.card_in_play_mut(id).unwrap().current.defense = 3;
        apply_rage(&mut state, id).unwrap();
        assert_eq!(state.card_in_play(id).unwrap().current.damage, 5);

        // A second notification while still wounded is a no-op.
        state.card_in_play_mut(id).unwrap().current.defense = 2;
        apply_rage(&mut state, id).unwrap();
        assert_eq!(state.card_in_play(id).unwrap().current.damage, 5);

        // Healed back to the baseline: bonus reverts.
        state.card_in_play_mut(id).unwrap().current.defense = 5;
        apply_rage(&mut state, id).unwrap();
        assert_eq!(state.card_in_play(id).unwrap().current.damage, 3);

        // Two toggle outcomes total: on and off.
        let toggles: Vec<bool> = state
            .outcomes
            .iter()
            .filter_map(|o| match o {
                ActionOutcome::RageToggled { enabled, .. } => Some(*enabled),
                _ => None,
            })
            .collect();
        assert_eq!(toggles, vec![true, false]);
    }

    #[test]
    fn test_heavy_bonus_only_against_heavy() {
        let mut state = GameState::new(42);
        let slayer = CardPrototype::new(
            CardKey::standard(1),
            "Slayer",
            stats(5, 2, CreatureType::Light),
        )
        .with_ability(AbilityKind::AdditionalDamageToHeavyInAttack { added_damage: 2 });
        let heavy = CardPrototype::new(
            CardKey::standard(2),
            "Bulwark",
            stats(5, 1, CreatureType::Heavy),
        );
        let feral = CardPrototype::new(
            CardKey::standard(3),
            "Prowler",
            stats(5, 1, CreatureType::Feral),
        );

        let slayer_id = put_in_play(&mut state, &slayer, PlayerId::new(0));
        let heavy_id = put_in_play(&mut state, &heavy, PlayerId::new(1));
        let feral_id = put_in_play(&mut state, &feral, PlayerId::new(1));

        apply_heavy_bonus(&mut state, slayer_id, heavy_id).unwrap();
        assert_eq!(state.card_in_play(heavy_id).unwrap().current.defense, 3);
        assert_eq!(state.outcomes.len(), 1);

        // Feral target: no effect, no outcome.
        apply_heavy_bonus(&mut state, slayer_id, feral_id).unwrap();
        assert_eq!(state.card_in_play(feral_id).unwrap().current.defense, 5);
        assert_eq!(state.outcomes.len(), 1);
    }

    #[test]
    fn test_change_stat_emits_old_and_new() {
        let mut state = GameState::new(42);
        let proto = CardPrototype::new(
            CardKey::standard(1),
            "Fader",
            stats(4, 5, CreatureType::Light),
        )
        .with_ability(AbilityKind::ChangeStat {
            stat: StatKind::Damage,
            value: -2,
        });
        let id = put_in_play(&mut state, &proto, PlayerId::new(0));

        apply_change_stat(&mut state, id).unwrap();

        assert_eq!(state.card_in_play(id).unwrap().current.damage, 3);
        assert_eq!(
            state.outcomes.back(),
            Some(&ActionOutcome::StatChange {
                instance_id: id,
                stat: StatKind::Damage,
                old_value: 5,
                new_value: 3,
            })
        );
    }

    #[test]
    fn test_change_stat_defense_reenters_rage() {
        let mut state = GameState::new(42);
        let proto = CardPrototype::new(
            CardKey::standard(1),
            "Berserk",
            stats(5, 3, CreatureType::Feral),
        )
        .with_ability(AbilityKind::Rage { added_damage: 2 })
        .with_triggered_ability(
            AbilityKind::ChangeStat {
                stat: StatKind::Defense,
                value: -1,
            },
            AbilityTrigger::Attack,
        );
        let id = put_in_play(&mut state, &proto, PlayerId::new(0));

        apply_change_stat(&mut state, id).unwrap();

        // The self-inflicted defense loss wounded the card, so Rage fired.
        let card = state.card_in_play(id).unwrap();
        assert_eq!(card.current.defense, 4);
        assert_eq!(card.current.damage, 5);
        assert!(state
            .outcomes
            .iter()
            .any(|o| matches!(o, ActionOutcome::RageToggled { enabled: true, .. })));
    }

    #[test]
    fn test_attack_overlord_fires_once() {
        let mut state = GameState::new(42);
        let proto = CardPrototype::new(
            CardKey::standard(1),
            "Zealot",
            stats(2, 1, CreatureType::Light),
        )
        .with_ability(AbilityKind::AttackOverlord { damage: 2 });
        let id = put_in_play(&mut state, &proto, PlayerId::new(0));

        apply_attack_overlord(&mut state, id, 2).unwrap();
        assert_eq!(state.player(PlayerId::new(0)).defense, 48);

        // Guarded: a second application is a no-op with no outcome.
        apply_attack_overlord(&mut state, id, 2).unwrap();
        assert_eq!(state.player(PlayerId::new(0)).defense, 48);
        assert_eq!(state.outcomes.len(), 1);
    }

    #[test]
    fn test_attack_overlord_can_end_the_match() {
        let mut state = GameState::new(42);
        state.player_mut(PlayerId::new(0)).defense = 2;
        let proto = CardPrototype::new(
            CardKey::standard(1),
            "Martyr",
            stats(2, 1, CreatureType::Light),
        )
        .with_ability(AbilityKind::AttackOverlord { damage: 3 });
        let id = put_in_play(&mut state, &proto, PlayerId::new(0));

        apply_attack_overlord(&mut state, id, 3).unwrap();

        assert!(state.is_ended);
        assert_eq!(state.winner, Some(PlayerId::new(1)));
    }
}
