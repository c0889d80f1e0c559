//! Action outcomes: the append-only log of observable effects.
//!
//! Every mutation an ability produces is recorded as exactly one
//! `ActionOutcome`. Guarded no-ops record nothing. The log is never
//! rewritten; presentation and replay collaborators reconstruct animations
//! from it in order.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{CardKey, InstanceId, StatKind};

/// One observable effect produced by resolving an action or ability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A card's Defense or Damage changed by a stat-delta ability.
    StatChange {
        instance_id: InstanceId,
        stat: StatKind,
        old_value: i32,
        new_value: i32,
    },

    /// Rage switched on or off as defense crossed the prototype threshold.
    RageToggled {
        instance_id: InstanceId,
        enabled: bool,
        new_damage: i32,
    },

    /// A lethal attack restored the attacker's pre-attack defense.
    PriorityAttackRestore {
        instance_id: InstanceId,
        restored_defense: i32,
    },

    /// Extra damage landed on a Heavy target.
    HeavyBonusDamage {
        attacker: InstanceId,
        target: InstanceId,
        added_damage: i32,
    },

    /// A dying card re-entered play as a fresh instance.
    Reanimated {
        source: InstanceId,
        new_instance: InstanceId,
        defense: i32,
        damage: i32,
    },

    /// A card consumed friendly units and absorbed their stats.
    DevouredAndCombined {
        instance_id: InstanceId,
        devoured: Vec<InstanceId>,
        new_defense: i32,
        new_damage: i32,
    },

    /// A unit took splash damage from a strike on it or a board neighbor.
    AdjacentDamage {
        source: InstanceId,
        struck: InstanceId,
        damage: i32,
    },

    /// A board unit was replaced in place by a stronger library card.
    UnitReplaced {
        old_instance: InstanceId,
        new_instance: InstanceId,
        new_key: CardKey,
        position: usize,
    },

    /// An overlord took ability damage.
    OverlordDamaged {
        player: PlayerId,
        damage: i32,
        new_defense: i32,
    },
}

impl ActionOutcome {
    /// The card instance this outcome is primarily about, if any.
    #[must_use]
    pub fn subject(&self) -> Option<InstanceId> {
        match self {
            ActionOutcome::StatChange { instance_id, .. }
            | ActionOutcome::RageToggled { instance_id, .. }
            | ActionOutcome::PriorityAttackRestore { instance_id, .. }
            | ActionOutcome::DevouredAndCombined { instance_id, .. } => Some(*instance_id),
            ActionOutcome::HeavyBonusDamage { attacker, .. } => Some(*attacker),
            ActionOutcome::Reanimated { source, .. } => Some(*source),
            ActionOutcome::AdjacentDamage { struck, .. } => Some(*struck),
            ActionOutcome::UnitReplaced { old_instance, .. } => Some(*old_instance),
            ActionOutcome::OverlordDamaged { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject() {
        let outcome = ActionOutcome::RageToggled {
            instance_id: InstanceId(4),
            enabled: true,
            new_damage: 6,
        };
        assert_eq!(outcome.subject(), Some(InstanceId(4)));

        let outcome = ActionOutcome::OverlordDamaged {
            player: PlayerId::new(1),
            damage: 2,
            new_defense: 48,
        };
        assert_eq!(outcome.subject(), None);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = ActionOutcome::Reanimated {
            source: InstanceId(1),
            new_instance: InstanceId(9),
            defense: 3,
            damage: 2,
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: ActionOutcome = serde_json::from_str(&json).unwrap();

        assert_eq!(outcome, deserialized);
    }
}
