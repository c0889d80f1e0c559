//! Ability kinds and triggers.
//!
//! `AbilityKind` is a closed tagged union: every ability the engine knows
//! how to apply is a variant here, and the ability engine matches on it
//! exhaustively, so a new kind cannot be added without a handler.

use serde::{Deserialize, Serialize};

use crate::cards::{Faction, StatKind};

/// The event that causes an ability instance to be considered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityTrigger {
    /// When the card enters play.
    Entry,
    /// When the card attacks.
    Attack,
    /// When the card dies.
    Death,
    /// When the card's defense changes.
    GotDamage,
    /// Always available (explicit use).
    Permanent,
}

/// Every ability kind the engine resolves, with its parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Bonus damage while wounded below the prototype defense.
    Rage { added_damage: i32 },

    /// A lethal attack costs the attacker nothing: defense is restored to
    /// its pre-attack value.
    PriorityAttack,

    /// Extra damage when the attack target is a Heavy creature.
    AdditionalDamageToHeavyInAttack { added_damage: i32 },

    /// Signed stat delta applied to the card after it attacks.
    ChangeStat { stat: StatKind, value: i32 },

    /// On death, return to play as a fresh instance with the configured
    /// stats; the replacement cannot reanimate again.
    Reanimate { defense: i32, damage: i32 },

    /// Consume friendly units and absorb their defense and damage.
    DevourAndCombineStats,

    /// Damage a unit and its left/right board neighbors.
    DealDamageToThisAndAdjacentUnits { damage: i32 },

    /// Replace other friendly units of a faction with stronger library
    /// cards, picked deterministically from the match seed.
    ReplaceUnitsWithStrongerOnes { faction: Faction },

    /// Damage the owning player's overlord once, on entry.
    AttackOverlord { damage: i32 },
}

impl AbilityKind {
    /// The trigger this kind listens on when a card declares it without an
    /// explicit override.
    #[must_use]
    pub fn default_trigger(&self) -> AbilityTrigger {
        match self {
            AbilityKind::Rage { .. } => AbilityTrigger::GotDamage,
            AbilityKind::PriorityAttack => AbilityTrigger::Attack,
            AbilityKind::AdditionalDamageToHeavyInAttack { .. } => AbilityTrigger::Attack,
            AbilityKind::ChangeStat { .. } => AbilityTrigger::Attack,
            AbilityKind::Reanimate { .. } => AbilityTrigger::Death,
            AbilityKind::DevourAndCombineStats => AbilityTrigger::Permanent,
            AbilityKind::DealDamageToThisAndAdjacentUnits { .. } => AbilityTrigger::Entry,
            AbilityKind::ReplaceUnitsWithStrongerOnes { .. } => AbilityTrigger::Entry,
            AbilityKind::AttackOverlord { .. } => AbilityTrigger::Entry,
        }
    }

    /// Stable name for logs and debugging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AbilityKind::Rage { .. } => "Rage",
            AbilityKind::PriorityAttack => "PriorityAttack",
            AbilityKind::AdditionalDamageToHeavyInAttack { .. } => {
                "AdditionalDamageToHeavyInAttack"
            }
            AbilityKind::ChangeStat { .. } => "ChangeStat",
            AbilityKind::Reanimate { .. } => "Reanimate",
            AbilityKind::DevourAndCombineStats => "DevourAndCombineStats",
            AbilityKind::DealDamageToThisAndAdjacentUnits { .. } => {
                "DealDamageToThisAndAdjacentUnits"
            }
            AbilityKind::ReplaceUnitsWithStrongerOnes { .. } => "ReplaceUnitsWithStrongerOnes",
            AbilityKind::AttackOverlord { .. } => "AttackOverlord",
        }
    }
}

/// A declared ability on a card prototype: kind plus trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityDefinition {
    pub kind: AbilityKind,
    pub trigger: AbilityTrigger,
}

impl AbilityDefinition {
    /// Declare an ability with its default trigger.
    #[must_use]
    pub fn new(kind: AbilityKind) -> Self {
        Self {
            trigger: kind.default_trigger(),
            kind,
        }
    }
}
