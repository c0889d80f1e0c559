//! Card prototypes - static card data.
//!
//! A `CardPrototype` holds the immutable properties of a library card: its
//! base stats and the abilities it declares. Runtime card state (current
//! stats, ability flags, zone) lives in `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::abilities::{AbilityDefinition, AbilityKind, AbilityTrigger};

/// Identity of a library card: mould plus art/edition variant.
///
/// This identifies the "type" of card, not a specific instance in a match.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CardKey {
    /// The card mould (rules identity).
    pub mould_id: u32,
    /// Variant of the mould (art/edition). 0 is the standard printing.
    pub variant: u8,
}

impl CardKey {
    /// Create a new card key.
    #[must_use]
    pub const fn new(mould_id: u32, variant: u8) -> Self {
        Self { mould_id, variant }
    }

    /// The standard printing of a mould.
    #[must_use]
    pub const fn standard(mould_id: u32) -> Self {
        Self::new(mould_id, 0)
    }
}

impl std::fmt::Display for CardKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({}:{})", self.mould_id, self.variant)
    }
}

/// Card faction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Fire,
    Water,
    Earth,
    Air,
    Life,
    Toxic,
}

/// Creature weight class. Some abilities key off this (extra damage against
/// Heavy targets, for example).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreatureType {
    Light,
    Feral,
    Heavy,
}

/// Which combat stat an effect touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Defense,
    Damage,
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatKind::Defense => write!(f, "Defense"),
            StatKind::Damage => write!(f, "Damage"),
        }
    }
}

/// The combat stat block of a card.
///
/// A `CardInstance` carries two of these: the prototype snapshot (the
/// "restore to" baseline abilities reference) and the current values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardStats {
    /// Hit points. The card dies at 0.
    pub defense: i32,
    /// Attack value dealt in combat.
    pub damage: i32,
    /// Play cost.
    pub cost: i32,
    /// Faction.
    pub faction: Faction,
    /// Weight class.
    pub creature_type: CreatureType,
}

impl CardStats {
    /// Read a stat by kind.
    #[must_use]
    pub fn get(&self, stat: StatKind) -> i32 {
        match stat {
            StatKind::Defense => self.defense,
            StatKind::Damage => self.damage,
        }
    }

    /// Write a stat by kind.
    pub fn set(&mut self, stat: StatKind, value: i32) {
        match stat {
            StatKind::Defense => self.defense = value,
            StatKind::Damage => self.damage = value,
        }
    }
}

/// Static library card: base stats plus declared abilities.
///
/// ## Example
///
/// ```
/// use duelcore::cards::{CardKey, CardPrototype, CardStats, CreatureType, Faction};
/// use duelcore::abilities::AbilityKind;
///
/// let proto = CardPrototype::new(
///     CardKey::standard(7),
///     "Cinder Brute",
///     CardStats {
///         defense: 5,
///         damage: 2,
///         cost: 3,
///         faction: Faction::Fire,
///         creature_type: CreatureType::Heavy,
///     },
/// )
/// .with_ability(AbilityKind::Rage { added_damage: 2 });
///
/// assert_eq!(proto.abilities.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPrototype {
    /// Library identity.
    pub key: CardKey,

    /// Card name (for display/debugging).
    pub name: String,

    /// Base stats, cloned into every instance as its baseline.
    pub stats: CardStats,

    /// Abilities this card declares, in declaration order.
    pub abilities: Vec<AbilityDefinition>,
}

impl CardPrototype {
    /// Create a prototype with no abilities.
    #[must_use]
    pub fn new(key: CardKey, name: impl Into<String>, stats: CardStats) -> Self {
        Self {
            key,
            name: name.into(),
            stats,
            abilities: Vec::new(),
        }
    }

    /// Declare an ability with its default trigger (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, kind: AbilityKind) -> Self {
        self.abilities.push(AbilityDefinition::new(kind));
        self
    }

    /// Declare an ability with an explicit trigger (builder pattern).
    #[must_use]
    pub fn with_triggered_ability(mut self, kind: AbilityKind, trigger: AbilityTrigger) -> Self {
        self.abilities.push(AbilityDefinition { kind, trigger });
        self
    }
}
