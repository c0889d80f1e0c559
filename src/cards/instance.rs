//! Card instances - runtime card state.
//!
//! A `CardInstance` is one concrete card in one match. It carries two stat
//! blocks: the immutable prototype snapshot taken at instantiation (the
//! baseline abilities restore to) and the current, mutable values combat
//! and abilities act on.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{CardPrototype, CardStats};
use super::CardKey;
use crate::abilities::{AbilityKind, AbilityTrigger, CardAbilityInstance};
use crate::core::PlayerId;

/// Unique identifier of a card instance within one match.
///
/// Assigned once at instantiation and never reused; the allocator on the
/// match state is monotonically increasing.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

/// One concrete card in one match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique, immutable instance identity.
    pub instance_id: InstanceId,

    /// Which library card this instance was minted from.
    pub key: CardKey,

    /// Immutable base-stat snapshot, cloned at instantiation.
    pub prototype: CardStats,

    /// Current mutable stats.
    pub current: CardStats,

    /// Ability state, one entry per ability the prototype declares,
    /// in declaration order.
    pub abilities: SmallVec<[CardAbilityInstance; 2]>,

    /// Owning seat.
    pub owner: PlayerId,
}

impl CardInstance {
    /// Instantiate a card from a library prototype.
    #[must_use]
    pub fn from_prototype(instance_id: InstanceId, proto: &CardPrototype, owner: PlayerId) -> Self {
        Self {
            instance_id,
            key: proto.key,
            prototype: proto.stats,
            current: proto.stats,
            abilities: proto
                .abilities
                .iter()
                .map(CardAbilityInstance::from_definition)
                .collect(),
            owner,
        }
    }

    /// Is this card at or below zero defense?
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.current.defense <= 0
    }

    /// Iterate active abilities with the given trigger.
    pub fn active_abilities(
        &self,
        trigger: AbilityTrigger,
    ) -> impl Iterator<Item = &CardAbilityInstance> {
        self.abilities
            .iter()
            .filter(move |a| a.is_active && a.trigger == trigger)
    }

    /// Find the first ability whose kind matches a predicate.
    #[must_use]
    pub fn find_ability(
        &self,
        mut pred: impl FnMut(&AbilityKind) -> bool,
    ) -> Option<&CardAbilityInstance> {
        self.abilities.iter().find(|a| pred(&a.kind))
    }

    /// Find the first ability whose kind matches a predicate, mutably.
    pub fn find_ability_mut(
        &mut self,
        mut pred: impl FnMut(&AbilityKind) -> bool,
    ) -> Option<&mut CardAbilityInstance> {
        self.abilities.iter_mut().find(|a| pred(&a.kind))
    }
}
