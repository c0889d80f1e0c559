//! Ability instances - per-card runtime ability state.

use serde::{Deserialize, Serialize};

use super::kind::{AbilityDefinition, AbilityKind, AbilityTrigger};
use crate::cards::InstanceId;

/// Runtime state of one declared ability on one card instance.
///
/// Created when the card is instantiated from its prototype and mutated
/// only by its own application routine. The shared flags make guarded
/// abilities idempotent: `was_applied` for toggles and one-shots,
/// `reanimated_into` to consume Reanimate exactly once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardAbilityInstance {
    /// Which ability this is, with its parameters.
    pub kind: AbilityKind,

    /// The event this instance listens on.
    pub trigger: AbilityTrigger,

    /// Deactivated abilities are never considered again.
    pub is_active: bool,

    /// Set while a toggle/one-shot effect is in force.
    pub was_applied: bool,

    /// For Reanimate: the replacement instance, once consumed.
    pub reanimated_into: Option<InstanceId>,
}

impl CardAbilityInstance {
    /// Create a fresh instance with the kind's default trigger.
    #[must_use]
    pub fn new(kind: AbilityKind) -> Self {
        Self {
            trigger: kind.default_trigger(),
            kind,
            is_active: true,
            was_applied: false,
            reanimated_into: None,
        }
    }

    /// Create a fresh instance from a prototype declaration.
    #[must_use]
    pub fn from_definition(def: &AbilityDefinition) -> Self {
        Self {
            kind: def.kind,
            trigger: def.trigger,
            is_active: true,
            was_applied: false,
            reanimated_into: None,
        }
    }
}
