//! Engine error taxonomy.
//!
//! Every failure surfaced by the engine is one of these variants. Errors
//! propagate synchronously to the action processor's caller; the engine
//! performs no local recovery or retry, and a failed action commits nothing.

use serde::{Deserialize, Serialize};

use crate::cards::InstanceId;
use crate::core::PlayerId;
use crate::zones::Zone;

/// Errors returned while validating or resolving a player action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum EngineError {
    /// A player acted out of turn.
    #[error("player {actual} acted out of turn (current player is {expected})")]
    InvalidPlayer { expected: PlayerId, actual: PlayerId },

    /// The action is unrecognized or structurally malformed.
    #[error("invalid action: {0}")]
    InvalidAction(String),

    /// A referenced card instance is absent from the expected zone.
    #[error("card {instance_id} not found in {zone}")]
    CardNotFound { instance_id: InstanceId, zone: Zone },

    /// An ability's target card has no resolvable owning player.
    #[error("card {instance_id} has no resolvable owner")]
    NoOwner { instance_id: InstanceId },

    /// The state does not admit the action (e.g. the match has ended).
    #[error("state constraint violated: {0}")]
    StateConstraint(String),
}

impl EngineError {
    /// Shorthand for the common "not found in play" case.
    #[must_use]
    pub fn not_in_play(instance_id: InstanceId) -> Self {
        Self::CardNotFound {
            instance_id,
            zone: Zone::Play,
        }
    }

    /// Shorthand for the "match already ended" constraint.
    #[must_use]
    pub fn match_ended() -> Self {
        Self::StateConstraint("match has ended, no further actions accepted".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::InvalidPlayer {
            expected: PlayerId::new(0),
            actual: PlayerId::new(1),
        };
        assert_eq!(
            err.to_string(),
            "player Player 1 acted out of turn (current player is Player 0)"
        );

        let err = EngineError::not_in_play(InstanceId(7));
        assert_eq!(err.to_string(), "card Instance(7) not found in Play");
    }

    #[test]
    fn test_error_serialization() {
        let err = EngineError::NoOwner {
            instance_id: InstanceId(3),
        };
        let json = serde_json::to_string(&err).unwrap();
        let deserialized: EngineError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }
}
