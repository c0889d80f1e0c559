//! Match phases: a finite-state machine expressed as data.
//!
//! The phase gate is a static table of admissible action kinds per phase,
//! consulted by the action processor before any dispatch. Transitions are
//! synchronous functions of (phase, action); there is no task or channel
//! anywhere in the engine.

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, PlayerId};

/// The coarse phase a match is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Opening hand exchange. Each seat may mulligan once, then passes.
    Mulligan,
    /// Normal alternating play.
    InProgress,
    /// Terminal; nothing is admissible.
    Ended,
}

/// Admissible action kinds per phase.
const ALLOWED: &[(MatchPhase, &[ActionKind])] = &[
    (
        MatchPhase::Mulligan,
        &[
            ActionKind::Mulligan,
            ActionKind::EndTurn,
            ActionKind::LeaveMatch,
        ],
    ),
    (
        MatchPhase::InProgress,
        &[
            ActionKind::CardPlay,
            ActionKind::CardAttack,
            ActionKind::CardAbilityUsed,
            ActionKind::EndTurn,
            ActionKind::DrawCard,
            ActionKind::LeaveMatch,
        ],
    ),
    (MatchPhase::Ended, &[]),
];

impl MatchPhase {
    /// Is this action kind admissible in this phase?
    #[must_use]
    pub fn allows(self, kind: ActionKind) -> bool {
        ALLOWED
            .iter()
            .find(|(phase, _)| *phase == self)
            .is_some_and(|(_, kinds)| kinds.contains(&kind))
    }

    /// The phase after an action resolves.
    ///
    /// The mulligan window closes when the second seat passes; every other
    /// transition (into `Ended`) is driven by the win-condition checks, not
    /// by this table.
    #[must_use]
    pub fn transition(self, kind: ActionKind, acting_player: PlayerId) -> MatchPhase {
        match (self, kind) {
            (MatchPhase::Mulligan, ActionKind::EndTurn)
                if acting_player == PlayerId::new(1) =>
            {
                MatchPhase::InProgress
            }
            (phase, _) => phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mulligan_gate() {
        assert!(MatchPhase::Mulligan.allows(ActionKind::Mulligan));
        assert!(MatchPhase::Mulligan.allows(ActionKind::EndTurn));
        assert!(!MatchPhase::Mulligan.allows(ActionKind::CardPlay));
        assert!(!MatchPhase::Mulligan.allows(ActionKind::CardAttack));
        assert!(!MatchPhase::Mulligan.allows(ActionKind::DrawCard));
    }

    #[test]
    fn test_in_progress_gate() {
        assert!(MatchPhase::InProgress.allows(ActionKind::CardPlay));
        assert!(MatchPhase::InProgress.allows(ActionKind::CardAttack));
        assert!(!MatchPhase::InProgress.allows(ActionKind::Mulligan));
    }

    #[test]
    fn test_ended_admits_nothing() {
        assert!(!MatchPhase::Ended.allows(ActionKind::EndTurn));
        assert!(!MatchPhase::Ended.allows(ActionKind::LeaveMatch));
    }

    #[test]
    fn test_mulligan_closes_after_second_pass() {
        let phase = MatchPhase::Mulligan;

        // First seat passing keeps the window open.
        let phase = phase.transition(ActionKind::EndTurn, PlayerId::new(0));
        assert_eq!(phase, MatchPhase::Mulligan);

        // Second seat passing closes it.
        let phase = phase.transition(ActionKind::EndTurn, PlayerId::new(1));
        assert_eq!(phase, MatchPhase::InProgress);
    }

    #[test]
    fn test_mulligan_itself_does_not_transition() {
        let phase = MatchPhase::Mulligan.transition(ActionKind::Mulligan, PlayerId::new(1));
        assert_eq!(phase, MatchPhase::Mulligan);
    }
}
