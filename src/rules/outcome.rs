//! Typed results of engine operations.

use serde::{Deserialize, Serialize};

use crate::core::entity::CardId;

/// Why a selection had no effect.
///
/// Rejections leave the round untouched and do not count as an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rejection {
    /// The card is already part of a found pair.
    AlreadyMatched,
    /// The card is already face up as this turn's first pick.
    AlreadyRevealed,
}

/// Result of [`GameEngine::select_card`](super::GameEngine::select_card).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// The card opened a new turn.
    FirstPick { card: CardId },
    /// The card completed a pair.
    Match {
        first: CardId,
        second: CardId,
        /// Points awarded for this match.
        awarded: u64,
        /// Every pair on the table is now found.
        round_won: bool,
    },
    /// The card did not pair with the first pick. Both stay face up until
    /// `resolve_mismatch` is called.
    Mismatch {
        first: CardId,
        second: CardId,
        lives_left: u32,
    },
    /// The selection was ignored.
    Rejected(Rejection),
}

impl SelectOutcome {
    /// The selection changed the round.
    #[must_use]
    pub fn is_effective(&self) -> bool {
        !matches!(self, SelectOutcome::Rejected(_))
    }
}

/// Result of [`GameEngine::resolve_mismatch`](super::GameEngine::resolve_mismatch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// The mismatched cards were turned back face down.
    Hidden,
    /// The mismatch used the last life; a fresh round was dealt.
    RoundReset,
    /// No mismatch was waiting; nothing changed.
    NothingPending,
}

/// Where the current round stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    /// Waiting for a selection.
    InProgress,
    /// A mismatch is face up; call `resolve_mismatch` before selecting again.
    AwaitingResolution,
    /// Every pair is found. The collaborator decides when to reset.
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_effective() {
        assert!(SelectOutcome::FirstPick { card: CardId::new(0) }.is_effective());
        assert!(!SelectOutcome::Rejected(Rejection::AlreadyMatched).is_effective());
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = SelectOutcome::Match {
            first: CardId::new(1),
            second: CardId::new(4),
            awarded: 2,
            round_won: false,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let back: SelectOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outcome);
    }
}
