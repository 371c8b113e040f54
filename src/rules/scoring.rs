//! Score, streak and lives as one value.
//!
//! `ScoreBoard` is `Copy` and every transition returns a new board, so the
//! engine commits score and streak together in a single assignment and no
//! caller can observe one updated without the other.
//!
//! ## Scoring
//!
//! A match awards 1 point when the streak is 0, otherwise `2^streak`, then
//! the streak grows by one. Consecutive matches therefore award
//! 1, 2, 4, 8, 16, ... A mismatch zeroes the streak and costs one life.
//!
//! ```
//! use pairs_engine::rules::ScoreBoard;
//!
//! let board = ScoreBoard::new(25);
//! let (board, a) = board.after_match();
//! let (board, b) = board.after_match();
//! let (board, c) = board.after_match();
//!
//! assert_eq!((a, b, c), (1, 2, 4));
//! assert_eq!(board.score, 7);
//! assert_eq!(board.streak, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Points awarded for a match made while `streak` matches are already chained.
#[must_use]
pub fn award_for_streak(streak: u32) -> u64 {
    match streak {
        0 => 1,
        s => 1u64.checked_shl(s).unwrap_or(u64::MAX),
    }
}

/// Running score, streak and remaining lives for a round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Accumulated points.
    pub score: u64,
    /// Consecutive matches without a mismatch in between.
    pub streak: u32,
    /// Lives left; each mismatch costs one.
    pub lives: u32,
}

impl ScoreBoard {
    /// A fresh board for a new round.
    #[must_use]
    pub const fn new(lives: u32) -> Self {
        Self {
            score: 0,
            streak: 0,
            lives,
        }
    }

    /// Board after a successful match, with the points awarded.
    #[must_use]
    pub fn after_match(self) -> (Self, u64) {
        let awarded = award_for_streak(self.streak);
        let next = Self {
            score: self.score.saturating_add(awarded),
            streak: self.streak.saturating_add(1),
            lives: self.lives,
        };
        (next, awarded)
    }

    /// Board after a mismatch.
    #[must_use]
    pub fn after_mismatch(self) -> Self {
        Self {
            score: self.score,
            streak: 0,
            lives: self.lives.saturating_sub(1),
        }
    }

    /// No lives left; the round must be re-dealt.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.lives == 0
    }
}
