//! Turn resolution.
//!
//! `GameEngine` owns the round and applies the game's rules:
//! - First and second picks, match and mismatch detection
//! - Streak scoring via `ScoreBoard`
//! - Life depletion and forced re-deal
//! - Win detection (reported, never acted on)

pub mod engine;
pub mod outcome;
pub mod scoring;

pub use engine::GameEngine;
pub use outcome::{Rejection, Resolution, RoundStatus, SelectOutcome};
pub use scoring::{award_for_streak, ScoreBoard};
