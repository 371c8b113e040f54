//! # pairs-engine
//!
//! Game-state engine for a memory-matching (pairs) card game.
//!
//! A deck holding every face twice is shuffled face down. Each turn the
//! player turns over two cards: a pair stays face up, anything else is shown
//! and then turned back. Chained pairs score 1, 2, 4, 8, ... and every miss
//! costs a life. Running out of lives re-deals the table.
//!
//! ## Design Principles
//!
//! 1. **Engine owns state**: Only `GameEngine` mutates a `RoundState`; the
//!    presentation layer reads snapshots and sends selections.
//!
//! 2. **No clock**: A mismatch stays face up until the host calls
//!    `resolve_mismatch`. Animation timing lives outside the engine.
//!
//! 3. **Deterministic**: All shuffling goes through a seeded `GameRng`, so a
//!    seed and a sequence of calls replay exactly.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, errors, round state
//! - `cards`: Faces, cards, deck dealing
//! - `rules`: The engine, scoring, typed outcomes

pub mod core;
pub mod cards;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CardId,
    GameRng, GameRngState,
    EngineConfig, EngineConfigBuilder, DEFAULT_STARTING_LIVES,
    EngineError, EngineResult,
    RoundState, TurnKind, TurnRecord,
};

pub use crate::cards::{Card, FaceId, reference_faces, deal, is_paired};

pub use crate::rules::{
    GameEngine, ScoreBoard, award_for_streak,
    SelectOutcome, Rejection, Resolution, RoundStatus,
};
