//! Core engine types: card ids, RNG, configuration, errors, round state.
//!
//! These are the building blocks the rules layer drives. Nothing here knows
//! how a turn is resolved.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;
pub mod state;

pub use entity::CardId;
pub use rng::{GameRng, GameRngState};
pub use config::{EngineConfig, EngineConfigBuilder, DEFAULT_STARTING_LIVES};
pub use error::{EngineError, EngineResult};
pub use state::{RoundState, TurnKind, TurnRecord};
