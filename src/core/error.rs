//! Engine error taxonomy.
//!
//! Every error is local to a single call and recoverable: the engine's state
//! is unchanged whenever an operation returns `Err`.
//!
//! Selecting a card that is already matched, or re-selecting the pending
//! first pick, is not an error. Those are reported as
//! [`Rejection`](crate::rules::Rejection)s inside `Ok`.

use thiserror::Error;

use super::entity::CardId;

/// Errors returned by [`GameEngine`](crate::rules::GameEngine) operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The face set or starting lives cannot produce a playable round.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The id does not name a card in the current deck.
    #[error("unknown card: {0}")]
    UnknownCard(CardId),

    /// Two mismatched cards are face up and `resolve_mismatch` has not run yet.
    #[error("a mismatch is awaiting resolution")]
    ResolutionPending,
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
