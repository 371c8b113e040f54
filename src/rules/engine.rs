//! The game engine: sole owner and mutator of the round state.
//!
//! ## Turn flow
//!
//! - `select_card` on a face-down card opens a turn (first pick)
//! - A second `select_card` closes it as a match or a mismatch
//! - A match is committed immediately
//! - A mismatch stays face up until the host calls `resolve_mismatch`,
//!   which hides both cards, or re-deals when the last life is gone
//!
//! The engine has no clock. Display delays, win animations and the choice of
//! when to re-deal after a win all belong to the host.
//!
//! ```
//! use pairs_engine::{EngineConfig, FaceId, GameEngine, SelectOutcome};
//!
//! let mut engine = GameEngine::new(EngineConfig::new(["A"]), 42).unwrap();
//! let a = FaceId::from("A");
//! let ids: Vec<_> = engine.state().cards_with_face(&a).collect();
//!
//! engine.select_card(ids[0]).unwrap();
//! let outcome = engine.select_card(ids[1]).unwrap();
//!
//! assert!(matches!(outcome, SelectOutcome::Match { round_won: true, .. }));
//! assert_eq!(engine.state().score(), 1);
//! ```

use tracing::{debug, info};

use super::outcome::{Rejection, Resolution, RoundStatus, SelectOutcome};
use crate::cards::deck::{self, shuffle_pairs};
use crate::cards::{Card, FaceId};
use crate::core::config::EngineConfig;
use crate::core::entity::CardId;
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::{GameRng, GameRngState};
use crate::core::state::{RoundState, TurnKind, TurnRecord};

/// Memory-matching game engine.
///
/// Deterministic given its [`GameRng`]: the same seed and the same calls
/// deal the same decks and produce the same outcomes.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    rng: GameRng,
    state: RoundState,
}

impl GameEngine {
    /// Create an engine with a seeded RNG and deal the first round.
    pub fn new(config: EngineConfig, seed: u64) -> EngineResult<Self> {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an engine seeded from the operating system.
    pub fn from_entropy(config: EngineConfig) -> EngineResult<Self> {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an engine with the given shuffle source and deal the first round.
    pub fn with_rng(config: EngineConfig, mut rng: GameRng) -> EngineResult<Self> {
        config.validate()?;

        let deck = shuffle_pairs(&config.faces, &mut rng);
        let state = RoundState::new(1, deck, config.starting_lives);
        info!(
            round = 1,
            cards = state.deck.len(),
            lives = config.starting_lives,
            seed = rng.seed(),
            "dealt round"
        );

        Ok(Self { config, rng, state })
    }

    // === Queries ===

    /// Current round snapshot.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Active configuration. The face set is the one of the last `reset`.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// RNG checkpoint, for reproducing later deals.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.state.card(id)
    }

    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.state.is_face_up(id)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.state.is_won() {
            RoundStatus::Won
        } else if self.state.awaiting_resolution() {
            RoundStatus::AwaitingResolution
        } else {
            RoundStatus::InProgress
        }
    }

    /// Cards a `select_card` would act on right now.
    ///
    /// Empty while a mismatch awaits resolution or once the round is won.
    #[must_use]
    pub fn selectable_cards(&self) -> Vec<CardId> {
        if self.state.awaiting_resolution() {
            return vec![];
        }
        self.state
            .deck
            .iter()
            .map(|card| card.id)
            .filter(|&id| !self.state.is_face_up(id))
            .collect()
    }

    // === Round lifecycle ===

    /// Deal a new round with the given faces, one pair each.
    ///
    /// The face set replaces the configured one and is reused by implicit
    /// re-deals. On error the current round is left as it was.
    pub fn reset<I>(&mut self, faces: I) -> EngineResult<&RoundState>
    where
        I: IntoIterator,
        I::Item: Into<FaceId>,
    {
        let faces: Vec<FaceId> = faces.into_iter().map(Into::into).collect();
        let deck = deck::deal(&faces, &mut self.rng)?;
        self.config.faces = faces;
        self.start_round(deck);
        Ok(&self.state)
    }

    /// Deal a new round with the current face set.
    pub fn restart(&mut self) -> &RoundState {
        let deck = shuffle_pairs(&self.config.faces, &mut self.rng);
        self.start_round(deck);
        &self.state
    }

    fn start_round(&mut self, deck: im::Vector<Card>) {
        let round = self.state.round.saturating_add(1);
        self.state = RoundState::new(round, deck, self.config.starting_lives);
        info!(
            round,
            cards = self.state.deck.len(),
            lives = self.config.starting_lives,
            "dealt round"
        );
    }

    // === Turns ===

    /// Select a card.
    ///
    /// ## Errors
    ///
    /// - `UnknownCard` if the id is not in the current deck
    /// - `ResolutionPending` while a mismatch is still face up
    ///
    /// Matched cards and the pending first pick are rejected with a
    /// [`Rejection`] instead. Neither errors nor rejections change the round.
    pub fn select_card(&mut self, id: CardId) -> EngineResult<SelectOutcome> {
        let picked = self
            .state
            .card(id)
            .ok_or(EngineError::UnknownCard(id))?
            .clone();

        if self.state.awaiting_resolution() {
            debug!(card = %id, "selection rejected, mismatch pending");
            return Err(EngineError::ResolutionPending);
        }
        if self.state.is_matched(id) {
            debug!(card = %id, "selection rejected, already matched");
            return Ok(SelectOutcome::Rejected(Rejection::AlreadyMatched));
        }
        if self.state.is_revealed(id) {
            debug!(card = %id, "selection rejected, already revealed");
            return Ok(SelectOutcome::Rejected(Rejection::AlreadyRevealed));
        }

        let closes = self.state.pending_first_pick.map(|first| {
            let paired = self
                .state
                .card(first)
                .is_some_and(|first_card| first_card.pairs_with(&picked));
            (first, paired)
        });

        let attempt = self.state.attempts.saturating_add(1);
        self.state.attempts = attempt;
        let (kind, outcome) = match closes {
            None => self.open_turn(id),
            Some((first, true)) => self.apply_match(first, id),
            Some((first, false)) => self.apply_mismatch(first, id),
        };

        self.state.history.push_back(TurnRecord {
            attempt,
            card: id,
            kind,
        });

        Ok(outcome)
    }

    fn open_turn(&mut self, id: CardId) -> (TurnKind, SelectOutcome) {
        self.state.revealed.push(id);
        self.state.pending_first_pick = Some(id);
        debug!(card = %id, "first pick");
        (TurnKind::FirstPick, SelectOutcome::FirstPick { card: id })
    }

    fn apply_match(&mut self, first: CardId, second: CardId) -> (TurnKind, SelectOutcome) {
        let (board, awarded) = self.state.board.after_match();

        self.state.revealed.clear();
        self.state.matched.insert(first);
        self.state.matched.insert(second);
        self.state.board = board;
        self.state.pending_first_pick = None;

        let round_won = self.state.is_won();
        debug!(
            %first,
            %second,
            awarded,
            score = board.score,
            streak = board.streak,
            pairs = self.state.pairs_found(),
            "match"
        );
        if round_won {
            info!(
                round = self.state.round,
                score = board.score,
                attempts = self.state.attempts,
                "round won"
            );
        }

        let outcome = SelectOutcome::Match {
            first,
            second,
            awarded,
            round_won,
        };
        (TurnKind::Match, outcome)
    }

    fn apply_mismatch(&mut self, first: CardId, second: CardId) -> (TurnKind, SelectOutcome) {
        let board = self.state.board.after_mismatch();

        self.state.revealed.push(second);
        self.state.board = board;

        debug!(%first, %second, lives = board.lives, "mismatch");
        let outcome = SelectOutcome::Mismatch {
            first,
            second,
            lives_left: board.lives,
        };
        (TurnKind::Mismatch, outcome)
    }

    /// Turn a face-up mismatch back face down.
    ///
    /// When the mismatch used the last life the round is re-dealt with the
    /// current face set instead.
    pub fn resolve_mismatch(&mut self) -> Resolution {
        if !self.state.awaiting_resolution() {
            return Resolution::NothingPending;
        }

        if self.state.board.is_exhausted() {
            info!(
                round = self.state.round,
                score = self.state.board.score,
                "out of lives"
            );
            self.restart();
            return Resolution::RoundReset;
        }

        self.state.revealed.clear();
        self.state.pending_first_pick = None;
        debug!(lives = self.state.board.lives, "mismatch hidden");
        Resolution::Hidden
    }
}
