//! Round state: the authoritative snapshot of one round.
//!
//! ## RoundState
//!
//! Everything a presentation layer needs to draw the table:
//! - The dealt deck (fixed for the round)
//! - Face-up unmatched cards and permanently matched cards
//! - Attempts, score, streak, lives
//! - The pending first pick of the current turn
//! - The round's turn history
//!
//! Uses `im` persistent data structures, so cloning a snapshot is O(1).
//! Only [`GameEngine`](crate::rules::GameEngine) mutates a `RoundState`.

use im::{OrdSet, Vector};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::CardId;
use crate::cards::{Card, FaceId};
use crate::rules::scoring::ScoreBoard;

/// What an effective selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnKind {
    /// Opened a turn.
    FirstPick,
    /// Closed a turn with a pair.
    Match,
    /// Closed a turn without a pair.
    Mismatch,
}

/// One effective selection in a round's history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Attempt number this selection consumed (1-based).
    pub attempt: u32,
    /// Card selected.
    pub card: CardId,
    /// Result of the selection.
    pub kind: TurnKind,
}

/// Snapshot of a round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Rounds dealt by this engine so far, this one included.
    pub(crate) round: u32,
    pub(crate) deck: Vector<Card>,
    /// At most two ids: a pending first pick, or a mismatch awaiting resolution.
    pub(crate) revealed: SmallVec<[CardId; 2]>,
    pub(crate) matched: OrdSet<CardId>,
    pub(crate) attempts: u32,
    pub(crate) board: ScoreBoard,
    pub(crate) pending_first_pick: Option<CardId>,
    pub(crate) history: Vector<TurnRecord>,
}

impl RoundState {
    /// A freshly dealt round.
    #[must_use]
    pub(crate) fn new(round: u32, deck: Vector<Card>, lives: u32) -> Self {
        Self {
            round,
            deck,
            revealed: SmallVec::new(),
            matched: OrdSet::new(),
            attempts: 0,
            board: ScoreBoard::new(lives),
            pending_first_pick: None,
            history: Vector::new(),
        }
    }

    // === Table ===

    /// 1-based number of this round within the engine's lifetime.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The dealt cards, in table order.
    #[must_use]
    pub fn deck(&self) -> &Vector<Card> {
        &self.deck
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.deck.get(id.index())
    }

    /// Face of a card, if the id is in the deck.
    #[must_use]
    pub fn face_of(&self, id: CardId) -> Option<&FaceId> {
        self.card(id).map(|card| &card.face)
    }

    /// Ids of the two cards showing `face`.
    pub fn cards_with_face<'a>(&'a self, face: &'a FaceId) -> impl Iterator<Item = CardId> + 'a {
        self.deck.iter().filter(move |c| &c.face == face).map(|c| c.id)
    }

    // === Card visibility ===

    /// Face-up cards that are not matched yet.
    #[must_use]
    pub fn revealed(&self) -> &[CardId] {
        &self.revealed
    }

    /// Cards matched this round.
    #[must_use]
    pub fn matched(&self) -> &OrdSet<CardId> {
        &self.matched
    }

    #[must_use]
    pub fn is_revealed(&self, id: CardId) -> bool {
        self.revealed.contains(&id)
    }

    #[must_use]
    pub fn is_matched(&self, id: CardId) -> bool {
        self.matched.contains(&id)
    }

    /// Whether the card should be drawn face up.
    #[must_use]
    pub fn is_face_up(&self, id: CardId) -> bool {
        self.is_revealed(id) || self.is_matched(id)
    }

    /// The unresolved first pick of the current turn.
    #[must_use]
    pub fn pending_first_pick(&self) -> Option<CardId> {
        self.pending_first_pick
    }

    /// Two mismatched cards are face up, waiting for `resolve_mismatch`.
    #[must_use]
    pub fn awaiting_resolution(&self) -> bool {
        self.revealed.len() == 2
    }

    // === Counters ===

    /// Effective selections made this round.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.board.score
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.board.streak
    }

    #[must_use]
    pub fn lives(&self) -> u32 {
        self.board.lives
    }

    /// Score, streak and lives together.
    #[must_use]
    pub fn board(&self) -> ScoreBoard {
        self.board
    }

    /// Pairs found so far.
    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.matched.len() / 2
    }

    /// Pairs still face down.
    #[must_use]
    pub fn pairs_remaining(&self) -> usize {
        (self.deck.len() - self.matched.len()) / 2
    }

    /// Every card in the deck is matched.
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.deck.is_empty() && self.matched.len() == self.deck.len()
    }

    // === History ===

    /// Effective selections of this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }
}
