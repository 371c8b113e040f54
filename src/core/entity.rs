//! Card identification.
//!
//! Every physical card dealt in a round has a unique `CardId`.
//!
//! ## ID Layout
//!
//! IDs are the card's position in the dealt deck: `0..deck_len`. They are
//! assigned *after* shuffling, so an id says nothing about the card's face.
//! Ids are only meaningful within the round that dealt them. Positions fit in
//! a `u32` because dealing rejects face sets above
//! [`MAX_PAIRS`](crate::cards::MAX_PAIRS).
//!
//! ```
//! use pairs_engine::core::CardId;
//!
//! let card = CardId::new(3);
//! assert_eq!(card.index(), 3);
//! assert_eq!(card.to_string(), "Card(3)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Create the ID for the card dealt at `position`.
    ///
    /// `position` must be below `2 * MAX_PAIRS`, which dealing guarantees.
    #[must_use]
    pub const fn from_position(position: usize) -> Self {
        Self(position as u32)
    }

    /// Position of this card in the dealt deck.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}
