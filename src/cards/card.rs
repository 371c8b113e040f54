//! Physical cards on the table.

use serde::{Deserialize, Serialize};

use super::face::FaceId;
use crate::core::entity::CardId;

/// A card dealt into a round. Immutable once dealt.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id within the round (dealt position).
    pub id: CardId,
    /// Face deciding what this card matches.
    pub face: FaceId,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, face: FaceId) -> Self {
        Self { id, face }
    }

    /// Check whether this card and `other` form a pair.
    ///
    /// A card never pairs with itself.
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.id != other.id && self.face == other.face
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_with() {
        let a1 = Card::new(CardId::new(0), FaceId::from("A"));
        let a2 = Card::new(CardId::new(3), FaceId::from("A"));
        let b = Card::new(CardId::new(1), FaceId::from("B"));

        assert!(a1.pairs_with(&a2));
        assert!(a2.pairs_with(&a1));
        assert!(!a1.pairs_with(&b));
        assert!(!a1.pairs_with(&a1));
    }
}
