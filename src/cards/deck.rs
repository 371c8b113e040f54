//! Deck construction.
//!
//! A deck holds every face of the face set exactly twice. Dealing:
//!
//! 1. Validate the face set (non-empty, no duplicates)
//! 2. Duplicate each face into two cards
//! 3. Shuffle the 2N faces with a uniform permutation
//! 4. Number cards by dealt position
//!
//! ```
//! use pairs_engine::cards::{deal, FaceId};
//! use pairs_engine::core::GameRng;
//!
//! let faces = vec![FaceId::from("A"), FaceId::from("B")];
//! let deck = deal(&faces, &mut GameRng::new(7)).unwrap();
//!
//! assert_eq!(deck.len(), 4);
//! assert!(pairs_engine::cards::is_paired(&deck));
//! ```

use im::Vector;
use rustc_hash::{FxHashMap, FxHashSet};

use super::card::Card;
use super::face::FaceId;
use crate::core::entity::CardId;
use crate::core::error::{EngineError, EngineResult};
use crate::core::rng::GameRng;

/// Largest face set whose cards all get a `u32` [`CardId`].
pub const MAX_PAIRS: u64 = 1 << 31;

fn check_pair_count(pairs: u64) -> EngineResult<()> {
    if pairs == 0 {
        return Err(EngineError::InvalidConfiguration("face set is empty".into()));
    }
    if pairs > MAX_PAIRS {
        return Err(EngineError::InvalidConfiguration(format!(
            "face set has {pairs} faces, at most {MAX_PAIRS} are supported"
        )));
    }
    Ok(())
}

/// Check that a face set can be dealt.
pub fn validate_faces(faces: &[FaceId]) -> EngineResult<()> {
    check_pair_count(faces.len() as u64)?;

    let mut seen = FxHashSet::default();
    for face in faces {
        if !seen.insert(face) {
            return Err(EngineError::InvalidConfiguration(format!(
                "face '{face}' appears more than once"
            )));
        }
    }

    Ok(())
}

/// Deal a freshly shuffled deck with one pair per face.
///
/// The RNG is not touched when the face set is rejected.
pub fn deal(faces: &[FaceId], rng: &mut GameRng) -> EngineResult<Vector<Card>> {
    validate_faces(faces)?;
    Ok(shuffle_pairs(faces, rng))
}

/// Duplicate and shuffle an already validated face set.
pub(crate) fn shuffle_pairs(faces: &[FaceId], rng: &mut GameRng) -> Vector<Card> {
    let mut doubled: Vec<&FaceId> = faces.iter().chain(faces.iter()).collect();
    rng.shuffle(&mut doubled);

    doubled
        .into_iter()
        .enumerate()
        .map(|(pos, face)| Card::new(CardId::from_position(pos), face.clone()))
        .collect()
}

/// Check the pairing invariant: every face appears on exactly two cards.
#[must_use]
pub fn is_paired<'a>(cards: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut counts: FxHashMap<&FaceId, u32> = FxHashMap::default();
    for card in cards {
        *counts.entry(&card.face).or_insert(0) += 1;
    }
    counts.values().all(|&n| n == 2)
}
