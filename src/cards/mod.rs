//! Card system: faces, cards and deck dealing.
//!
//! ## Key Types
//!
//! - `FaceId`: Printed value; equal faces pair up
//! - `Card`: A dealt card (id + face)
//! - `deal`: Pair duplication and uniform shuffle

pub mod face;
pub mod card;
pub mod deck;

pub use face::{reference_faces, FaceId, REFERENCE_FACE_LABELS};
pub use card::Card;
pub use deck::{deal, is_paired, validate_faces, MAX_PAIRS};
