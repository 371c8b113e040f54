//! Card faces.
//!
//! A face is the printed value of a card. Two cards match exactly when their
//! faces are equal. The engine treats faces as opaque labels; the
//! presentation layer maps them to artwork.

use serde::{Deserialize, Serialize};

/// Printed value of a card. Decides which two cards form a pair.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceId(String);

impl FaceId {
    /// Create a face from any label.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The face's label.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FaceId {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for FaceId {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Labels of the six faces in the standard table layout.
pub const REFERENCE_FACE_LABELS: [&str; 6] = ["2C", "2", "J", "K", "3C", "3"];

/// The standard six-face set.
#[must_use]
pub fn reference_faces() -> Vec<FaceId> {
    REFERENCE_FACE_LABELS.iter().copied().map(FaceId::from).collect()
}
