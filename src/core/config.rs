//! Engine configuration.
//!
//! The only tunables are the face set (one pair per face) and the number of
//! lives a round starts with. Both are plain data so a host can load them
//! however it likes; the engine never reads files or environment variables.
//!
//! ```
//! use pairs_engine::core::EngineConfig;
//!
//! let config = EngineConfig::builder()
//!     .face("A")
//!     .face("B")
//!     .starting_lives(10)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.pair_count(), 2);
//! assert_eq!(config.deck_size(), 4);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{EngineError, EngineResult};
use crate::cards::deck::validate_faces;
use crate::cards::face::{reference_faces, FaceId};

/// Lives a round starts with in the standard game.
pub const DEFAULT_STARTING_LIVES: u32 = 25;

/// Configuration for a [`GameEngine`](crate::rules::GameEngine).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Distinct faces, each dealt as exactly one pair.
    pub faces: Vec<FaceId>,

    /// Lives at the start of every round.
    #[serde(default = "default_starting_lives")]
    pub starting_lives: u32,
}

fn default_starting_lives() -> u32 {
    DEFAULT_STARTING_LIVES
}

impl Default for EngineConfig {
    /// The standard table: six faces, 25 lives.
    fn default() -> Self {
        Self {
            faces: reference_faces(),
            starting_lives: DEFAULT_STARTING_LIVES,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the given faces and default lives.
    pub fn new(faces: impl IntoIterator<Item = impl Into<FaceId>>) -> Self {
        Self {
            faces: faces.into_iter().map(Into::into).collect(),
            starting_lives: DEFAULT_STARTING_LIVES,
        }
    }

    /// Start building a configuration from scratch.
    #[must_use]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Number of pairs dealt per round.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of cards dealt per round.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.faces.len() * 2
    }

    /// Check the configuration can produce a playable round.
    pub fn validate(&self) -> EngineResult<()> {
        validate_faces(&self.faces)?;
        if self.starting_lives == 0 {
            return Err(EngineError::InvalidConfiguration(
                "starting lives must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`EngineConfig`].
#[derive(Clone, Debug)]
pub struct EngineConfigBuilder {
    faces: Vec<FaceId>,
    starting_lives: u32,
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self {
            faces: Vec::new(),
            starting_lives: DEFAULT_STARTING_LIVES,
        }
    }
}

impl EngineConfigBuilder {
    /// Replace the face set.
    #[must_use]
    pub fn faces(mut self, faces: impl IntoIterator<Item = impl Into<FaceId>>) -> Self {
        self.faces = faces.into_iter().map(Into::into).collect();
        self
    }

    /// Add one face.
    #[must_use]
    pub fn face(mut self, face: impl Into<FaceId>) -> Self {
        self.faces.push(face.into());
        self
    }

    #[must_use]
    pub fn starting_lives(mut self, lives: u32) -> Self {
        self.starting_lives = lives;
        self
    }

    /// Validate and build.
    pub fn build(self) -> EngineResult<EngineConfig> {
        let config = EngineConfig {
            faces: self.faces,
            starting_lives: self.starting_lives,
        };
        config.validate()?;
        Ok(config)
    }
}
