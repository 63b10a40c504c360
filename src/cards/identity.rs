//! Card faces and the palette they are drawn from.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// Opaque identifier for a card face.
///
/// Two cells with the same identity form a matching pair. The engine
/// never interprets the value; hosts map it to artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardIdentity(pub u16);

impl CardIdentity {
    /// Create a new card identity.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for CardIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Face({})", self.0)
    }
}

/// The fixed set of card faces a deck can use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    faces: Vec<CardIdentity>,
}

impl Palette {
    /// Palette of `size` faces numbered `0..size`.
    pub fn with_size(size: usize) -> Self {
        let size = size.min(usize::from(u16::MAX) + 1);
        Self {
            faces: (0..size).map(|i| CardIdentity::new(i as u16)).collect(),
        }
    }

    /// Build a palette from explicit faces.
    ///
    /// Duplicate faces would let the generator deal four-of-a-kind, so
    /// they are rejected.
    pub fn from_faces(faces: Vec<CardIdentity>) -> Result<Self> {
        let mut seen = FxHashSet::default();
        if let Some(dup) = faces.iter().find(|face| !seen.insert(**face)) {
            return Err(GameError::InvalidConfig(format!("palette repeats {dup}")));
        }
        Ok(Self { faces })
    }

    /// Number of distinct faces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// True when the palette has no faces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// All faces in palette order.
    #[must_use]
    pub fn faces(&self) -> &[CardIdentity] {
        &self.faces
    }
}
