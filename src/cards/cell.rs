//! Board cells.

use serde::{Deserialize, Serialize};

use super::identity::CardIdentity;

/// Visibility of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, waiting for its partner to be resolved.
    Revealed,
    /// Paired and permanently face up.
    Matched,
}

/// One position on the board.
///
/// The identity is fixed when the board is dealt; only the visibility
/// changes, and only through the match engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    identity: CardIdentity,
    pub(crate) visibility: Visibility,
}

impl Cell {
    /// A face-down cell.
    #[must_use]
    pub fn hidden(identity: CardIdentity) -> Self {
        Self {
            identity,
            visibility: Visibility::Hidden,
        }
    }

    #[must_use]
    pub fn identity(&self) -> CardIdentity {
        self.identity
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.visibility == Visibility::Matched
    }
}
