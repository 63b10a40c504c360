//! The board: an ordered row of cells made of exact pairs.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Visibility};
use super::identity::CardIdentity;
use crate::core::{GameError, Result};

/// Smallest legal board.
pub const MIN_BOARD_CARDS: usize = 4;

/// Rows and columns used to lay a board out as a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl GridShape {
    /// Layout for a board of `cards` cells.
    ///
    /// Known sizes use hand-picked layouts; anything else falls back to
    /// `floor(sqrt(n))` rows.
    #[must_use]
    pub fn for_cards(cards: usize) -> Self {
        let (rows, cols) = match cards {
            4 => (2, 2),
            6 => (2, 3),
            8 => (2, 4),
            10 => (2, 5),
            12 => (3, 4),
            14 => (2, 7),
            16 => (4, 4),
            18 => (3, 6),
            20 => (4, 5),
            0 => (0, 0),
            n => {
                let rows = isqrt(n).max(1);
                (rows, n.div_ceil(rows))
            }
        };
        Self { rows, cols }
    }

    /// Row and column of a cell index.
    #[must_use]
    pub fn position(&self, index: usize) -> (usize, usize) {
        if self.cols == 0 {
            return (0, 0);
        }
        (index / self.cols, index % self.cols)
    }
}

fn isqrt(n: usize) -> usize {
    (n as f64).sqrt() as usize
}

/// All cells for one level.
///
/// Invariant: even length of at least four, every identity appears
/// exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Build a face-down board from a dealt sequence of identities.
    pub fn from_identities(identities: Vec<CardIdentity>) -> Result<Self> {
        let len = identities.len();
        if len < MIN_BOARD_CARDS || len % 2 != 0 {
            return Err(GameError::InvalidBoard(format!(
                "{len} cards is not an even count of at least {MIN_BOARD_CARDS}"
            )));
        }

        let mut counts: FxHashMap<CardIdentity, usize> = FxHashMap::default();
        for id in &identities {
            *counts.entry(*id).or_default() += 1;
        }
        if let Some((id, count)) = counts.iter().find(|(_, &count)| count != 2) {
            return Err(GameError::InvalidBoard(format!(
                "{id} appears {count} times, expected exactly 2"
            )));
        }

        Ok(Self {
            cells: identities.into_iter().map(Cell::hidden).collect(),
        })
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a valid board; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cells.len() / 2
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True once every cell is matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Cell::is_matched)
    }

    /// Number of matched cells.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_matched()).count()
    }

    /// Grid layout for this board.
    #[must_use]
    pub fn shape(&self) -> GridShape {
        GridShape::for_cards(self.cells.len())
    }

    pub(crate) fn set_visibility(&mut self, index: usize, visibility: Visibility) {
        self.cells[index].visibility = visibility;
    }
}
