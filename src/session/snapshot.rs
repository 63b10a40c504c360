//! Read-only views for the presentation layer.
//!
//! Snapshots never carry the face of a hidden card.

use serde::{Deserialize, Serialize};

use super::state::GamePhase;
use crate::cards::{Board, CardIdentity, GridShape, Visibility};

/// What the player can see at one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Revealed(CardIdentity),
    Matched(CardIdentity),
}

/// Visible board state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub shape: GridShape,
    pub cells: Vec<CellView>,
}

impl BoardSnapshot {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let cells = board
            .cells()
            .iter()
            .map(|cell| match cell.visibility() {
                Visibility::Hidden => CellView::Hidden,
                Visibility::Revealed => CellView::Revealed(cell.identity()),
                Visibility::Matched => CellView::Matched(cell.identity()),
            })
            .collect();
        Self {
            shape: board.shape(),
            cells,
        }
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|c| matches!(c, CellView::Hidden)).count()
    }
}

/// Score line shown above the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub score: u32,
    pub level: u32,
    pub time_remaining: u32,
    pub phase: GamePhase,
}
