//! Flip legality and pair resolution for one board.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Board, Visibility};
use crate::core::config::DEFAULT_MATCH_SCORE;
use crate::core::{GameError, Result};

/// Face-up, unresolved cell indices. Never more than two.
pub type FlipSelection = SmallVec<[usize; 2]>;

/// Per-board flip state, derived from the selection size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Nothing face up.
    Idle,
    /// One card face up.
    OneFlipped,
    /// Two cards face up, waiting for `resolve()`.
    PendingResolution,
}

/// Why a flip was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Index is past the end of the board.
    OutOfBounds,
    /// Cell is already part of a matched pair.
    AlreadyMatched,
    /// Cell is already face up in the current selection.
    AlreadyRevealed,
    /// Two cards are showing and have not been resolved yet.
    PendingResolution,
    /// No game is running.
    NotPlaying,
}

/// Result of a flip request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Flip refused; nothing changed.
    Rejected(RejectReason),
    /// First card of a pair turned face up.
    Revealed,
    /// Second card turned face up; the pair awaits resolution.
    PairPending([usize; 2]),
}

impl FlipOutcome {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Result of resolving a pending pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub indices: [usize; 2],
    pub matched: bool,
    /// Points earned; zero on a mismatch.
    pub score_delta: u32,
    /// Every cell on the board is now matched.
    pub board_cleared: bool,
}

/// Holds one board and resolves flips on it.
///
/// ```text
/// Idle --flip--> OneFlipped --flip--> PendingResolution --resolve--> Idle
/// ```
#[derive(Clone, Debug)]
pub struct MatchEngine {
    board: Board,
    selection: FlipSelection,
    match_score: u32,
}

impl MatchEngine {
    pub fn new(board: Board) -> Self {
        Self::with_match_score(board, DEFAULT_MATCH_SCORE)
    }

    pub fn with_match_score(board: Board, match_score: u32) -> Self {
        Self {
            board,
            selection: SmallVec::new(),
            match_score,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    #[must_use]
    pub fn state(&self) -> MatchState {
        match self.selection.len() {
            0 => MatchState::Idle,
            1 => MatchState::OneFlipped,
            _ => MatchState::PendingResolution,
        }
    }

    /// Turn a card face up if the rules allow it.
    pub fn flip(&mut self, index: usize) -> FlipOutcome {
        if self.selection.len() >= 2 {
            return FlipOutcome::Rejected(RejectReason::PendingResolution);
        }
        let Some(cell) = self.board.cell(index) else {
            return FlipOutcome::Rejected(RejectReason::OutOfBounds);
        };
        match cell.visibility() {
            Visibility::Matched => return FlipOutcome::Rejected(RejectReason::AlreadyMatched),
            Visibility::Revealed => return FlipOutcome::Rejected(RejectReason::AlreadyRevealed),
            Visibility::Hidden => {}
        }

        self.board.set_visibility(index, Visibility::Revealed);
        self.selection.push(index);
        debug!("flipped cell {index}, selection {:?}", self.selection);

        match self.selection.as_slice() {
            &[first, second] => FlipOutcome::PairPending([first, second]),
            _ => FlipOutcome::Revealed,
        }
    }

    /// Compare the pending pair and settle it.
    ///
    /// Matches stay face up and score; mismatches turn back over.
    pub fn resolve(&mut self) -> Result<Resolution> {
        let &[a, b] = self.selection.as_slice() else {
            return Err(GameError::InvalidResolution);
        };

        let matched = self.board.cells()[a].identity() == self.board.cells()[b].identity();
        let next = if matched {
            Visibility::Matched
        } else {
            Visibility::Hidden
        };
        self.board.set_visibility(a, next);
        self.board.set_visibility(b, next);
        self.selection.clear();

        let resolution = Resolution {
            indices: [a, b],
            matched,
            score_delta: if matched { self.match_score } else { 0 },
            board_cleared: self.board.is_cleared(),
        };
        debug!("resolved {:?}", resolution);
        Ok(resolution)
    }

    /// Drop any face-up, unresolved cards without scoring them.
    ///
    /// Returns the indices that were turned back over.
    pub fn abandon_selection(&mut self) -> FlipSelection {
        let dropped = std::mem::take(&mut self.selection);
        for &index in &dropped {
            self.board.set_visibility(index, Visibility::Hidden);
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardIdentity;

    fn engine(raw: &[u16]) -> MatchEngine {
        let ids = raw.iter().copied().map(CardIdentity::new).collect();
        MatchEngine::new(Board::from_identities(ids).unwrap())
    }

    #[test]
    fn test_first_flip_reveals() {
        let mut engine = engine(&[1, 1, 2, 2]);

        assert_eq!(engine.flip(0), FlipOutcome::Revealed);
        assert_eq!(engine.state(), MatchState::OneFlipped);
        assert_eq!(engine.board().cells()[0].visibility(), Visibility::Revealed);
    }

    #[test]
    fn test_same_cell_twice_is_rejected() {
        let mut engine = engine(&[1, 1, 2, 2]);
        engine.flip(0);

        assert_eq!(engine.flip(0), FlipOutcome::Rejected(RejectReason::AlreadyRevealed));
        assert_eq!(engine.selection(), &[0]);
    }

    #[test]
    fn test_third_flip_rejected_while_pending() {
        let mut engine = engine(&[1, 2, 1, 2]);
        engine.flip(0);
        assert_eq!(engine.flip(1), FlipOutcome::PairPending([0, 1]));
        assert_eq!(engine.state(), MatchState::PendingResolution);

        assert_eq!(engine.flip(2), FlipOutcome::Rejected(RejectReason::PendingResolution));
        assert!(engine.board().cells()[2].is_hidden());
        assert_eq!(engine.selection(), &[0, 1]);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut engine = engine(&[1, 1, 2, 2]);
        let outcome = engine.flip(4);
        assert_eq!(outcome, FlipOutcome::Rejected(RejectReason::OutOfBounds));
        assert!(!outcome.is_accepted());
        assert_eq!(engine.state(), MatchState::Idle);
    }

    #[test]
    fn test_resolve_match() {
        let mut engine = engine(&[1, 1, 2, 2]);
        engine.flip(0);
        engine.flip(1);

        let resolution = engine.resolve().unwrap();
        assert!(resolution.matched);
        assert_eq!(resolution.score_delta, 10);
        assert!(!resolution.board_cleared);
        assert!(engine.board().cells()[0].is_matched());
        assert!(engine.board().cells()[1].is_matched());
        assert_eq!(engine.board().matched_count(), 2);
        assert_eq!(engine.state(), MatchState::Idle);
    }

    #[test]
    fn test_resolve_mismatch_hides_both() {
        let mut engine = engine(&[1, 2, 1, 2]);
        engine.flip(0);
        engine.flip(1);

        let resolution = engine.resolve().unwrap();
        assert!(!resolution.matched);
        assert_eq!(resolution.score_delta, 0);
        assert!(engine.board().cells()[0].is_hidden());
        assert!(engine.board().cells()[1].is_hidden());
    }

    #[test]
    fn test_matched_cell_cannot_be_flipped_again() {
        let mut engine = engine(&[1, 1, 2, 2]);
        engine.flip(0);
        engine.flip(1);
        engine.resolve().unwrap();

        assert_eq!(engine.flip(1), FlipOutcome::Rejected(RejectReason::AlreadyMatched));
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn test_clearing_the_board() {
        let mut engine = engine(&[1, 1, 2, 2]);
        engine.flip(0);
        engine.flip(1);
        engine.resolve().unwrap();
        engine.flip(2);
        engine.flip(3);

        let resolution = engine.resolve().unwrap();
        assert!(resolution.board_cleared);
        assert!(engine.board().is_cleared());
    }

    #[test]
    fn test_resolve_outside_pending_is_error() {
        let mut engine = engine(&[1, 1, 2, 2]);
        assert!(matches!(engine.resolve(), Err(GameError::InvalidResolution)));

        engine.flip(0);
        assert!(matches!(engine.resolve(), Err(GameError::InvalidResolution)));
    }

    #[test]
    fn test_custom_match_score() {
        let ids = [1, 1, 2, 2].into_iter().map(CardIdentity::new).collect();
        let mut engine = MatchEngine::with_match_score(Board::from_identities(ids).unwrap(), 25);
        engine.flip(0);
        engine.flip(1);
        assert_eq!(engine.resolve().unwrap().score_delta, 25);
    }

    #[test]
    fn test_abandon_selection() {
        let mut engine = engine(&[1, 2, 1, 2]);
        engine.flip(0);
        engine.flip(1);

        let dropped = engine.abandon_selection();
        assert_eq!(dropped.as_slice(), &[0, 1]);
        assert_eq!(engine.state(), MatchState::Idle);
        assert!(engine.board().cells().iter().all(|c| c.is_hidden()));
    }
}
