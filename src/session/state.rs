//! Per-game state owned by the controller.

use serde::{Deserialize, Serialize};

use crate::matching::MatchEngine;
use crate::timer::RoundTimer;

/// Where the controller is in a game's lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// Flips and ticks are being accepted.
    Playing,
    /// The clock ran out; waiting for leaderboard submission or restart.
    GameOver,
}

impl GamePhase {
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Handle for one scheduled pair resolution.
///
/// `epoch` identifies the game the ticket was issued in; `sequence`
/// orders tickets within it. A ticket is honoured at most once, and
/// never after a restart or game over.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResolutionTicket {
    pub epoch: u64,
    pub sequence: u64,
}

/// Score, level, clock and board for one game.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(crate) score: u32,
    pub(crate) level: u32,
    pub(crate) timer: RoundTimer,
    pub(crate) engine: MatchEngine,
}

impl GameSession {
    pub(crate) fn new(engine: MatchEngine, round_seconds: u32) -> Self {
        let mut timer = RoundTimer::new();
        timer.start(round_seconds);
        Self {
            score: 0,
            level: 1,
            timer,
            engine,
        }
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.timer.remaining()
    }
}
