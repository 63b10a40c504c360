//! Events reported to the presentation layer.
//!
//! Every controller operation returns the events it produced, in the
//! order they happened. Hosts render from snapshots and use events for
//! feedback (sounds, toasts, animations).

use serde::{Deserialize, Serialize};

use crate::leaderboard::LeaderboardEntry;
use crate::matching::RejectReason;
use crate::session::ResolutionTicket;

/// Something the host may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A new game began at `level` with a board of `cards` cells.
    GameStarted { level: u32, cards: usize },

    /// The card at this index turned face up.
    FlipAccepted(usize),

    /// The flip was ignored.
    FlipRejected { index: usize, reason: RejectReason },

    /// A pair is showing; call `resolve_pending(ticket)` after `delay_ms`.
    ResolutionScheduled { ticket: ResolutionTicket, delay_ms: u64 },

    /// The pair matched and scored.
    MatchFound { indices: [usize; 2], score_delta: u32 },

    /// The pair did not match and turned back over.
    NoMatch { indices: [usize; 2] },

    /// Every pair on the board was found; a board for `next_level` was dealt.
    BoardCleared { next_level: u32 },

    /// One second passed.
    TimerTick { remaining: u32 },

    /// The round clock ran out.
    TimerExpired,

    /// The session ended with this score.
    GameOver { score: u32 },

    /// The leaderboard changed.
    LeaderboardUpdated(Vec<LeaderboardEntry>),

    /// The leaderboard could not be saved; the in-memory copy is still current.
    PersistenceFailed { reason: String },
}

impl EngineEvent {
    /// Does this event end the game?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Self::GameOver { .. })
    }
}
