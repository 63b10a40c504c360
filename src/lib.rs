//! # flip-a-pair
//!
//! Game-state engine for a timed memory-matching card game.
//!
//! Cards are dealt face down in pairs. The player turns two over; a match
//! scores and stays up, a miss flips back after a short peek. Clearing the
//! board deals a bigger one at the next level. A 60-second clock runs
//! across levels, and when it hits zero the final score may earn a place
//! on a persistent top-3 leaderboard.
//!
//! ## Design Principles
//!
//! 1. **No clock, no UI**: The engine never sleeps or draws. Hosts feed it
//!    flips and one-second ticks and get `EngineEvent`s back.
//!
//! 2. **Deterministic**: All shuffling goes through a seeded `GameRng`, so
//!    a seed replays the same boards.
//!
//! 3. **Single owner**: One `GameController` owns all game state. Delayed
//!    work is addressed by `ResolutionTicket`s, which go stale on restart
//!    or game over.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, RNG
//! - `cards`: card identities, cells, boards and grid layout
//! - `deck`: per-level board generation
//! - `matching`: flip/resolve state machine for one board
//! - `timer`: the round clock
//! - `leaderboard`: top-N table and its JSON persistence
//! - `session`: the level/score controller and presentation snapshots
//! - `events`: what the engine reports to hosts
//! - `host`: virtual-clock scheduler, presenter trait, host loop

pub mod cards;
pub mod core;
pub mod deck;
pub mod events;
pub mod host;
pub mod leaderboard;
pub mod matching;
pub mod session;
pub mod timer;

// Re-export commonly used types
pub use crate::core::{EngineConfig, GameError, GameRng, Result};

pub use crate::cards::{Board, CardIdentity, Cell, GridShape, Palette, Visibility};

pub use crate::deck::DeckGenerator;

pub use crate::matching::{FlipOutcome, MatchEngine, MatchState, RejectReason, Resolution};

pub use crate::timer::{RoundTimer, TickOutcome};

pub use crate::leaderboard::{
    JsonFileStorage, Leaderboard, LeaderboardEntry, LeaderboardStorage, LeaderboardStore,
    MemoryStorage,
};

pub use crate::session::{
    BoardSnapshot, CellView, GameController, GamePhase, ResolutionTicket, StatusSnapshot,
};

pub use crate::events::EngineEvent;

pub use crate::host::{GameHost, Presenter, Scheduler};
