//! Engine error type.
//!
//! Only contract violations, configuration problems and persistence
//! failures are errors. Rejected flips are ordinary outcomes and never
//! show up here.

use thiserror::Error;

/// Root error type for the game engine.
#[derive(Error, Debug)]
pub enum GameError {
    /// The level formula produced a board that is odd-sized or too small.
    #[error("level {level} yields an invalid board of {cards} cards")]
    InvalidLevel { level: u32, cards: usize },

    /// The palette cannot supply enough distinct faces for the board.
    #[error("palette has {available} card faces but {required} are needed")]
    InsufficientAssets { required: usize, available: usize },

    /// A hand-built board does not consist of exact pairs.
    #[error("invalid board: {0}")]
    InvalidBoard(String),

    /// `resolve()` was called with no pending pair.
    #[error("no pending pair to resolve")]
    InvalidResolution,

    /// Leaderboard names must contain something besides whitespace.
    #[error("leaderboard name must not be empty")]
    InvalidName,

    /// Persisted leaderboard could not be parsed.
    #[error("leaderboard state is corrupt: {0}")]
    CorruptState(String),

    /// The storage collaborator failed to read or write.
    #[error("leaderboard storage failed: {0}")]
    Storage(#[from] std::io::Error),

    /// Engine configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A score was submitted while a game is still running or already recorded.
    #[error("no finished game is waiting for a leaderboard submission")]
    SessionNotOver,

    /// The finished game's score does not earn a leaderboard place.
    #[error("score {score} does not qualify for the leaderboard")]
    NotAdmitted { score: u32 },
}

pub type Result<T> = std::result::Result<T, GameError>;
