//! Engine configuration.
//!
//! Hosts build an `EngineConfig` once at startup. The defaults reproduce
//! the classic game: ten card faces, a sixty second round, a half-second
//! peek before a pair resolves, ten points per pair and a top-three
//! leaderboard.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Number of distinct card faces in the classic palette.
pub const DEFAULT_PALETTE_SIZE: usize = 10;

/// Round length in seconds.
pub const DEFAULT_ROUND_SECONDS: u32 = 60;

/// Delay between the second flip and its resolution.
pub const DEFAULT_PEEK_DELAY_MS: u64 = 500;

/// Points awarded per matched pair.
pub const DEFAULT_MATCH_SCORE: u32 = 10;

/// Number of leaderboard slots.
pub const DEFAULT_LEADERBOARD_CAPACITY: usize = 3;

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Distinct card faces available to the deck generator.
    pub palette_size: usize,

    /// Seconds on the round timer at game start.
    pub round_seconds: u32,

    /// Peek interval before a revealed pair is resolved.
    pub peek_delay_ms: u64,

    /// Score added for each matched pair.
    pub match_score: u32,

    /// Maximum leaderboard entries kept.
    pub leaderboard_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            palette_size: DEFAULT_PALETTE_SIZE,
            round_seconds: DEFAULT_ROUND_SECONDS,
            peek_delay_ms: DEFAULT_PEEK_DELAY_MS,
            match_score: DEFAULT_MATCH_SCORE,
            leaderboard_capacity: DEFAULT_LEADERBOARD_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Create the classic configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of card faces.
    #[must_use]
    pub fn with_palette_size(mut self, size: usize) -> Self {
        self.palette_size = size;
        self
    }

    /// Set the round length.
    #[must_use]
    pub fn with_round_seconds(mut self, seconds: u32) -> Self {
        self.round_seconds = seconds;
        self
    }

    /// Set the peek delay.
    #[must_use]
    pub fn with_peek_delay_ms(mut self, delay_ms: u64) -> Self {
        self.peek_delay_ms = delay_ms;
        self
    }

    /// Set the per-pair score.
    #[must_use]
    pub fn with_match_score(mut self, score: u32) -> Self {
        self.match_score = score;
        self
    }

    /// Set the leaderboard size.
    #[must_use]
    pub fn with_leaderboard_capacity(mut self, capacity: usize) -> Self {
        self.leaderboard_capacity = capacity;
        self
    }

    /// Highest level whose board the palette can fill with distinct pairs.
    ///
    /// Level `L` deals `L + 1` pairs, so the cap is `palette_size - 1`.
    #[must_use]
    pub fn max_level(&self) -> u32 {
        u32::try_from(self.palette_size.saturating_sub(1)).unwrap_or(u32::MAX)
    }

    /// Check the configuration can run a game.
    pub fn validate(&self) -> Result<()> {
        if self.palette_size < 2 {
            return Err(GameError::InvalidConfig(format!(
                "palette of {} faces cannot fill the first level",
                self.palette_size
            )));
        }
        if self.round_seconds == 0 {
            return Err(GameError::InvalidConfig("round length must be positive".into()));
        }
        if self.leaderboard_capacity == 0 {
            return Err(GameError::InvalidConfig("leaderboard needs at least one slot".into()));
        }
        Ok(())
    }
}
