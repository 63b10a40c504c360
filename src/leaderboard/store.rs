//! Leaderboard bound to its storage.

use log::{info, warn};

use super::board::Leaderboard;
use super::storage::LeaderboardStorage;
use crate::core::{GameError, Result};

/// A `Leaderboard` that persists itself after every submission.
#[derive(Debug)]
pub struct LeaderboardStore<S> {
    board: Leaderboard,
    storage: S,
}

impl<S: LeaderboardStorage> LeaderboardStore<S> {
    /// Load strictly: unreadable or unparsable state is an error.
    pub fn load(storage: S, capacity: usize) -> Result<Self> {
        let board = match storage.load()? {
            Some(text) => Leaderboard::from_json(&text, capacity)?,
            None => Leaderboard::new(capacity),
        };
        Ok(Self { board, storage })
    }

    /// Load, treating any failure as "no leaderboard yet".
    pub fn open(storage: S, capacity: usize) -> Self {
        let board = match storage.load() {
            Ok(Some(text)) => Leaderboard::from_json(&text, capacity).unwrap_or_else(|e| {
                warn!("ignoring unreadable leaderboard: {e}");
                Leaderboard::new(capacity)
            }),
            Ok(None) => Leaderboard::new(capacity),
            Err(e) => {
                warn!("leaderboard storage unavailable, starting empty: {e}");
                Leaderboard::new(capacity)
            }
        };
        Self { board, storage }
    }

    #[must_use]
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.board
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn admits(&self, score: u32) -> bool {
        self.board.admits(score)
    }

    /// Record a score and persist.
    ///
    /// A blank name fails before anything changes. A storage failure is
    /// returned after the in-memory list has been updated; the in-memory
    /// list stays authoritative for the rest of the run.
    pub fn submit(&mut self, name: &str, score: u32) -> Result<Option<usize>> {
        let rank = self.board.insert(name, score)?;
        info!("leaderboard submission {:?} scored {score}, rank {rank:?}", name.trim());
        self.persist()?;
        Ok(rank)
    }

    /// Write the current list through the storage collaborator.
    pub fn persist(&mut self) -> Result<()> {
        let text = self.board.to_json()?;
        self.storage.save(&text).map_err(GameError::from)
    }
}
