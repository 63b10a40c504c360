//! Bounded, sorted high-score list.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::{GameError, Result};

/// One leaderboard row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

impl LeaderboardEntry {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// Top-N scores, highest first.
///
/// Equal scores keep the order they were submitted in.
///
/// ## Example
///
/// ```
/// use flip_a_pair::leaderboard::Leaderboard;
///
/// let mut board = Leaderboard::new(3);
/// board.insert("ann", 40).unwrap();
/// board.insert("bo", 50).unwrap();
/// assert_eq!(board.entries()[0].name, "bo");
/// assert!(board.admits(10));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    capacity: usize,
}

impl Leaderboard {
    /// Empty leaderboard holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build from existing rows, sorting and trimming if needed.
    ///
    /// Names are trimmed of surrounding whitespace.
    pub fn from_entries(mut entries: Vec<LeaderboardEntry>, capacity: usize) -> Self {
        for entry in &mut entries {
            let trimmed = entry.name.trim();
            if trimmed.len() != entry.name.len() {
                entry.name = trimmed.to_owned();
            }
        }
        let sorted = entries.windows(2).all(|w| w[0].score >= w[1].score);
        if !sorted {
            warn!("leaderboard entries out of order, re-sorting");
            sort_descending(&mut entries);
        }
        if entries.len() > capacity {
            warn!(
                "leaderboard has {} entries, keeping the top {capacity}",
                entries.len()
            );
            entries.truncate(capacity);
        }
        Self { entries, capacity }
    }

    /// Parse the persisted JSON array.
    ///
    /// A row whose name is blank after trimming makes the whole file corrupt.
    pub fn from_json(text: &str, capacity: usize) -> Result<Self> {
        let entries: Vec<LeaderboardEntry> =
            serde_json::from_str(text).map_err(|e| GameError::CorruptState(e.to_string()))?;
        if let Some(row) = entries.iter().position(|e| e.name.trim().is_empty()) {
            return Err(GameError::CorruptState(format!("entry {row} has a blank name")));
        }
        Ok(Self::from_entries(entries, capacity))
    }

    /// Serialize as a pretty-printed JSON array with two-space indent.
    ///
    /// Non-ASCII names are written as raw UTF-8, not `\uXXXX` escapes. A
    /// file written with escapes loads fine but is rewritten unescaped on
    /// the next save.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.entries)
            .map_err(|e| GameError::CorruptState(e.to_string()))
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lowest score currently listed.
    #[must_use]
    pub fn lowest(&self) -> Option<u32> {
        self.entries.last().map(|e| e.score)
    }

    /// Would `score` earn a place?
    ///
    /// Always while there is a free slot; otherwise only by strictly
    /// beating the lowest entry. Tying it is not enough.
    #[must_use]
    pub fn admits(&self, score: u32) -> bool {
        if self.entries.len() < self.capacity {
            return true;
        }
        self.lowest().is_some_and(|lowest| score > lowest)
    }

    /// Insert a score, keep the list sorted and bounded.
    ///
    /// The name is trimmed and must not be empty. Returns the 0-based rank
    /// the entry landed at, or `None` if it did not make the cut.
    pub fn insert(&mut self, name: &str, score: u32) -> Result<Option<usize>> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::InvalidName);
        }

        // Earlier entries with an equal score stay ahead of this one.
        let rank = self.entries.iter().filter(|e| e.score >= score).count();
        self.entries.push(LeaderboardEntry::new(name, score));
        sort_descending(&mut self.entries);
        self.entries.truncate(self.capacity);

        Ok((rank < self.capacity).then_some(rank))
    }
}

fn sort_descending(entries: &mut [LeaderboardEntry]) {
    // sort_by is stable, which preserves submission order among ties.
    entries.sort_by(|a, b| b.score.cmp(&a.score));
}
