//! Persistent top-score list.
//!
//! ## Key Types
//!
//! - `LeaderboardEntry`: `{ name, score }` row
//! - `Leaderboard`: Bounded list, highest first, ties in submission order
//! - `LeaderboardStorage`: Load/save contract for the serialized list
//! - `LeaderboardStore`: A leaderboard plus its storage, persisted on submit
//!
//! The on-disk format is a pretty-printed JSON array of entries.

pub mod board;
pub mod storage;
pub mod store;

pub use board::{Leaderboard, LeaderboardEntry};
pub use storage::{JsonFileStorage, LeaderboardStorage, MemoryStorage};
pub use store::LeaderboardStore;
