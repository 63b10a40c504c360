//! Match engine: flip legality and pair resolution.
//!
//! The engine owns the board for one level. Flips are checked against
//! cell visibility and the current selection; a second flip parks the
//! pair in `PendingResolution` until the caller invokes `resolve()`
//! after the peek delay. No flip is accepted while a pair is pending.

pub mod engine;

pub use engine::{FlipOutcome, FlipSelection, MatchEngine, MatchState, RejectReason, Resolution};
