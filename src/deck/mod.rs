//! Deck generation.
//!
//! A level `L` board has `2L + 2` cards: `L + 1` distinct faces, each
//! dealt twice, in a uniformly random order.

pub mod generator;

pub use generator::{cards_for_level, DeckGenerator};
