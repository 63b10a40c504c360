//! Core engine types: RNG, configuration, errors.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::EngineConfig;
pub use error::{GameError, Result};
pub use rng::GameRng;
