//! Round countdown.
//!
//! The timer only counts; when ticks arrive is the host's business
//! (once a second in the classic game).

use log::trace;
use serde::{Deserialize, Serialize};

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is not running; nothing happened.
    Idle,
    /// One second elapsed; this much remains.
    Ticked(u32),
    /// The countdown just reached zero. Reported exactly once.
    Expired,
}

/// Countdown that expires exactly once.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundTimer {
    remaining: u32,
    running: bool,
    expired: bool,
}

impl RoundTimer {
    /// A stopped timer with nothing on the clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer with `seconds` and start counting.
    pub fn start(&mut self, seconds: u32) {
        self.remaining = seconds;
        self.running = true;
        self.expired = false;
    }

    /// Re-arm from a clean state, e.g. on restart.
    pub fn reset(&mut self, seconds: u32) {
        self.start(seconds);
    }

    /// Stop counting without expiring.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Advance one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        trace!("timer: {} s left", self.remaining);

        if self.remaining == 0 {
            self.running = false;
            self.expired = true;
            TickOutcome::Expired
        } else {
            TickOutcome::Ticked(self.remaining)
        }
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.expired
    }
}
