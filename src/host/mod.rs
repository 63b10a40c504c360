//! Host-side plumbing.
//!
//! The engine is single-threaded and has no clock of its own. A host
//! serialises player flips and timer ticks onto one logical queue:
//!
//! - [`Scheduler`]: virtual-clock queue of ticks and delayed resolutions
//! - [`Presenter`]: the UI contract the host reports to
//! - [`GameHost`]: glues controller, scheduler and presenter together

pub mod driver;
pub mod presenter;
pub mod scheduler;

pub use driver::{GameHost, MAX_NAME_ATTEMPTS, TICK_INTERVAL_MS};
pub use presenter::Presenter;
pub use scheduler::{Scheduler, Task};
