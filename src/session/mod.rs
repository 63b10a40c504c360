//! Game sessions: the controller, its state, and presentation snapshots.

pub mod controller;
pub mod snapshot;
pub mod state;

pub use controller::GameController;
pub use snapshot::{BoardSnapshot, CellView, StatusSnapshot};
pub use state::{GamePhase, GameSession, ResolutionTicket};
