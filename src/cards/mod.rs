//! Card system: faces, cells and boards.
//!
//! ## Key Types
//!
//! - `CardIdentity`: Opaque face value shared by the two cells of a pair
//! - `Palette`: The fixed set of faces a deck is drawn from
//! - `Cell`: One board position with its face and visibility
//! - `Board`: Ordered cells for a level, always exact pairs
//! - `GridShape`: Rows x columns layout for a board size

pub mod board;
pub mod cell;
pub mod identity;

pub use board::{Board, GridShape, MIN_BOARD_CARDS};
pub use cell::{Cell, Visibility};
pub use identity::{CardIdentity, Palette};
