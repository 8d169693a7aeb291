//! Core module - pure game rules with no I/O dependencies.
//!
//! Everything the renderer and driver need comes out of here as plain
//! values; nothing in this tree draws, polls or sleeps.

pub mod board;
pub mod game;
pub mod piece;
pub mod rng;
pub mod shapes;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use game::Game;
pub use piece::Piece;
pub use rng::{PieceSource, SimpleRng};
pub use shapes::{shape, Shape, ShapeVariant};
pub use snapshot::{GameSnapshot, HoldSnapshot};
