//! Core module - pure simulation logic with no I/O dependencies
//!
//! Everything timing- or input-driven funnels through `Simulation`; the
//! board is a derived view, the settled store is the source of truth.

pub mod board;
pub mod piece;
pub mod rng;
pub mod settled;
pub mod shapes;
pub mod sim;

// Re-export commonly used types
pub use board::Board;
pub use piece::FallingPiece;
pub use settled::{SettledCell, SettledStore};
pub use shapes::{catalog, PieceShape, ShapePicker};
pub use sim::Simulation;
