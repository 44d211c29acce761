//! gridfall - a falling-block puzzle on a fixed-timestep grid simulation.
//!
//! `core` holds the pure simulation (board view, falling piece, settled
//! store, tick state machine); `input` translates key events into intents;
//! `host` is the callback seam between the frame loop and the game; `term`
//! draws the board.

pub mod core;
pub mod host;
pub mod input;
pub mod term;
pub mod types;
