//! Terminal rendering layer.
//!
//! The simulation never touches graphics primitives; it hands the renderer
//! a color-per-cell board and this layer turns that into a styled
//! framebuffer flushed over crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{CellStyle, FrameBuffer, Rgb, TermCell};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
