//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions
pub const BOARD_WIDTH: i8 = 10;
pub const BOARD_HEIGHT: i8 = 20;

/// Fixed simulation timestep (milliseconds). The tick body runs only when
/// this much time has accumulated since the last tick.
pub const STEP_MS: u32 = 250;

/// Host frame interval (milliseconds). The frame loop polls input and calls
/// `on_tick` at roughly this rate; extra calls inside one step are no-ops.
pub const FRAME_MS: u32 = 16;

/// Anchor y at which the falling piece locks down. The piece's footprint
/// origin sits four rows above the anchor, so the last visible row is
/// reached one row past the board height.
pub const LOCK_Y: i8 = BOARD_HEIGHT + 1;

/// Anchor position for freshly spawned pieces.
pub const SPAWN_X: i8 = 5;
pub const SPAWN_Y: i8 = 0;

/// Footprint dimensions: every piece shape lives in a 3-wide, 4-tall box.
pub const SHAPE_COLS: usize = 3;
pub const SHAPE_ROWS: usize = 4;

/// Tile colors for settled and falling cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Red,
    Magenta,
    Yellow,
    Cyan,
}

impl TileColor {
    /// All colors, in catalog order
    pub const ALL: [TileColor; 4] = [
        TileColor::Red,
        TileColor::Magenta,
        TileColor::Yellow,
        TileColor::Cyan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Magenta => "magenta",
            TileColor::Yellow => "yellow",
            TileColor::Cyan => "cyan",
        }
    }
}

/// Cell on the board (None = empty, Some = filled with a tile color)
pub type Cell = Option<TileColor>;

/// Buffered directional intent, consumed once per tick (last-writer-wins)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveIntent {
    #[default]
    Neutral,
    Left,
    Right,
}

/// Check a board coordinate against [0, W) x [0, H).
///
/// Writes and settles addressing cells outside this range are dropped,
/// never clamped or wrapped.
#[inline(always)]
pub fn in_bounds(x: i8, y: i8) -> bool {
    x >= 0 && x < BOARD_WIDTH && y >= 0 && y < BOARD_HEIGHT
}
