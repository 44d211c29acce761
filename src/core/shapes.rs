//! Shapes module - piece footprints and the spawn catalog
//!
//! A footprint is a fixed 3-wide x 4-tall boolean matrix plus a color tag.
//! The matrix is stored column-major (`occupied[i][j]` with i the column and
//! j the row), matching the (i, j) orientation the projection uses.

use crate::core::rng::SimpleRng;
use crate::types::{TileColor, SHAPE_COLS, SHAPE_ROWS};

/// One piece shape: occupied sub-cells in a fixed box, plus a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceShape {
    occupied: [[bool; SHAPE_ROWS]; SHAPE_COLS],
    color: TileColor,
}

impl PieceShape {
    /// Build a shape from a list of occupied (column, row) sub-cells.
    /// Sub-cells outside the fixed box are ignored.
    pub fn from_cells(cells: &[(usize, usize)], color: TileColor) -> Self {
        let mut occupied = [[false; SHAPE_ROWS]; SHAPE_COLS];
        for &(i, j) in cells {
            if i < SHAPE_COLS && j < SHAPE_ROWS {
                occupied[i][j] = true;
            }
        }
        Self { occupied, color }
    }

    pub fn color(&self) -> TileColor {
        self.color
    }

    /// Whether sub-cell (i, j) is occupied. Out-of-box queries are false.
    pub fn is_occupied(&self, i: usize, j: usize) -> bool {
        i < SHAPE_COLS && j < SHAPE_ROWS && self.occupied[i][j]
    }

    /// Number of occupied sub-cells
    pub fn occupied_count(&self) -> usize {
        self.occupied
            .iter()
            .flat_map(|col| col.iter())
            .filter(|&&b| b)
            .count()
    }

    /// Replace the footprint with its quarter-turn-left equivalent.
    ///
    /// Each occupied (i, j) maps to (j, COLS-1-i) inside the same fixed box.
    /// Cells whose image lands outside the box are dropped, not clamped;
    /// catalog shapes stay inside the top 3x3 so they rotate losslessly.
    pub fn rotate_left(&mut self) {
        let mut rotated = [[false; SHAPE_ROWS]; SHAPE_COLS];
        for i in 0..SHAPE_COLS {
            for j in 0..SHAPE_ROWS {
                if !self.occupied[i][j] {
                    continue;
                }
                let (ni, nj) = (j, SHAPE_COLS - 1 - i);
                if ni < SHAPE_COLS && nj < SHAPE_ROWS {
                    rotated[ni][nj] = true;
                }
            }
        }
        self.occupied = rotated;
    }
}

/// The spawn catalog: one footprint per tile color.
/// All entries live inside the top 3x3 of the box.
pub fn catalog() -> [PieceShape; 4] {
    [
        // L
        PieceShape::from_cells(&[(0, 0), (0, 1), (0, 2), (1, 2)], TileColor::Red),
        // T
        PieceShape::from_cells(&[(0, 1), (1, 1), (2, 1), (1, 2)], TileColor::Magenta),
        // square
        PieceShape::from_cells(&[(0, 0), (1, 0), (0, 1), (1, 1)], TileColor::Yellow),
        // S
        PieceShape::from_cells(&[(1, 0), (2, 0), (0, 1), (1, 1)], TileColor::Cyan),
    ]
}

/// Seeded picker over the spawn catalog.
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: SimpleRng,
}

impl ShapePicker {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next spawn shape
    pub fn draw(&mut self) -> PieceShape {
        let shapes = catalog();
        shapes[self.rng.next_range(shapes.len() as u32) as usize]
    }
}
