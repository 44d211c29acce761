//! Falling piece - one footprint plus a mutable anchor
//!
//! The anchor is in board coordinates with y increasing toward the floor.
//! The footprint's top-left sits at (anchor.x - 1, anchor.y - 4) so the
//! shape's visual center tracks the anchor; a fresh spawn at y = 0 starts
//! above the visible board and descends into view.

use arrayvec::ArrayVec;

use crate::core::shapes::PieceShape;
use crate::types::{TileColor, SHAPE_COLS, SHAPE_ROWS, SPAWN_X, SPAWN_Y};

/// Upper bound on projected cells per piece
pub const MAX_PIECE_CELLS: usize = SHAPE_COLS * SHAPE_ROWS;

/// The single currently-controllable descending piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallingPiece {
    shape: PieceShape,
    x: i8,
    y: i8,
}

impl FallingPiece {
    /// Create a piece at the spawn anchor
    pub fn spawn(shape: PieceShape) -> Self {
        Self::at(shape, SPAWN_X, SPAWN_Y)
    }

    /// Create a piece at an explicit anchor
    pub fn at(shape: PieceShape, x: i8, y: i8) -> Self {
        Self { shape, x, y }
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn color(&self) -> TileColor {
        self.shape.color()
    }

    pub fn shape(&self) -> &PieceShape {
        &self.shape
    }

    /// Shift the anchor one column left.
    ///
    /// No wall or settled-cell check happens here; out-of-range cells are
    /// clipped at projection time instead of blocking the move.
    pub fn move_left(&mut self) {
        self.x -= 1;
    }

    /// Shift the anchor one column right. Same clipping rule as `move_left`.
    pub fn move_right(&mut self) {
        self.x += 1;
    }

    /// Advance the anchor one row toward the floor.
    /// Called exactly once per tick regardless of lateral intent.
    pub fn descend(&mut self) {
        self.y += 1;
    }

    /// Rotate the footprint a quarter turn left in place.
    /// The anchor is untouched.
    pub fn rotate_left(&mut self) {
        self.shape.rotate_left();
    }

    /// Projection origin: board coordinates of the footprint's (0, 0).
    pub fn origin(&self) -> (i8, i8) {
        (self.x - 1, self.y - 4)
    }

    /// Project occupied sub-cells to absolute board coordinates.
    ///
    /// Yields raw coordinates; callers are expected to bounds-check and
    /// skip, never clamp. `i8` is ample for the coordinate range.
    pub fn cells(&self) -> ArrayVec<(i8, i8), MAX_PIECE_CELLS> {
        let (ox, oy) = self.origin();
        let mut out = ArrayVec::new();
        for i in 0..SHAPE_COLS {
            for j in 0..SHAPE_ROWS {
                if self.shape.is_occupied(i, j) {
                    out.push((ox + i as i8, oy + j as i8));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::catalog;
    use crate::types::TileColor;

    fn square() -> PieceShape {
        PieceShape::from_cells(&[(0, 0), (1, 0), (0, 1), (1, 1)], TileColor::Yellow)
    }

    #[test]
    fn test_spawn_anchor() {
        let piece = FallingPiece::spawn(catalog()[0]);
        assert_eq!((piece.x(), piece.y()), (SPAWN_X, SPAWN_Y));
    }

    #[test]
    fn test_lateral_moves_are_unchecked() {
        let mut piece = FallingPiece::at(square(), 0, 5);
        piece.move_left();
        assert_eq!(piece.x(), -1);
        piece.move_right();
        piece.move_right();
        assert_eq!(piece.x(), 1);
    }

    #[test]
    fn test_descend_increments_y() {
        let mut piece = FallingPiece::at(square(), 5, 4);
        piece.descend();
        assert_eq!(piece.y(), 5);
        assert_eq!(piece.x(), 5);
    }

    #[test]
    fn test_projection_origin_offsets() {
        let piece = FallingPiece::at(square(), 5, 4);
        assert_eq!(piece.origin(), (4, 0));
    }

    #[test]
    fn test_projection_cells() {
        let piece = FallingPiece::at(square(), 5, 5);
        let mut cells: Vec<_> = piece.cells().into_iter().collect();
        cells.sort();
        assert_eq!(cells, vec![(4, 1), (4, 2), (5, 1), (5, 2)]);
    }

    #[test]
    fn test_projection_can_yield_raw_out_of_range_cells() {
        // Anchor near the left wall: column -1 appears and the consumer
        // is responsible for skipping it.
        let piece = FallingPiece::at(square(), 0, 5);
        assert!(piece.cells().iter().any(|&(x, _)| x < 0));
    }

    #[test]
    fn test_rotate_left_keeps_anchor() {
        let mut piece = FallingPiece::at(square(), 5, 5);
        piece.rotate_left();
        assert_eq!((piece.x(), piece.y()), (5, 5));
        assert_eq!(piece.shape().occupied_count(), 4);
    }
}
