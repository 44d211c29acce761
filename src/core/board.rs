//! Board module - the rendered view of the playfield
//!
//! The board is a 10x20 grid where each cell is empty or holds a tile color.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..9 (left to right), y in 0..19 (top to bottom).
//!
//! The board is a *view*, not the source of truth: the simulation clears it
//! and recomputes it every tick from the settled store plus the falling
//! piece's projection.

use crate::types::{in_bounds, Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if !in_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> i8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false (and writes nothing) if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_empty(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Count currently filled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TileColor;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, Some(TileColor::Red));
        board.set(5, 10, Some(TileColor::Cyan));

        assert_eq!(board.get(0, 0), Some(Some(TileColor::Red)));
        assert_eq!(board.get(5, 10), Some(Some(TileColor::Cyan)));

        // Verify internal layout
        assert_eq!(board.cells[0], Some(TileColor::Red));
        assert_eq!(board.cells[10 * 10 + 5], Some(TileColor::Cyan));
    }

    #[test]
    fn test_board_clear_resets_everything() {
        let mut board = Board::new();
        board.set(3, 4, Some(TileColor::Yellow));
        board.set(9, 19, Some(TileColor::Magenta));

        board.clear();

        assert_eq!(board.occupied_count(), 0);
        assert!(board.cells().iter().all(|c| c.is_none()));
    }
}
