//! Settled store - the authoritative record of permanent board content
//!
//! Cells are appended at lock-down and never mutated or removed; the store
//! grows for the life of a session. The board view is re-stamped from it
//! every tick.

use crate::core::board::Board;
use crate::types::TileColor;

/// A permanently fixed, colored board position created on lock-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettledCell {
    pub x: i8,
    pub y: i8,
    pub color: TileColor,
}

/// Append-only collection of settled cells.
#[derive(Debug, Clone, Default)]
pub struct SettledStore {
    cells: Vec<SettledCell>,
}

impl SettledStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one settled cell. There is no removal path.
    pub fn push(&mut self, cell: SettledCell) {
        self.cells.push(cell);
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SettledCell> {
        self.cells.iter()
    }

    /// Write every settled cell's color onto the board.
    ///
    /// Runs after the falling piece's projection so settled content is never
    /// hidden; out-of-bounds entries (there should be none) are dropped by
    /// the board itself.
    pub fn stamp(&self, board: &mut Board) {
        for cell in &self.cells {
            board.set(cell.x, cell.y, Some(cell.color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_empty() {
        let store = SettledStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_stamp_writes_colors() {
        let mut store = SettledStore::new();
        store.push(SettledCell {
            x: 3,
            y: 19,
            color: TileColor::Red,
        });
        store.push(SettledCell {
            x: 4,
            y: 19,
            color: TileColor::Cyan,
        });

        let mut board = Board::new();
        store.stamp(&mut board);

        assert_eq!(board.get(3, 19), Some(Some(TileColor::Red)));
        assert_eq!(board.get(4, 19), Some(Some(TileColor::Cyan)));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_stamp_overwrites_projection() {
        let mut board = Board::new();
        board.set(5, 10, Some(TileColor::Yellow));

        let mut store = SettledStore::new();
        store.push(SettledCell {
            x: 5,
            y: 10,
            color: TileColor::Magenta,
        });
        store.stamp(&mut board);

        // Settled color wins ties with whatever was drawn first.
        assert_eq!(board.get(5, 10), Some(Some(TileColor::Magenta)));
    }
}
