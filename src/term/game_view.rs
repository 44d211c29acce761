//! GameView: maps the board's color-per-cell array into a framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The view reads only the board;
//! falling and settled content are indistinguishable here because the
//! simulation has already flattened both into cell colors.

use crate::core::Board;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{TileColor, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board renderer with configurable cell aspect.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the board into a fresh framebuffer, centered in the viewport.
    pub fn render(&self, board: &Board, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                match board.get(x, y).unwrap_or(None) {
                    Some(color) => {
                        self.fill_cell(&mut fb, start_x, start_y, x, y, '█', tile_style(color))
                    }
                    None => self.fill_cell(
                        &mut fb,
                        start_x,
                        start_y,
                        x,
                        y,
                        '·',
                        empty_style(),
                    ),
                }
            }
        }

        fb.put_str(
            start_x,
            start_y.saturating_sub(1),
            " gridfall  (a/d or arrows to move, q to quit) ",
            CellStyle::default(),
        );

        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i8,
        y: i8,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + (y as u16) * self.cell_h;
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                fb.put_char(px + dx, py + dy, ch, style);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

fn tile_style(color: TileColor) -> CellStyle {
    let fg = match color {
        TileColor::Red => Rgb::new(220, 80, 80),
        TileColor::Magenta => Rgb::new(200, 120, 220),
        TileColor::Yellow => Rgb::new(240, 220, 80),
        TileColor::Cyan => Rgb::new(80, 220, 220),
    };
    CellStyle {
        fg,
        bg: Rgb::new(30, 30, 40),
        bold: true,
    }
}

fn empty_style() -> CellStyle {
    CellStyle {
        fg: Rgb::new(90, 90, 100),
        bg: Rgb::new(30, 30, 40),
        bold: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_fits_small_viewport_without_panic() {
        let board = Board::new();
        let view = GameView::default();
        let fb = view.render(&board, Viewport::new(10, 5));
        assert_eq!(fb.width(), 10);
        assert_eq!(fb.height(), 5);
    }

    #[test]
    fn test_render_paints_occupied_cell() {
        let mut board = Board::new();
        board.set(0, 0, Some(TileColor::Red));

        let view = GameView::new(1, 1);
        let fb = view.render(&board, Viewport::new(40, 30));

        // Board is centered: frame is 12x22, cell (0,0) sits inside the
        // border at frame origin + 1.
        let start_x = (40 - 12) / 2;
        let start_y = (30 - 22) / 2;
        let cell = fb.get(start_x + 1, start_y + 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.fg, Rgb::new(220, 80, 80));
    }
}
