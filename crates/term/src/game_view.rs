//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::palette::{self, BORDER};

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

/// Lines above the board (title) and below it (status).
const HEADER_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 2;

/// A lightweight terminal renderer for the puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    /// Border thickness between tiles.
    gap: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are about twice as tall as wide, so tiles are wider than tall.
        Self {
            tile_w: 8,
            tile_h: 3,
            gap: 1,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16, gap: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            gap,
        }
    }

    /// Size in terminal cells of the bordered board for `cols` x `rows` tiles.
    ///
    /// Saturates at `u16::MAX`; anything that large is clipped by the viewport.
    pub fn board_size(&self, cols: usize, rows: usize) -> (u16, u16) {
        (
            span(cols, self.tile_w, self.gap),
            span(rows, self.tile_h, self.gap),
        )
    }

    /// Top-left corner of tile `(row, col)` relative to the board origin.
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        let step = |i: usize, tile: u16| {
            clamp_u16(i)
                .saturating_mul(tile.saturating_add(self.gap))
                .saturating_add(self.gap)
        };
        (step(col, self.tile_w), step(row, self.tile_h))
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, reusing it across frames.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (board_w, board_h) = self.board_size(snap.width, snap.height);
        let total_h = board_h.saturating_add(HEADER_ROWS + FOOTER_ROWS);
        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = viewport.height.saturating_sub(total_h) / 2;
        let board_y = start_y.saturating_add(HEADER_ROWS);

        let text = CellStyle::default();
        let title = format!(
            "2048   moves {}   best {}",
            snap.moves,
            snap.highest_tile()
        );
        fb.put_str_centered(start_x, start_y, board_w, &title, text.bold());

        let border = CellStyle::new(BORDER, BORDER);
        fb.fill_rect(start_x, board_y, board_w, board_h, ' ', border);

        for row in 0..snap.height {
            for col in 0..snap.width {
                let value = snap.get(row, col).unwrap_or(0);
                let (dx, dy) = self.tile_origin(row, col);
                self.draw_tile(fb, start_x.saturating_add(dx), board_y.saturating_add(dy), value);
            }
        }

        let status_style = if snap.ended {
            CellStyle::new(Rgb::new(246, 94, 60), Rgb::new(0, 0, 0)).bold()
        } else {
            text
        };
        fb.put_str_centered(
            start_x,
            board_y.saturating_add(board_h).saturating_add(1),
            board_w,
            status_line(snap),
            status_style,
        );
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
        let style = palette::tile_style(value);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);
        if value != 0 {
            fb.put_str_centered(
                x,
                y.saturating_add(self.tile_h / 2),
                self.tile_w,
                &value.to_string(),
                style,
            );
        }
    }
}

/// Footer text for the current session state.
pub fn status_line(snap: &GameSnapshot) -> &'static str {
    if snap.won() {
        "2048! r: new game  q: quit"
    } else if snap.ended {
        "No space left. r: new game  q: quit"
    } else {
        "arrows/hjkl/wasd: move  r: restart  q: quit"
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Cells covered by `n` tiles of size `tile` separated and framed by `gap`.
fn span(n: usize, tile: u16, gap: u16) -> u16 {
    let n = clamp_u16(n);
    n.saturating_mul(tile)
        .saturating_add(n.saturating_add(1).saturating_mul(gap))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(width: usize, height: usize, cells: Vec<u32>) -> GameSnapshot {
        GameSnapshot {
            width,
            height,
            cells,
            ended: false,
            moves: 0,
        }
    }

    #[test]
    fn board_size_accounts_for_gaps() {
        let view = GameView::default();
        assert_eq!(view.board_size(4, 4), (4 * 8 + 5, 4 * 3 + 5));
        assert_eq!(view.tile_origin(0, 0), (1, 1));
        assert_eq!(view.tile_origin(1, 2), (1 + 2 * 9, 1 + 4));
    }

    #[test]
    fn tile_value_is_drawn_centered() {
        let view = GameView::new(6, 3, 1);
        let s = snap(1, 1, vec![128]);
        let (w, h) = view.board_size(1, 1);
        let fb = view.render(&s, Viewport::new(w, h + HEADER_ROWS + FOOTER_ROWS));

        // Board origin is (0, HEADER_ROWS); tile origin is one gap in.
        let mid_row = HEADER_ROWS + 1 + 1;
        let line = fb.row_text(mid_row);
        assert_eq!(&line[1..7], " 128  ");
        let cell = fb.get(2, mid_row).unwrap();
        assert_eq!(cell.style.bg, palette::tile_background(128));
    }

    #[test]
    fn oversized_boards_saturate_instead_of_overflowing() {
        let view = GameView::default();
        assert_eq!(view.board_size(8200, 4).0, u16::MAX);
        assert_eq!(view.board_size(usize::MAX, usize::MAX), (u16::MAX, u16::MAX));
        assert_eq!(view.tile_origin(0, 70_000), (u16::MAX, 1));

        let s = snap(9000, 1, vec![2; 9000]);
        let fb = view.render(&s, Viewport::new(40, 10));
        assert_eq!((fb.width(), fb.height()), (40, 10));
    }

    #[test]
    fn status_line_follows_session_state() {
        let mut s = snap(2, 1, vec![2, 0]);
        assert!(status_line(&s).starts_with("arrows"));
        s.ended = true;
        assert!(status_line(&s).starts_with("No space"));
        s.cells = vec![2048, 0];
        assert!(status_line(&s).starts_with("2048!"));
    }
}
