//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Glyphs for the board, matching the classic full-ASCII look.
const WALL_CH: char = '#';
const FOOD_CH: char = '*';
const HEAD_CH: char = 'O';
const BODY_CH: char = 'o';

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

/// A lightweight terminal view of the snake game.
///
/// Board cells map 1:1 to terminal cells; the board is centered in the
/// viewport and clipped by the framebuffer when the viewport is smaller.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully rewritten on every call.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = state.grid().width() as u16;
        let board_h = state.grid().height() as u16;
        let start_x = viewport.width.saturating_sub(board_w) / 2;
        let start_y = viewport.height.saturating_sub(board_h) / 2;

        let wall = CellStyle {
            fg: Rgb::new(130, 130, 140),
            ..CellStyle::default()
        };
        let food = CellStyle {
            fg: Rgb::new(220, 80, 80),
            bold: true,
            ..CellStyle::default()
        };
        let body = CellStyle {
            fg: Rgb::new(100, 220, 120),
            ..CellStyle::default()
        };
        let head = CellStyle { bold: true, ..body };
        let text = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bold: true,
            ..CellStyle::default()
        };

        // Wall ring.
        for x in 0..board_w {
            fb.put_char(start_x + x, start_y, WALL_CH, wall);
            fb.put_char(start_x + x, start_y + board_h - 1, WALL_CH, wall);
        }
        for y in 0..board_h {
            fb.put_char(start_x, start_y + y, WALL_CH, wall);
            fb.put_char(start_x + board_w - 1, start_y + y, WALL_CH, wall);
        }

        // Food, then the body over it (the body always wins a cell).
        let f = state.food();
        fb.put_char(start_x + f.x as u16, start_y + f.y as u16, FOOD_CH, food);

        for (i, seg) in state.snake().segments().enumerate() {
            let (ch, style) = if i == 0 { (HEAD_CH, head) } else { (BODY_CH, body) };
            fb.put_char(start_x + seg.x as u16, start_y + seg.y as u16, ch, style);
        }

        // Score HUD over the top wall row, starting two cells in.
        let hud = format!("Score: {}   WASD=move  Q=quit", state.score());
        self.put_board_str(fb, start_x, start_y, board_w, 2, 0, &hud, text);

        if state.game_over() {
            let msg = "GAME OVER  (R=restart, Q=quit)";
            let col = 1.max((board_w.saturating_sub(msg.chars().count() as u16)) / 2);
            self.put_board_str(fb, start_x, start_y, board_w, col, board_h / 2, msg, text);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    /// Write text in board coordinates, clipping before the right wall cell.
    fn put_board_str(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        board_w: u16,
        col: u16,
        row: u16,
        s: &str,
        style: CellStyle,
    ) {
        for (i, ch) in s.chars().enumerate() {
            let cx = col + i as u16;
            if cx + 1 >= board_w {
                break;
            }
            fb.put_char(start_x + cx, start_y + row, ch, style);
        }
    }
}
