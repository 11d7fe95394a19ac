//! Full-frame encoding tests for the terminal renderer
//!
//! The renderer never diffs: every draw encodes a clear, a cursor home, and
//! the whole frame. These tests inspect the encoded byte stream directly so
//! no real terminal is needed.

use tui_snake::core::GameState;
use tui_snake::term::{encode_full_into, FrameBuffer, GameView, Viewport};
use tui_snake::types::{GRID_HEIGHT, GRID_WIDTH};

fn encode(fb: &FrameBuffer) -> Vec<u8> {
    let mut out = Vec::new();
    encode_full_into(fb, &mut out).unwrap();
    out
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn test_frame_starts_with_clear_and_cursor_home() {
    let fb = FrameBuffer::new(4, 2);
    let out = encode(&fb);

    // ESC[2J = clear screen, ESC[1;1H = cursor home.
    assert!(contains(&out, b"\x1b[2J"));
    assert!(contains(&out, b"\x1b[1;1H"));
    let clear_at = out.windows(4).position(|w| w == b"\x1b[2J").unwrap();
    assert_eq!(clear_at, 0, "clear must come before any frame content");
}

#[test]
fn test_frame_contains_every_row_separated_by_crlf() {
    let view = GameView;
    let state = GameState::new(1);
    let fb = view.render(&state, Viewport::new(GRID_WIDTH as u16, GRID_HEIGHT as u16));

    let out = encode(&fb);

    // One separator between each pair of adjacent rows, none trailing.
    let crlf_count = out.windows(2).filter(|w| w == b"\r\n").count();
    assert_eq!(crlf_count, (GRID_HEIGHT - 1) as usize);

    // Frame content makes it into the stream: wall glyphs and the HUD.
    assert!(contains(&out, b"####"));
    assert!(contains(&out, b"Score: 0"));
}

#[test]
fn test_redraw_is_stateless() {
    let view = GameView;
    let state = GameState::new(1);
    let fb = view.render(&state, Viewport::new(GRID_WIDTH as u16, GRID_HEIGHT as u16));

    // A full redraw has no frame-to-frame memory: encoding twice yields the
    // identical byte stream.
    assert_eq!(encode(&fb), encode(&fb));
}
