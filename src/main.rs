//! Terminal Snake runner.
//!
//! Drives the fixed-timestep loop: poll one key, step the simulation when
//! the tick interval has elapsed, and redraw the full frame every iteration.
//! Uses crossterm for input and a framebuffer-based full-redraw renderer.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::GameState;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{FRAME_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    // Raw mode is best effort: if the terminal refuses, play on in whatever
    // mode it is in rather than aborting.
    let _ = term.enter();

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(rand::random());
    let view = GameView;
    let mut fb = FrameBuffer::new(GRID_WIDTH as u16, GRID_HEIGHT as u16);

    let mut last_tick = Instant::now();
    let frame_cap = Duration::from_millis(FRAME_INTERVAL_MS);

    loop {
        // Render every iteration; the view re-centers on the live size.
        let (w, h) =
            crossterm::terminal::size().unwrap_or((GRID_WIDTH as u16, GRID_HEIGHT as u16));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick, capped so frames keep
        // coming faster than steps. The bounded poll is also the yield that
        // keeps the loop off a busy spin.
        let tick_duration = Duration::from_millis(game.tick_interval_ms());
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(frame_cap);

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                }
            }
        }

        if game.quit() {
            return Ok(());
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.step();
        }
    }
}
