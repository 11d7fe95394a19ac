//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. State is
//! drawn into a styled framebuffer which is then flushed to the terminal as
//! one full-frame write.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Full-frame redraws: every draw clears and rewrites the whole screen
//! - Pure state-to-frame mapping that can be unit-tested without a terminal

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
