//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, input mapping, rendering).
//!
//! # Playfield Dimensions
//!
//! - **Width**: 50 columns (indexed 0-49)
//! - **Height**: 22 rows (indexed 0-21)
//! - The outermost ring of cells is the wall; the playable interior is
//!   48x20, starting at (1, 1).
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_TICK_MS` | 110 | Simulation interval at game start |
//! | `SPEEDUP_STEP_MS` | 2 | Interval reduction per food eaten |
//! | `MIN_TICK_MS` | 55 | Interval floor (maximum speed) |
//! | `FRAME_INTERVAL_MS` | 16 | Render cadence cap (~60 FPS) |
//!
//! The tick interval shrinking on food is the only difficulty progression.
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, GameAction, Position};
//!
//! let head = Position::new(25, 11);
//! let next = head.shifted(Direction::Right);
//! assert_eq!(next, Position::new(26, 11));
//!
//! // A reversal is detectable via the opposite direction.
//! assert_eq!(Direction::Right.opposite(), Direction::Left);
//!
//! let action = GameAction::Turn(Direction::Up);
//! assert_ne!(action, GameAction::Quit);
//! ```

/// Playfield width in cells (50 columns, wall included)
pub const GRID_WIDTH: i16 = 50;

/// Playfield height in cells (22 rows, wall included)
pub const GRID_HEIGHT: i16 = 22;

/// Snake length at game start and after restart (3 segments)
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Simulation interval at game start (110ms per step)
pub const INITIAL_TICK_MS: u64 = 110;

/// Tick interval reduction per food eaten (2ms)
pub const SPEEDUP_STEP_MS: u64 = 2;

/// Tick interval floor (55ms); the interval never drops below this
pub const MIN_TICK_MS: u64 = 55;

/// Points awarded per food eaten
pub const FOOD_SCORE: u32 = 10;

/// Render cadence cap in milliseconds (16ms ~= 60 FPS)
///
/// Frames are drawn at least this often regardless of the tick interval, so
/// input latency stays bounded by one frame rather than one tick.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// A cell position in grid coordinates
///
/// (0, 0) is the top-left corner; x grows rightward, y grows downward.
/// Signed so that neighbor arithmetic at the border cannot wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i16,
    pub y: i16,
}

impl Position {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// The neighboring cell one step in the given direction
    pub fn shifted(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// The four movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in grid coordinates (y grows downward)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_types::Direction;
    ///
    /// assert_eq!(Direction::Up.offset(), (0, -1));
    /// assert_eq!(Direction::Right.offset(), (1, 0));
    /// ```
    pub fn offset(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The exact opposite direction
    ///
    /// Used to reject reversals that would fold the snake onto itself.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// These are the only inputs the simulation understands; key mapping
/// translates terminal events into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Change the travel direction (reversals are ignored)
    Turn(Direction),
    /// Start a fresh game; only honored after game over
    Restart,
    /// Set the quit flag checked by the main loop
    Quit,
}
