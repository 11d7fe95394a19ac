//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation
//! logic. It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical food sequences
//! - **Testable**: Unit tests for every game rule
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: 50x22 playfield with wall and interior queries
//! - [`snake`]: the segmented body, head first
//! - [`rng`]: seeded LCG driving food placement
//! - [`game_state`]: complete game state, input handling, and the tick rule
//!
//! # Game Rules
//!
//! - The snake advances one cell per tick in its travel direction.
//! - Hitting the wall or any body segment ends the game; the body is left
//!   untouched so the final frame shows the collision.
//! - Eating food grows the snake by one segment, scores 10 points, and
//!   shortens the tick interval by 2ms down to a 55ms floor.
//! - Reversing direction in place is ignored; restart is only honored after
//!   game over.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::GameState;
//! use tui_snake_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Turn(Direction::Up));
//! game.step();
//!
//! assert_eq!(game.snake().head().y, 10);
//! assert!(!game.game_over());
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use snake::Snake;
