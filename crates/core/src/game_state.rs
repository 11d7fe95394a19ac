//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the snake body, and the RNG. It owns
//! input handling, the tick rule, food placement, and the game lifecycle
//! (playing, game over, restart, quit).

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{
    Direction, GameAction, Position, FOOD_SCORE, INITIAL_SNAKE_LEN, INITIAL_TICK_MS, MIN_TICK_MS,
    SPEEDUP_STEP_MS,
};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Position,
    direction: Direction,
    rng: SimpleRng,
    score: u32,
    tick_interval_ms: u64,
    game_over: bool,
    quit: bool,
}

impl GameState {
    /// Create a new game on the standard grid with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_grid(Grid::default(), seed)
    }

    /// Create a new game on a custom grid
    ///
    /// Small grids are legal; a grid whose interior the starting snake
    /// already saturates comes up game over immediately.
    pub fn with_grid(grid: Grid, seed: u32) -> Self {
        let center = grid.center();
        let mut state = Self {
            grid,
            snake: Snake::spawn(center, INITIAL_SNAKE_LEN, Direction::Right),
            food: center,
            direction: Direction::Right,
            rng: SimpleRng::new(seed),
            score: 0,
            tick_interval_ms: INITIAL_TICK_MS,
            game_over: false,
            quit: false,
        };
        state.spawn_food();
        state
    }

    /// Reset to the starting configuration, keeping the RNG stream
    pub fn reset(&mut self) {
        self.snake = Snake::spawn(self.grid.center(), INITIAL_SNAKE_LEN, Direction::Right);
        self.direction = Direction::Right;
        self.score = 0;
        self.tick_interval_ms = INITIAL_TICK_MS;
        self.game_over = false;
        self.quit = false;
        self.spawn_food();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Position {
        self.food
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn tick_interval_ms(&self) -> u64 {
        self.tick_interval_ms
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn quit(&self) -> bool {
        self.quit
    }

    /// Place food at a fixed position, bypassing the RNG
    ///
    /// Scenario setup for tests and benchmarks; gameplay uses
    /// [`GameState::spawn_food`].
    pub fn set_food(&mut self, pos: Position) {
        self.food = pos;
    }

    /// Apply a game action
    ///
    /// Returns whether the action changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Turn(direction) => {
                // Reversing in place would fold the head into the neck.
                if direction == self.direction.opposite() {
                    return false;
                }
                self.direction = direction;
                true
            }
            GameAction::Restart => {
                if !self.game_over {
                    return false;
                }
                self.reset();
                true
            }
            GameAction::Quit => {
                self.quit = true;
                true
            }
        }
    }

    /// Advance the simulation by one tick
    ///
    /// Returns whether the snake moved. Collisions are checked before any
    /// mutation, so a lost game still shows the exact pre-crash body.
    pub fn step(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let next = self.snake.head().shifted(self.direction);

        if self.grid.is_wall(next) || self.snake.contains(next) {
            self.game_over = true;
            return false;
        }

        self.snake.push_head(next);

        if next == self.food {
            self.score += FOOD_SCORE;
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(SPEEDUP_STEP_MS)
                .max(MIN_TICK_MS);
            self.spawn_food();
        } else {
            self.snake.pop_tail();
        }

        true
    }

    /// Move food to a fresh interior cell not occupied by the snake
    ///
    /// When the snake has filled the whole interior there is nowhere left to
    /// sample, so the game ends instead of spinning.
    pub fn spawn_food(&mut self) {
        if self.snake.len() >= self.grid.interior_area() {
            self.game_over = true;
            return;
        }

        loop {
            let pos = Position::new(
                self.rng.next_in_range(1, self.grid.width() - 2),
                self.rng.next_in_range(1, self.grid.height() - 2),
            );
            if !self.snake.contains(pos) {
                self.food = pos;
                return;
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
