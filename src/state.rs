use crate::config::INITIAL_SNAKE_LENGTH;
use crate::grid::{Cell, Grid};
use crate::snake::{Direction, Snake};

/// Everything the game knows about a run. Owned by the driver and handed to
/// [`MotionEngine::step`](crate::motion::MotionEngine::step) once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub grid: Grid,
    pub snake: Snake,
    pub food: Cell,
    pub direction: Direction,
    pub halted: bool,
}

impl GameState {
    pub fn new(grid: Grid, snake: Snake, food: Cell, direction: Direction) -> Self {
        GameState { grid, snake, food, direction, halted: false }
    }

    /// Food eaten so far.
    pub fn score(&self) -> usize {
        self.snake.len().saturating_sub(INITIAL_SNAKE_LENGTH as usize)
    }
}
