//! The per-tick state machine: direction changes, movement, collisions and
//! growth. A run is either running or halted, and halted is final.

use rand::Rng;
use rand::rngs::StdRng;

use crate::config::GameConfig;
use crate::food::FoodSpawner;
use crate::snake::{Direction, Snake};
use crate::state::GameState;
use StepOutcome::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Ordinary move, length unchanged.
    Moved,
    /// The head landed on the food; the snake grew and new food was placed.
    Ate,
    /// This tick ended the game.
    Crashed(Collision),
    /// The game was already over; nothing changed.
    Halted,
}

pub struct MotionEngine<R = StdRng> {
    spawner: FoodSpawner<R>,
}

impl MotionEngine<StdRng> {
    pub fn from_clock() -> Self {
        MotionEngine { spawner: FoodSpawner::from_clock() }
    }
}

impl<R: Rng> MotionEngine<R> {
    pub fn new(spawner: FoodSpawner<R>) -> Self {
        MotionEngine { spawner }
    }

    /// Lays out the starting snake heading right and places the first food.
    pub fn new_game(&mut self, config: &GameConfig) -> GameState {
        let snake = Snake::new(config.initial_head, config.initial_length, Direction::Right);
        let food = self.spawner.place(&config.grid, &snake);

        GameState::new(config.grid, snake, food, Direction::Right)
    }

    /// Advances the game by one tick. `requested` is the direction asked for
    /// this tick, if any.
    pub fn step(&mut self, state: &mut GameState, requested: Option<Direction>) -> StepOutcome {
        if state.halted {
            return Halted;
        }

        // Only a turn onto the other axis is taken; both the current
        // direction and its reversal are ignored.
        if let Some(dir) = requested {
            if !dir.same_axis(state.direction) {
                state.direction = dir;
            }
        }

        let new_head = state.direction.offset(state.snake.head());

        let collision = if !state.grid.is_interior(new_head) {
            Some(Collision::Wall)
        } else if state.snake.contains(new_head) {
            Some(Collision::Body)
        } else {
            None
        };

        if let Some(collision) = collision {
            log::info!("crashed into {:?} at {:?}, score {}", collision, new_head, state.score());
            state.halted = true;
            return Crashed(collision);
        }

        if new_head == state.food {
            state.snake.grow_front(new_head);
            state.food = self.spawner.place(&state.grid, &state.snake);
            log::debug!("ate at {:?}, length {}", new_head, state.snake.len());
            Ate
        } else {
            state.snake.advance_front(new_head);
            Moved
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use crate::grid::Grid;
    use crate::snake::Direction::*;

    fn engine() -> MotionEngine {
        MotionEngine::new(FoodSpawner::with_seed(99))
    }

    fn state_with(cells: &[(i16, i16)], direction: Direction, food: (i16, i16)) -> GameState {
        let snake = Snake::from_cells(cells).unwrap();
        GameState::new(Grid::new(30, 30), snake, food, direction)
    }

    #[test]
    fn test_new_game() {
        let state = engine().new_game(&GameConfig::new(Difficulty::Easy));

        assert_eq!(state.snake, Snake::from_cells(&[(12, 10), (11, 10), (10, 10)]).unwrap());
        assert_eq!(state.direction, Right);
        assert!(!state.halted);
        assert!(state.grid.is_interior(state.food));
        assert!(!state.snake.contains(state.food));
    }

    #[test]
    fn test_no_request_keeps_heading() {
        let mut engine = engine();
        let mut state = state_with(&[(5, 5), (5, 6), (5, 7)], Up, (20, 20));

        assert_eq!(engine.step(&mut state, None), Moved);
        assert_eq!(state.snake.head(), (5, 4));
        assert_eq!(state.direction, Up);
    }

    #[test]
    fn test_turn_onto_other_axis() {
        let mut engine = engine();
        let mut state = state_with(&[(12, 10), (11, 10), (10, 10)], Right, (20, 20));

        assert_eq!(engine.step(&mut state, Some(Down)), Moved);
        assert_eq!(state.direction, Down);
        assert_eq!(state.snake.head(), (12, 11));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut engine = engine();
        let mut state = state_with(&[(12, 10), (11, 10), (10, 10)], Right, (20, 20));

        assert_eq!(engine.step(&mut state, Some(Left)), Moved);
        assert_eq!(state.direction, Right);
        assert_eq!(state.snake.head(), (13, 10));
    }

    #[test]
    fn test_wall_crash_leaves_body() {
        let mut engine = engine();
        let mut state = state_with(&[(28, 10), (27, 10), (26, 10)], Right, (20, 20));
        let before = state.snake.clone();

        assert_eq!(engine.step(&mut state, Some(Right)), Crashed(Collision::Wall));
        assert!(state.halted);
        assert_eq!(state.snake, before);
    }

    #[test]
    fn test_body_crash() {
        let mut engine = engine();
        // Head at (5,5) heading Left; turning Down runs into (5,6).
        let cells = [(5, 5), (6, 5), (6, 6), (5, 6), (4, 6)];
        let mut state = state_with(&cells, Left, (20, 20));

        assert_eq!(engine.step(&mut state, Some(Down)), Crashed(Collision::Body));
        assert!(state.halted);
        assert_eq!(state.snake.len(), 5);
    }

    #[test]
    fn test_moving_into_own_tail_crashes() {
        let mut engine = engine();
        // The tail would vacate (4,5) this tick, but occupancy is checked first.
        let cells = [(4, 4), (5, 4), (5, 5), (4, 5)];
        let mut state = state_with(&cells, Left, (20, 20));

        assert_eq!(engine.step(&mut state, Some(Down)), Crashed(Collision::Body));
    }

    #[test]
    fn test_eat_grows_and_replaces_food() {
        let mut engine = engine();
        let mut state = state_with(&[(12, 10), (11, 10), (10, 10)], Right, (13, 10));

        assert_eq!(engine.step(&mut state, None), Ate);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.head(), (13, 10));
        assert_eq!(state.snake.tail(), (10, 10));
        assert_ne!(state.food, (13, 10));
        assert!(!state.snake.contains(state.food));
        assert_eq!(state.score(), 1);
    }

    #[test]
    fn test_halted_is_absorbing() {
        let mut engine = engine();
        let mut state = state_with(&[(1, 10), (2, 10), (3, 10)], Left, (20, 20));

        assert_eq!(engine.step(&mut state, None), Crashed(Collision::Wall));
        let frozen = state.clone();

        for dir in [Some(Up), Some(Down), None, Some(Right)] {
            assert_eq!(engine.step(&mut state, dir), Halted);
            assert_eq!(state, frozen);
        }
    }
}
