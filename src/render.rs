use crate::config::Difficulty;
use crate::snake::Snake;
use crate::state::GameState;

const WALL_CHAR: char = '+';
const SNAKE_BODY_CHAR: char = 'o';
const DEAD_SNAKE_CHAR: char = 'X';
const FOOD_CHAR: char = '*';

/// Draws the board as one string per grid row, followed by a blank line and
/// the status lines.
pub fn frame(state: &GameState, difficulty: Difficulty) -> Vec<String> {
    let grid = &state.grid;
    let head = state.snake.head();
    let head_char = if state.halted { DEAD_SNAKE_CHAR } else { Snake::head_char(state.direction) };

    let mut lines: Vec<String> = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| {
                    let cell = (x, y);
                    if grid.is_wall(cell) {
                        WALL_CHAR
                    } else if cell == head {
                        head_char
                    } else if state.snake.contains(cell) {
                        SNAKE_BODY_CHAR
                    } else if cell == state.food {
                        FOOD_CHAR
                    } else {
                        ' '
                    }
                })
                .collect()
        })
        .collect();

    lines.push(String::new());
    lines.extend(status(state, difficulty));
    lines
}

fn status(state: &GameState, difficulty: Difficulty) -> [String; 2] {
    [
        format!("  difficulty : {}", difficulty),
        format!("  score      : {}", state.score()),
    ]
}

/// Printed after the terminal is restored.
pub fn summary(state: &GameState, difficulty: Difficulty) -> String {
    format!(
        "\n       game over\n\n    difficulty: {}\n\n        score: {}\n",
        difficulty,
        state.score()
    )
}
