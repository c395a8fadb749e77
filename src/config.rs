use std::ffi::OsString;
use std::fmt;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::grid::{Cell, Grid};

pub const GRID_WIDTH: i16 = 30;
pub const GRID_HEIGHT: i16 = 30;
pub const INITIAL_SNAKE_LENGTH: i16 = 3;
pub const INITIAL_HEAD: Cell = (12, 10);

pub const USAGE: &str = "\n  Error:  you need to pass 1 argument: difficulty\n          it can be EASY / NORM / HARD / HELL\n";

/// How long each tick waits for a key. Shorter means a faster snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Difficulty {
    #[value(name = "EASY")]
    Easy,
    #[value(name = "NORM")]
    Norm,
    #[value(name = "HARD")]
    Hard,
    #[value(name = "HELL")]
    Hell,
}

impl Difficulty {
    pub fn tick_timeout(&self) -> Duration {
        let ms = match self {
            Difficulty::Easy => 150,
            Difficulty::Norm => 100,
            Difficulty::Hard => 70,
            Difficulty::Hell => 35,
        };
        Duration::from_millis(ms)
    }

    pub fn token(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Norm => "NORM",
            Difficulty::Hard => "HARD",
            Difficulty::Hell => "HELL",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[derive(Parser, Debug)]
#[command(name = "term-snake", about = "Snake in the terminal")]
struct Cli {
    /// EASY, NORM, HARD or HELL
    difficulty: Difficulty,
}

/// Reads the difficulty from the command line. Any malformed invocation,
/// including `--help`, yields `None` and the caller shows [`USAGE`].
pub fn parse_args<I, T>(args: I) -> Option<Difficulty>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    // Exactly the program name and one token; clap alone would also take
    // `-- EASY` or flags interleaved with the token.
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        return None;
    }

    Cli::try_parse_from(args).ok().map(|cli| cli.difficulty)
}

/// Everything fixed for one run of the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub grid: Grid,
    pub initial_head: Cell,
    pub initial_length: i16,
    pub difficulty: Difficulty,
}

impl GameConfig {
    pub fn new(difficulty: Difficulty) -> Self {
        GameConfig {
            grid: Grid::new(GRID_WIDTH, GRID_HEIGHT),
            initial_head: INITIAL_HEAD,
            initial_length: INITIAL_SNAKE_LENGTH,
            difficulty,
        }
    }

    pub fn tick_timeout(&self) -> Duration {
        self.difficulty.tick_timeout()
    }

    /// Smallest terminal (columns, rows) that can hold the board; anything at
    /// or below this is rejected.
    pub fn min_terminal_size(&self) -> (u16, u16) {
        (self.grid.width() as u16 + 4, self.grid.height() as u16 + 4)
    }

    /// Whether a terminal of (columns, rows) can show the board and status.
    pub fn fits_terminal(&self, (cols, rows): (u16, u16)) -> bool {
        let (min_cols, min_rows) = self.min_terminal_size();
        cols > min_cols && rows > min_rows
    }
}
