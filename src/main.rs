use std::process::ExitCode;

use anyhow::Result;
use term_snake::config::{self, GameConfig};
use term_snake::game::SnakeGame;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let difficulty = match config::parse_args(std::env::args_os()) {
        Some(difficulty) => difficulty,
        None => {
            println!("{}", config::USAGE);
            return Ok(ExitCode::SUCCESS);
        }
    };

    let config = GameConfig::new(difficulty);
    let mut game = SnakeGame::new(config);

    let end = game.run()?;
    println!("{}", end.message(difficulty));
    Ok(ExitCode::from(end.exit_status()))
}
