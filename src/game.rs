use anyhow::Result;

use crate::config::{Difficulty, GameConfig};
use crate::input::InputEvent;
use crate::motion::{MotionEngine, StepOutcome};
use crate::render;
use crate::state::GameState;
use crate::term::TermManager;

/// Where the board is drawn on screen.
const BOARD_ORIGIN: (u16, u16) = (2, 1);

/// How a run ended.
#[derive(Debug)]
pub enum GameEnd {
    /// Crash or exit key; holds the final state for the summary.
    Finished(GameState),
    /// The terminal cannot fit the board.
    TerminalTooSmall { size: (u16, u16), needed: (u16, u16) },
}

impl GameEnd {
    /// Process exit status for this ending.
    pub fn exit_status(&self) -> u8 {
        match self {
            GameEnd::Finished(_) => 0,
            GameEnd::TerminalTooSmall { .. } => 1,
        }
    }

    /// What to print once the terminal is back to normal.
    pub fn message(&self, difficulty: Difficulty) -> String {
        match self {
            GameEnd::Finished(state) => render::summary(state, difficulty),
            GameEnd::TerminalTooSmall { size, needed } => format!(
                "\n  Error:  you need to set your terminal window bigger! ({}x{}, need {}x{})\n",
                size.0, size.1, needed.0, needed.1
            ),
        }
    }
}

pub struct SnakeGame {
    config: GameConfig,
    engine: MotionEngine,
    term: TermManager,
}

impl SnakeGame {
    pub fn new(config: GameConfig) -> Self {
        SnakeGame { config, engine: MotionEngine::from_clock(), term: TermManager::new() }
    }

    /// Takes over the terminal, plays until the snake crashes or the player
    /// quits, and restores the terminal before returning.
    pub fn run(&mut self) -> Result<GameEnd> {
        let state = self.engine.new_game(&self.config);

        self.term.setup()?;
        let result = self.check_size().and_then(|small| match small {
            Some(end) => Ok(end),
            None => self.play(state).map(GameEnd::Finished),
        });
        let restored = self.term.restore();

        let end = result?;
        restored?;
        Ok(end)
    }

    fn check_size(&self) -> Result<Option<GameEnd>> {
        let (cols, rows) = self.term.size()?;
        let (min_cols, min_rows) = self.config.min_terminal_size();

        if !self.config.fits_terminal((cols, rows)) {
            log::warn!("terminal {}x{} too small, need more than {}x{}", cols, rows, min_cols, min_rows);
            return Ok(Some(GameEnd::TerminalTooSmall {
                size: (cols, rows),
                needed: (min_cols + 1, min_rows + 1),
            }));
        }

        Ok(None)
    }

    fn play(&mut self, mut state: GameState) -> Result<GameState> {
        let timeout = self.config.tick_timeout();
        log::info!("starting {} game, tick {:?}", self.config.difficulty, timeout);

        loop {
            self.draw(&state)?;

            let input = self.term.poll_input(timeout)?;
            if input == InputEvent::Exit {
                log::info!("exit requested, score {}", state.score());
                break;
            }

            match self.engine.step(&mut state, input.requested_direction()) {
                StepOutcome::Crashed(_) | StepOutcome::Halted => {
                    self.draw(&state)?;
                    break;
                }
                StepOutcome::Moved | StepOutcome::Ate => {}
            }
        }

        Ok(state)
    }

    fn draw(&mut self, state: &GameState) -> Result<()> {
        let lines = render::frame(state, self.config.difficulty);
        self.term.draw_lines(BOARD_ORIGIN, &lines)
    }
}
