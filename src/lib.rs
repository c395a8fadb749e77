//! Snake on a walled 30x30 board, drawn in the terminal.
//!
//! The game rules (`grid`, `snake`, `food`, `state`, `motion`) have no I/O and
//! can be driven directly; `term`, `input`, `render` and `game` wire them to a
//! crossterm terminal.

pub mod config;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod motion;
pub mod render;
pub mod snake;
pub mod state;
pub mod term;

pub use grid::{Cell, Grid};
pub use motion::{Collision, MotionEngine, StepOutcome};
pub use snake::{Direction, Snake};
pub use state::GameState;
