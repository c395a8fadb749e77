use std::io::{Stdout, Write, stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

use crate::input::{map_key, InputEvent};

/// Owns the terminal while the game runs: raw mode, the alternate screen and
/// the cursor.
pub struct TermManager {
    stdout: Stdout,
    active: bool,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout(), active: false }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.active = true;
        terminal::enable_raw_mode().context("Error enabling raw mode")?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)
            .context("Error hiding cursor")?;
        Ok(())
    }

    /// Puts the terminal back the way it was. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        terminal::disable_raw_mode().context("Error disabling raw mode")?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)
            .context("Error leaving alt screen")?;
        Ok(())
    }

    /// (columns, rows)
    pub fn size(&self) -> Result<(u16, u16)> {
        terminal::size().context("Error reading terminal size")
    }

    /// Waits up to `timeout` for a key. Expiry and non-key events yield
    /// [`InputEvent::None`].
    pub fn poll_input(&self, timeout: Duration) -> Result<InputEvent> {
        match self.poll_key(timeout)? {
            Some(ev) => Ok(map_key(&ev)),
            None => Ok(InputEvent::None),
        }
    }

    fn poll_key(&self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if !poll(timeout).context("Error polling for input")? {
            return Ok(None);
        }

        match read().context("Error reading input")? {
            Event::Key(ev) => Ok(Some(ev)),
            _ => Ok(None),
        }
    }

    /// Clears the screen and prints `lines` starting at `top_left`.
    pub fn draw_lines(&mut self, top_left: (u16, u16), lines: &[String]) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing")?;

        for (i, line) in lines.iter().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(top_left.0, top_left.1 + i as u16),
                style::Print(line)
            )
            .context("Error drawing")?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush().context("Error flushing")
    }
}

impl Default for TermManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            log::error!("failed to restore terminal: {:#}", err);
        }
    }
}
