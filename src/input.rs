use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

/// What one poll of the keyboard asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Move(Direction),
    Exit,
    None,
}

impl InputEvent {
    pub fn requested_direction(&self) -> Option<Direction> {
        match self {
            InputEvent::Move(dir) => Some(*dir),
            _ => None,
        }
    }
}

pub fn map_key(ev: &KeyEvent) -> InputEvent {
    if is_ctrl_c(ev) {
        return InputEvent::Exit;
    }

    match ev.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => InputEvent::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => InputEvent::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => InputEvent::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => InputEvent::Move(Direction::Right),
        KeyCode::F(10) | KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => InputEvent::Exit,
        _ => InputEvent::None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    ev.code == KeyCode::Char('c') && ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrows_and_wasd() {
        assert_eq!(map_key(&key(KeyCode::Up)), InputEvent::Move(Direction::Up));
        assert_eq!(map_key(&key(KeyCode::Down)), InputEvent::Move(Direction::Down));
        assert_eq!(map_key(&key(KeyCode::Left)), InputEvent::Move(Direction::Left));
        assert_eq!(map_key(&key(KeyCode::Right)), InputEvent::Move(Direction::Right));
        assert_eq!(map_key(&key(KeyCode::Char('w'))), InputEvent::Move(Direction::Up));
        assert_eq!(map_key(&key(KeyCode::Char('D'))), InputEvent::Move(Direction::Right));
    }

    #[test]
    fn test_exit_keys() {
        assert_eq!(map_key(&key(KeyCode::F(10))), InputEvent::Exit);
        assert_eq!(map_key(&key(KeyCode::Esc)), InputEvent::Exit);
        assert_eq!(map_key(&key(KeyCode::Char('q'))), InputEvent::Exit);
        assert_eq!(map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), InputEvent::Exit);
    }

    #[test]
    fn test_other_keys_are_none() {
        assert_eq!(map_key(&key(KeyCode::Char('c'))), InputEvent::None);
        assert_eq!(map_key(&key(KeyCode::Enter)), InputEvent::None);
        assert_eq!(map_key(&key(KeyCode::F(1))), InputEvent::None);
        assert_eq!(InputEvent::None.requested_direction(), None);
        assert_eq!(InputEvent::Move(Direction::Left).requested_direction(), Some(Direction::Left));
    }
}
