use common::{Direction, InputEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Maps a key press to a game input. Releases and repeats are dropped.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputEvent::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputEvent::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputEvent::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputEvent::Turn(Direction::Right))
        }
        KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key(press(KeyCode::Up)), Some(InputEvent::Turn(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Down)), Some(InputEvent::Turn(Direction::Down)));
        assert_eq!(map_key(press(KeyCode::Left)), Some(InputEvent::Turn(Direction::Left)));
        assert_eq!(map_key(press(KeyCode::Right)), Some(InputEvent::Turn(Direction::Right)));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(map_key(press(KeyCode::Char('w'))), Some(InputEvent::Turn(Direction::Up)));
        assert_eq!(map_key(press(KeyCode::Char('A'))), Some(InputEvent::Turn(Direction::Left)));
        assert_eq!(map_key(press(KeyCode::Char('s'))), Some(InputEvent::Turn(Direction::Down)));
        assert_eq!(map_key(press(KeyCode::Char('d'))), Some(InputEvent::Turn(Direction::Right)));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(map_key(press(KeyCode::Char(' '))), Some(InputEvent::Restart));
        assert_eq!(map_key(press(KeyCode::Char('r'))), Some(InputEvent::Restart));
        assert_eq!(map_key(press(KeyCode::Char('q'))), Some(InputEvent::Quit));
        assert_eq!(map_key(press(KeyCode::Esc)), Some(InputEvent::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), Some(InputEvent::Quit));
    }

    #[test]
    fn test_unmapped_and_released_keys() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(press(KeyCode::Tab)), None);

        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Up,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(release), None);
    }
}
