use macroquad::input::KeyCode;

use crate::game::Command;
use crate::grid::Direction;

/// Polling order for keys that go down in the same frame. Turns come first,
/// in the same up/down/left/right order the frame loop always checked them.
pub const POLL_ORDER: [KeyCode; 18] = [
    KeyCode::Up,
    KeyCode::W,
    KeyCode::Down,
    KeyCode::S,
    KeyCode::Left,
    KeyCode::A,
    KeyCode::Right,
    KeyCode::D,
    KeyCode::R,
    KeyCode::P,
    KeyCode::Minus,
    KeyCode::Equal,
    KeyCode::Y,
    KeyCode::N,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Space,
    KeyCode::Escape,
];

/// Sorts the keys pressed this frame into a stable order. Keys outside
/// `POLL_ORDER` still count (dialogs close on any key) and go last.
pub fn frame_keys(pressed: impl IntoIterator<Item = KeyCode>) -> Vec<KeyCode> {
    let mut keys: Vec<KeyCode> = pressed.into_iter().collect();
    keys.sort_by_key(|key| {
        match POLL_ORDER.iter().position(|polled| polled == key) {
            Some(rank) => (0, rank),
            None => (1, *key as usize),
        }
    });
    keys.dedup();
    keys
}

/// Keys understood by the game screen. `Escape` is handled by the app and never reaches here.
pub fn command_for_key(key: KeyCode) -> Command {
    match key {
        KeyCode::Right | KeyCode::D => Command::Turn(Direction::Right),
        KeyCode::Left | KeyCode::A => Command::Turn(Direction::Left),
        KeyCode::Up | KeyCode::W => Command::Turn(Direction::Up),
        KeyCode::Down | KeyCode::S => Command::Turn(Direction::Down),
        KeyCode::R => Command::Restart,
        KeyCode::P => Command::TogglePause,
        _ => Command::Other,
    }
}

/// Direction nudge for list navigation in menus.
pub fn vertical_step(key: KeyCode) -> Option<i32> {
    match key {
        KeyCode::Up | KeyCode::W => Some(-1),
        KeyCode::Down | KeyCode::S => Some(1),
        _ => None,
    }
}

pub fn horizontal_step(key: KeyCode) -> Option<i32> {
    match key {
        KeyCode::Left | KeyCode::A | KeyCode::Minus => Some(-1),
        KeyCode::Right | KeyCode::D | KeyCode::Equal => Some(1),
        _ => None,
    }
}

pub fn is_confirm(key: KeyCode) -> bool {
    matches!(key, KeyCode::Enter | KeyCode::KpEnter | KeyCode::Space)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(command_for_key(KeyCode::Up), Command::Turn(Direction::Up));
        assert_eq!(command_for_key(KeyCode::W), Command::Turn(Direction::Up));
        assert_eq!(command_for_key(KeyCode::A), Command::Turn(Direction::Left));
        assert_eq!(command_for_key(KeyCode::Down), Command::Turn(Direction::Down));
        assert_eq!(command_for_key(KeyCode::D), Command::Turn(Direction::Right));
    }

    #[test]
    fn letters_restart_and_pause() {
        assert_eq!(command_for_key(KeyCode::R), Command::Restart);
        assert_eq!(command_for_key(KeyCode::P), Command::TogglePause);
        assert_eq!(command_for_key(KeyCode::X), Command::Other);
        assert_eq!(command_for_key(KeyCode::Space), Command::Other);
    }

    #[test]
    fn same_frame_keys_come_out_in_poll_order() {
        let keys = frame_keys([KeyCode::Right, KeyCode::X, KeyCode::Escape, KeyCode::Up]);
        assert_eq!(
            keys,
            vec![KeyCode::Up, KeyCode::Right, KeyCode::Escape, KeyCode::X]
        );

        let reversed = frame_keys([KeyCode::Up, KeyCode::Escape, KeyCode::X, KeyCode::Right]);
        assert_eq!(reversed, keys);
        assert!(frame_keys([]).is_empty());
    }

    #[test]
    fn menu_navigation_keys() {
        assert_eq!(vertical_step(KeyCode::Up), Some(-1));
        assert_eq!(vertical_step(KeyCode::S), Some(1));
        assert_eq!(vertical_step(KeyCode::Left), None);
        assert_eq!(horizontal_step(KeyCode::Minus), Some(-1));
        assert_eq!(horizontal_step(KeyCode::Right), Some(1));
        assert!(is_confirm(KeyCode::Enter));
        assert!(!is_confirm(KeyCode::Escape));
    }
}
