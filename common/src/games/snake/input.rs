use super::types::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Escape,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyPressed(Key),
}

/// Turn produced by pressing `key` while heading `current`.
///
/// Only quarter turns exist: the key for the current direction, for its
/// reverse, or Escape yields `None`.
pub fn turn_for_key(current: Direction, key: Key) -> Option<Direction> {
    match (current.is_horizontal(), key) {
        (true, Key::Up) => Some(Direction::Up),
        (true, Key::Down) => Some(Direction::Down),
        (false, Key::Left) => Some(Direction::Left),
        (false, Key::Right) => Some(Direction::Right),
        _ => None,
    }
}
