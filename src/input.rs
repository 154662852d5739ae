//! Keyboard mapping
//!
//! Turns raw key codes or key names into player directions. Anything that is
//! not a movement key maps to `None` and is ignored by the caller.

use crate::sim::Direction;

impl Direction {
    /// Legacy DOM `keyCode` values for the arrow keys
    pub fn from_key_code(code: u32) -> Option<Direction> {
        match code {
            37 => Some(Direction::Left),
            38 => Some(Direction::Up),
            39 => Some(Direction::Right),
            40 => Some(Direction::Down),
            _ => None,
        }
    }

    /// DOM `KeyboardEvent.key` names (arrows and WASD)
    pub fn from_key_name(key: &str) -> Option<Direction> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Map a key code to a command, with unmapped keys becoming a no-op
pub fn command_for_key_code(code: u32) -> Direction {
    Direction::from_key_code(code).unwrap_or_default()
}

/// Map a key name to a command, with unmapped keys becoming a no-op
pub fn command_for_key_name(key: &str) -> Direction {
    Direction::from_key_name(key).unwrap_or_default()
}
