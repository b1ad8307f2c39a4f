//! Keyboard mapping to player directions
//!
//! Arrow keys map to the four directions; every other key maps to `None`,
//! which the player ignores.

use crate::sim::Direction;

/// Map a legacy DOM `keyCode` to a direction
pub fn direction_from_key_code(key_code: u32) -> Option<Direction> {
    match key_code {
        37 => Some(Direction::Left),
        38 => Some(Direction::Up),
        39 => Some(Direction::Right),
        40 => Some(Direction::Down),
        _ => None,
    }
}

/// Map a DOM `KeyboardEvent.key` name to a direction
pub fn direction_from_key(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" | "Left" => Some(Direction::Left),
        "ArrowUp" | "Up" => Some(Direction::Up),
        "ArrowRight" | "Right" => Some(Direction::Right),
        "ArrowDown" | "Down" => Some(Direction::Down),
        _ => None,
    }
}

/// Non-movement commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Pause,
    ToggleIdle,
    ToggleFps,
}

/// Map a key name to a non-movement command
pub fn command_from_key(key: &str) -> Option<Command> {
    match key {
        "Escape" | "p" | "P" => Some(Command::Pause),
        "i" | "I" => Some(Command::ToggleIdle),
        "f" | "F" => Some(Command::ToggleFps),
        _ => None,
    }
}

/// Extract a direction from a keyboard event, preferring `key` over `keyCode`
#[cfg(target_arch = "wasm32")]
pub fn direction_from_event(event: &web_sys::KeyboardEvent) -> Option<Direction> {
    direction_from_key(&event.key()).or_else(|| direction_from_key_code(event.key_code()))
}
