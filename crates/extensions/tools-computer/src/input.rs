//! Mouse and keyboard input through enigo.

use std::thread;
use std::time::Duration;

use enigo::{Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use thiserror::Error;

/// Input control errors.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Input failed: {0}")]
    Failed(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl From<enigo::InputError> for InputError {
    fn from(err: enigo::InputError) -> Self {
        InputError::Failed(err.to_string())
    }
}

impl From<enigo::NewConError> for InputError {
    fn from(err: enigo::NewConError) -> Self {
        InputError::Failed(err.to_string())
    }
}

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl From<MouseButton> for Button {
    fn from(btn: MouseButton) -> Self {
        match btn {
            MouseButton::Left => Button::Left,
            MouseButton::Right => Button::Right,
            MouseButton::Middle => Button::Middle,
        }
    }
}

/// Gap between the two clicks of a double click.
const DOUBLE_CLICK_GAP: Duration = Duration::from_millis(50);

const FUNCTION_KEYS: [Key; 12] = [
    Key::F1,
    Key::F2,
    Key::F3,
    Key::F4,
    Key::F5,
    Key::F6,
    Key::F7,
    Key::F8,
    Key::F9,
    Key::F10,
    Key::F11,
    Key::F12,
];

/// One connection to the OS input layer.
pub struct InputController {
    enigo: Enigo,
}

impl InputController {
    pub fn new() -> Result<Self, InputError> {
        Ok(Self {
            enigo: Enigo::new(&Settings::default())?,
        })
    }

    /// Move the cursor to an absolute position.
    pub fn mouse_move(&mut self, x: i32, y: i32) -> Result<(), InputError> {
        Ok(self.enigo.move_mouse(x, y, Coordinate::Abs)?)
    }

    pub fn mouse_click(&mut self, button: MouseButton) -> Result<(), InputError> {
        self.button(button, Direction::Click)
    }

    pub fn mouse_double_click(&mut self, button: MouseButton) -> Result<(), InputError> {
        self.button(button, Direction::Click)?;
        thread::sleep(DOUBLE_CLICK_GAP);
        self.button(button, Direction::Click)
    }

    pub fn mouse_down(&mut self, button: MouseButton) -> Result<(), InputError> {
        self.button(button, Direction::Press)
    }

    pub fn mouse_up(&mut self, button: MouseButton) -> Result<(), InputError> {
        self.button(button, Direction::Release)
    }

    pub fn cursor_location(&self) -> Result<(i32, i32), InputError> {
        Ok(self.enigo.location()?)
    }

    /// Type text one character at a time, sleeping `interval` after each.
    pub fn type_text(&mut self, text: &str, interval: Duration) -> Result<(), InputError> {
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            self.enigo.text(ch.encode_utf8(&mut buf))?;
            if !interval.is_zero() {
                thread::sleep(interval);
            }
        }
        Ok(())
    }

    /// Press a key combination: all keys down in order, then up in reverse.
    ///
    /// Every name is resolved first, so an unknown key presses nothing.
    pub fn hotkey(&mut self, names: &[&str]) -> Result<(), InputError> {
        let keys = names
            .iter()
            .map(|name| parse_key(name))
            .collect::<Result<Vec<_>, _>>()?;

        for key in &keys {
            self.enigo.key(*key, Direction::Press)?;
        }
        for key in keys.iter().rev() {
            self.enigo.key(*key, Direction::Release)?;
        }
        Ok(())
    }

    fn button(&mut self, button: MouseButton, direction: Direction) -> Result<(), InputError> {
        Ok(self.enigo.button(button.into(), direction)?)
    }
}

/// Map a normalized key name to an enigo key.
fn parse_key(name: &str) -> Result<Key, InputError> {
    let lowered = name.to_lowercase();
    let key = match lowered.as_str() {
        "enter" | "return" => Key::Return,
        "tab" => Key::Tab,
        "space" => Key::Space,
        "backspace" => Key::Backspace,
        "delete" | "del" => Key::Delete,
        "escape" | "esc" => Key::Escape,
        "home" => Key::Home,
        "end" => Key::End,
        "pageup" | "page_up" => Key::PageUp,
        "pagedown" | "page_down" => Key::PageDown,
        "up" => Key::UpArrow,
        "down" => Key::DownArrow,
        "left" => Key::LeftArrow,
        "right" => Key::RightArrow,
        "capslock" | "caps_lock" => Key::CapsLock,

        "ctrl" | "control" => Key::Control,
        "alt" => Key::Alt,
        "shift" => Key::Shift,
        "command" | "meta" | "win" => Key::Meta,

        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Key::Unicode(c),
                (Some('f'), Some(_)) => function_key(&other[1..])
                    .ok_or_else(|| InputError::InvalidKey(name.to_string()))?,
                _ => return Err(InputError::InvalidKey(name.to_string())),
            }
        }
    };

    Ok(key)
}

fn function_key(number: &str) -> Option<Key> {
    let n: usize = number.parse().ok()?;
    FUNCTION_KEYS.get(n.checked_sub(1)?).copied()
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
