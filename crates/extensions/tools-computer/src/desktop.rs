//! [`ComputerBackend`] backed by enigo (input) and screenshots (capture).

use std::time::Duration;

use image::RgbaImage;

use crate::backend::ComputerBackend;
use crate::error::BackendError;
use crate::input::{InputController, MouseButton};
use crate::screenshot;

/// Drives the local desktop.
///
/// Each call opens its own [`InputController`]; enigo handles are not shared
/// across blocking-pool threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopBackend;

impl DesktopBackend {
    pub fn new() -> Self {
        Self
    }

    fn with_input<T>(
        &self,
        f: impl FnOnce(&mut InputController) -> Result<T, crate::input::InputError>,
    ) -> Result<T, BackendError> {
        let mut controller = InputController::new()?;
        Ok(f(&mut controller)?)
    }
}

impl ComputerBackend for DesktopBackend {
    fn screen_size(&self) -> Result<(u32, u32), BackendError> {
        Ok(screenshot::get_screen_size()?)
    }

    fn move_mouse(&self, x: i32, y: i32) -> Result<(), BackendError> {
        self.with_input(|c| c.mouse_move(x, y))
    }

    fn mouse_down(&self, button: MouseButton) -> Result<(), BackendError> {
        self.with_input(|c| c.mouse_down(button))
    }

    fn mouse_up(&self, button: MouseButton) -> Result<(), BackendError> {
        self.with_input(|c| c.mouse_up(button))
    }

    fn click(&self, button: MouseButton) -> Result<(), BackendError> {
        self.with_input(|c| c.mouse_click(button))
    }

    fn double_click(&self, button: MouseButton) -> Result<(), BackendError> {
        self.with_input(|c| c.mouse_double_click(button))
    }

    fn press_keys(&self, keys: &[String]) -> Result<(), BackendError> {
        let keys: Vec<&str> = keys.iter().map(String::as_str).collect();
        self.with_input(|c| c.hotkey(&keys))
    }

    fn type_text(&self, text: &str, interval: Duration) -> Result<(), BackendError> {
        self.with_input(|c| c.type_text(text, interval))
    }

    fn cursor_position(&self) -> Result<(i32, i32), BackendError> {
        self.with_input(|c| c.cursor_location())
    }

    fn capture_screen(&self) -> Result<RgbaImage, BackendError> {
        Ok(screenshot::capture_primary()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires actual display
    fn test_desktop_screen_size() {
        let (width, height) = DesktopBackend::new().screen_size().unwrap();
        assert!(width > 0 && height > 0);
    }

    #[test]
    #[ignore] // Requires actual input control
    fn test_desktop_cursor_position() {
        assert!(DesktopBackend::new().cursor_position().is_ok());
    }
}
