//! Seam between the dispatcher and the OS automation layer.

use std::time::Duration;

use image::RgbaImage;

use crate::error::BackendError;
use crate::input::MouseButton;

/// Blocking input and capture primitives.
///
/// Implementations are called from tokio's blocking pool, never from an async
/// worker thread.
#[cfg_attr(test, mockall::automock)]
pub trait ComputerBackend: Send + Sync {
    /// Size of the primary display in pixels.
    fn screen_size(&self) -> Result<(u32, u32), BackendError>;

    /// Move the cursor to an absolute position.
    fn move_mouse(&self, x: i32, y: i32) -> Result<(), BackendError>;

    /// Press and hold a mouse button.
    fn mouse_down(&self, button: MouseButton) -> Result<(), BackendError>;

    /// Release a mouse button.
    fn mouse_up(&self, button: MouseButton) -> Result<(), BackendError>;

    /// Click at the current cursor position.
    fn click(&self, button: MouseButton) -> Result<(), BackendError>;

    /// Double click at the current cursor position.
    fn double_click(&self, button: MouseButton) -> Result<(), BackendError>;

    /// Press a key combination: every key down in order, then up in reverse.
    fn press_keys(&self, keys: &[String]) -> Result<(), BackendError>;

    /// Type text literally, pausing `interval` after each character.
    fn type_text(&self, text: &str, interval: Duration) -> Result<(), BackendError>;

    /// Current cursor position in physical pixels.
    fn cursor_position(&self) -> Result<(i32, i32), BackendError>;

    /// Capture the full primary screen.
    fn capture_screen(&self) -> Result<RgbaImage, BackendError>;
}
