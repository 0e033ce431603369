//! The `computer` tool: lets an agent drive the mouse, keyboard and screen.
//!
//! ## Actions
//! - `key` - Press a key combination such as `ctrl+s`
//! - `type` - Type text at a human pace
//! - `mouse_move` - Move the cursor
//! - `left_click_drag` - Drag with the left button held
//! - `left_click`, `right_click`, `middle_click`, `double_click` - Click in place
//! - `screenshot` - Capture the screen as a base64 PNG
//! - `cursor_position` - Report where the cursor is
//!
//! Coordinates exchanged with the agent live in a scaled space no wider than
//! the configured maximum; [`CoordinateScaler`] maps them onto the physical
//! display.

mod action;
mod backend;
mod desktop;
mod error;
mod geometry;
mod input;
mod keys;
mod result;
mod screenshot;
mod tool;
mod validator;

pub use action::{Action, ActionKind, ActionRequest, Coordinate};
pub use backend::ComputerBackend;
pub use desktop::DesktopBackend;
pub use error::{BackendError, ComputerError};
pub use geometry::{CoordinateScaler, DisplayGeometry, ScalingDirection, DEFAULT_MAX_WIDTH};
pub use input::{InputController, InputError, MouseButton};
pub use keys::normalize_key_combo;
pub use result::ActionResult;
pub use screenshot::{Screenshot, ScreenshotError};
pub use tool::{CapabilityDescriptor, ComputerSettings, ComputerTool, API_TYPE, TOOL_NAME};
pub use validator::validate;
