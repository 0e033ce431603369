//! The `computer` tool: validates, scales and dispatches agent actions.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, info, warn};

use computer_use_protocols::error::ToolError;
use computer_use_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};
use computer_use_protocols::types::RiskLevel;

use crate::action::{Action, ActionKind, ActionRequest, Coordinate};
use crate::backend::ComputerBackend;
use crate::desktop::DesktopBackend;
use crate::error::{BackendError, ComputerError};
use crate::geometry::{CoordinateScaler, DisplayGeometry, ScalingDirection, DEFAULT_MAX_WIDTH};
use crate::input::MouseButton;
use crate::keys::normalize_key_combo;
use crate::result::ActionResult;
use crate::screenshot::{self, ScreenshotError};
use crate::validator::validate;

/// Tool name advertised to the model.
pub const TOOL_NAME: &str = "computer";

/// Tool protocol version tag.
pub const API_TYPE: &str = "computer_20241022";

/// Tunables for [`ComputerTool`].
#[derive(Debug, Clone)]
pub struct ComputerSettings {
    pub max_width: u32,
    pub scaling_enabled: bool,
    /// Pause before capturing so earlier actions can render.
    pub screenshot_delay: Duration,
    /// Pause after each typed character.
    pub typing_delay: Duration,
    /// Characters per blocking `type_text` call.
    pub typing_group_size: usize,
    pub display_number: Option<u32>,
}

impl Default for ComputerSettings {
    fn default() -> Self {
        Self {
            max_width: DEFAULT_MAX_WIDTH,
            scaling_enabled: true,
            screenshot_delay: Duration::from_secs(1),
            typing_delay: Duration::from_millis(12),
            typing_group_size: 50,
            display_number: None,
        }
    }
}

/// What the tool tells the model about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapabilityDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub api_type: String,
    pub display_width_px: u32,
    pub display_height_px: u32,
    pub display_number: Option<u32>,
}

/// Lets an agent use the mouse, keyboard and screen.
pub struct ComputerTool {
    definition: ToolDefinition,
    backend: Arc<dyn ComputerBackend>,
    scaler: CoordinateScaler,
    settings: ComputerSettings,
}

impl ComputerTool {
    /// Build the tool, reading the display size from `backend` once.
    ///
    /// Blocks on the backend; call it at startup, off the async workers.
    pub fn new(
        backend: Arc<dyn ComputerBackend>,
        settings: ComputerSettings,
    ) -> Result<Self, ComputerError> {
        let (width, height) = backend.screen_size()?;
        if width == 0 || height == 0 {
            return Err(BackendError::Screenshot(ScreenshotError::NoMonitor).into());
        }

        let geometry = DisplayGeometry::with_max_width(width, height, settings.max_width);
        info!(
            physical_width = geometry.physical_width,
            physical_height = geometry.physical_height,
            target_width = geometry.target_width,
            target_height = geometry.target_height,
            scale_factor = geometry.scale_factor,
            "Resolved display geometry"
        );

        let definition = ToolDefinition::new(
            TOOL_NAME,
            "Computer",
            "Use a mouse and keyboard to interact with a computer, and take screenshots",
        )
        .with_parameters_schema(parameters_schema())
        .with_risk_level(RiskLevel::High)
        .with_metadata("api_type", serde_json::json!(API_TYPE));

        Ok(Self {
            definition,
            backend,
            scaler: CoordinateScaler::new(geometry, settings.scaling_enabled),
            settings,
        })
    }

    /// Build the tool against the local desktop.
    pub fn desktop(settings: ComputerSettings) -> Result<Self, ComputerError> {
        Self::new(Arc::new(DesktopBackend::new()), settings)
    }

    pub fn geometry(&self) -> &DisplayGeometry {
        self.scaler.geometry()
    }

    pub fn options(&self) -> CapabilityDescriptor {
        let geometry = self.geometry();
        CapabilityDescriptor {
            name: TOOL_NAME.to_string(),
            api_type: API_TYPE.to_string(),
            display_width_px: geometry.target_width,
            display_height_px: geometry.target_height,
            display_number: self.settings.display_number,
        }
    }

    /// Tool parameters in the shape the Messages API expects.
    pub fn to_params(&self) -> serde_json::Value {
        serde_json::to_value(self.options()).unwrap_or_default()
    }

    /// Run one action; failures come back as an error result.
    pub async fn run(&self, request: ActionRequest) -> ActionResult {
        match self.perform(&request).await {
            Ok(result) => result,
            Err(e) => {
                warn!(action = %request.action, "Action failed: {}", e);
                ActionResult::error(e.to_string())
            }
        }
    }

    /// Validate and perform one action.
    pub async fn perform(&self, request: &ActionRequest) -> Result<ActionResult, ComputerError> {
        let action = validate(request)?;
        info!(action = %action.kind(), "Performing action");

        match action {
            Action::MouseMove { coordinate } => {
                let (x, y) = self.to_physical(coordinate)?;
                let backend = self.backend();
                run_blocking(move || backend.move_mouse(x, y)).await?;
                Ok(ActionResult::output(format!(
                    "Mouse moved successfully to X={}, Y={}",
                    x, y
                )))
            }
            Action::LeftClickDrag { coordinate } => {
                let (x, y) = self.to_physical(coordinate)?;
                let backend = self.backend();
                // No rollback: a failed move leaves the button held
                run_blocking(move || {
                    backend.mouse_down(MouseButton::Left)?;
                    backend.move_mouse(x, y)?;
                    backend.mouse_up(MouseButton::Left)
                })
                .await?;
                Ok(ActionResult::output("Mouse drag action completed."))
            }
            Action::Key { text } => {
                let keys = normalize_key_combo(&text);
                debug!(?keys, "Pressing key combination");
                let backend = self.backend();
                run_blocking(move || backend.press_keys(&keys)).await?;
                Ok(ActionResult::output(format!(
                    "Key combination '{}' pressed.",
                    text
                )))
            }
            Action::Type { text } => {
                self.type_text(&text).await?;
                Ok(ActionResult::output(format!("Typed text: {}", text)))
            }
            Action::LeftClick => self.click(MouseButton::Left, "Left click performed.").await,
            Action::RightClick => self.click(MouseButton::Right, "Right click performed.").await,
            Action::MiddleClick => {
                self.click(MouseButton::Middle, "Middle click performed.")
                    .await
            }
            Action::DoubleClick => {
                let backend = self.backend();
                run_blocking(move || backend.double_click(MouseButton::Left)).await?;
                Ok(ActionResult::output("Double click performed."))
            }
            Action::Screenshot => self.screenshot().await,
            Action::CursorPosition => {
                let backend = self.backend();
                let (x, y) = run_blocking(move || backend.cursor_position()).await?;
                // Off-screen (negative) positions clamp to the origin
                let (x, y) = self.scaler.scale(
                    ScalingDirection::ToAgentSpace,
                    u32::try_from(x).unwrap_or(0),
                    u32::try_from(y).unwrap_or(0),
                );
                Ok(ActionResult::output(format!("X={},Y={}", x, y)))
            }
        }
    }

    fn backend(&self) -> Arc<dyn ComputerBackend> {
        Arc::clone(&self.backend)
    }

    fn to_physical(&self, coordinate: Coordinate) -> Result<(i32, i32), ComputerError> {
        let (x, y) = self
            .scaler
            .scale(ScalingDirection::FromAgentSpace, coordinate.x, coordinate.y);
        let out_of_range =
            || ComputerError::InvalidArgument(format!("coordinate {:?} is out of range", coordinate));
        Ok((
            i32::try_from(x).map_err(|_| out_of_range())?,
            i32::try_from(y).map_err(|_| out_of_range())?,
        ))
    }

    async fn click(
        &self,
        button: MouseButton,
        message: &'static str,
    ) -> Result<ActionResult, ComputerError> {
        let backend = self.backend();
        run_blocking(move || backend.click(button)).await?;
        Ok(ActionResult::output(message))
    }

    async fn type_text(&self, text: &str) -> Result<(), ComputerError> {
        let interval = self.settings.typing_delay;
        let chars: Vec<char> = text.chars().collect();

        for group in chars.chunks(self.settings.typing_group_size.max(1)) {
            let chunk: String = group.iter().collect();
            debug!(chars = group.len(), "Typing chunk");
            let backend = self.backend();
            run_blocking(move || backend.type_text(&chunk, interval)).await?;
        }

        Ok(())
    }

    async fn screenshot(&self) -> Result<ActionResult, ComputerError> {
        if !self.settings.screenshot_delay.is_zero() {
            tokio::time::sleep(self.settings.screenshot_delay).await;
        }

        let backend = self.backend();
        let target = self.scaler.screenshot_size();
        let shot = run_blocking(move || {
            let image = backend.capture_screen()?;
            let image = match target {
                Some((width, height)) if image.dimensions() != (width, height) => {
                    screenshot::resize(&image, width, height)
                }
                _ => image,
            };
            Ok(screenshot::encode_png(&image)?)
        })
        .await?;

        debug!(
            "Screenshot captured: {}x{}, {} bytes",
            shot.width,
            shot.height,
            shot.data.len()
        );
        Ok(ActionResult::image(shot.to_base64(), shot.width, shot.height))
    }
}

#[async_trait]
impl Tool for ComputerTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let request = ActionRequest::from_value(params)?;
        debug!(correlation_id = %ctx.correlation_id, action = %request.action, "Executing computer tool");
        let result = self.perform(&request).await?;
        Ok(result.into())
    }
}

// Helper to run blocking backend calls in a spawned task
async fn run_blocking<F, T>(f: F) -> Result<T, ComputerError>
where
    F: FnOnce() -> Result<T, BackendError> + Send + 'static,
    T: Send + 'static,
{
    let result = tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| BackendError::Task(e.to_string()))?;
    Ok(result?)
}

fn parameters_schema() -> serde_json::Value {
    let actions: Vec<&str> = ActionKind::ALL.iter().map(ActionKind::as_str).collect();
    serde_json::json!({
        "type": "object",
        "properties": {
            "action": {
                "type": "string",
                "enum": actions,
                "description": "The action to perform"
            },
            "text": {
                "type": "string",
                "description": "Text to type, or a key combination such as 'ctrl+s' (key and type only)"
            },
            "coordinate": {
                "type": "array",
                "items": { "type": "integer", "minimum": 0 },
                "minItems": 2,
                "maxItems": 2,
                "description": "[x, y] in screenshot pixels (mouse_move and left_click_drag only)"
            }
        },
        "required": ["action"]
    })
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
