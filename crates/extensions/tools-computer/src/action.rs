//! Action requests and their validated form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ComputerError;

/// The closed set of action names the tool accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Key,
    Type,
    MouseMove,
    LeftClick,
    LeftClickDrag,
    RightClick,
    MiddleClick,
    DoubleClick,
    Screenshot,
    CursorPosition,
}

impl ActionKind {
    pub const ALL: [ActionKind; 10] = [
        ActionKind::Key,
        ActionKind::Type,
        ActionKind::MouseMove,
        ActionKind::LeftClick,
        ActionKind::LeftClickDrag,
        ActionKind::RightClick,
        ActionKind::MiddleClick,
        ActionKind::DoubleClick,
        ActionKind::Screenshot,
        ActionKind::CursorPosition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Key => "key",
            ActionKind::Type => "type",
            ActionKind::MouseMove => "mouse_move",
            ActionKind::LeftClick => "left_click",
            ActionKind::LeftClickDrag => "left_click_drag",
            ActionKind::RightClick => "right_click",
            ActionKind::MiddleClick => "middle_click",
            ActionKind::DoubleClick => "double_click",
            ActionKind::Screenshot => "screenshot",
            ActionKind::CursorPosition => "cursor_position",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = ComputerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ComputerError::InvalidAction(s.to_string()))
    }
}

/// A point in agent space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// A raw request as issued by the agent.
///
/// `text` and `coordinate` stay untyped until validation so that wrong types
/// are reported as invalid arguments rather than decoding failures. Unknown
/// extra keys are ignored and `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub action: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<serde_json::Value>,
}

impl ActionRequest {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            text: None,
            coordinate: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(serde_json::Value::String(text.into()));
        self
    }

    pub fn with_coordinate(mut self, x: u32, y: u32) -> Self {
        self.coordinate = Some(serde_json::json!([x, y]));
        self
    }

    /// Decode tool parameters into a request.
    pub fn from_value(params: serde_json::Value) -> Result<Self, ComputerError> {
        if !params.is_object() {
            return Err(ComputerError::InvalidArgument(
                "parameters must be an object".to_string(),
            ));
        }
        serde_json::from_value(params).map_err(|e| ComputerError::InvalidArgument(e.to_string()))
    }
}

/// A request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Key { text: String },
    Type { text: String },
    MouseMove { coordinate: Coordinate },
    LeftClickDrag { coordinate: Coordinate },
    LeftClick,
    RightClick,
    MiddleClick,
    DoubleClick,
    Screenshot,
    CursorPosition,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Key { .. } => ActionKind::Key,
            Action::Type { .. } => ActionKind::Type,
            Action::MouseMove { .. } => ActionKind::MouseMove,
            Action::LeftClickDrag { .. } => ActionKind::LeftClickDrag,
            Action::LeftClick => ActionKind::LeftClick,
            Action::RightClick => ActionKind::RightClick,
            Action::MiddleClick => ActionKind::MiddleClick,
            Action::DoubleClick => ActionKind::DoubleClick,
            Action::Screenshot => ActionKind::Screenshot,
            Action::CursorPosition => ActionKind::CursorPosition,
        }
    }
}
