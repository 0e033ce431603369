//! Errors raised by the computer tool.

use thiserror::Error;

use computer_use_protocols::error::ToolError;

use crate::input::InputError;
use crate::screenshot::ScreenshotError;

/// Errors from a single `computer` action.
#[derive(Debug, Error)]
pub enum ComputerError {
    /// Malformed or contradictory request fields. Raised before any side effect.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Action name outside the supported set.
    #[error("Invalid action: {0}")]
    InvalidAction(String),

    /// The automation or capture backend failed, possibly after a partial action.
    #[error("Backend failure: {0}")]
    Backend(#[from] BackendError),
}

impl ComputerError {
    /// True when no side effect can have happened.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::InvalidAction(_))
    }
}

/// Failures of the OS automation layer.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Screenshot(#[from] ScreenshotError),

    #[error("Blocking task failed: {0}")]
    Task(String),
}

impl From<ComputerError> for ToolError {
    fn from(err: ComputerError) -> Self {
        if err.is_validation() {
            ToolError::InvalidParameters(err.to_string())
        } else {
            ToolError::ExecutionFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computer_error_display() {
        let err = ComputerError::InvalidArgument("coordinate is required for mouse_move".into());
        assert_eq!(
            err.to_string(),
            "Invalid argument: coordinate is required for mouse_move"
        );

        let err = ComputerError::InvalidAction("nonexistent".into());
        assert_eq!(err.to_string(), "Invalid action: nonexistent");

        let err = ComputerError::from(BackendError::Input(InputError::InvalidKey("hyper".into())));
        assert_eq!(err.to_string(), "Backend failure: Invalid key: hyper");
    }

    #[test]
    fn test_is_validation() {
        assert!(ComputerError::InvalidArgument("x".into()).is_validation());
        assert!(ComputerError::InvalidAction("x".into()).is_validation());
        assert!(!ComputerError::Backend(BackendError::Task("panicked".into())).is_validation());
    }

    #[test]
    fn test_into_tool_error() {
        let err: ToolError = ComputerError::InvalidAction("zoom".into()).into();
        assert!(matches!(err, ToolError::InvalidParameters(msg) if msg.contains("zoom")));

        let err: ToolError =
            ComputerError::Backend(BackendError::Screenshot(ScreenshotError::NoMonitor)).into();
        assert!(matches!(err, ToolError::ExecutionFailed(msg) if msg.contains("No monitor")));
    }
}
