//! Outcome of one `computer` action.

use serde::Serialize;

use computer_use_protocols::tool::ToolResult;

/// Text and/or image produced by an action, or the reason it failed.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub base64_image: Option<String>,

    /// Width and height of `base64_image`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_size: Option<(u32, u32)>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActionResult {
    pub fn output(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
            ..Default::default()
        }
    }

    pub fn image(base64_image: String, width: u32, height: u32) -> Self {
        Self {
            base64_image: Some(base64_image),
            image_size: Some((width, height)),
            ..Default::default()
        }
    }

    pub fn error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Default::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl From<ActionResult> for ToolResult {
    fn from(result: ActionResult) -> Self {
        if let Some(error) = result.error {
            return ToolResult::error(error);
        }

        let mut tool_result = ToolResult::success(result.output.unwrap_or_default());
        if let Some(image) = result.base64_image {
            tool_result = tool_result.with_image(image);
        }
        if let Some((width, height)) = result.image_size {
            tool_result = tool_result
                .with_metadata("width", serde_json::json!(width))
                .with_metadata("height", serde_json::json!(height));
        }
        tool_result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_result() {
        let result = ActionResult::output("Left click performed.");
        assert!(!result.is_error());
        assert_eq!(result.output.as_deref(), Some("Left click performed."));
        assert!(result.base64_image.is_none());
    }

    #[test]
    fn test_error_result() {
        let result = ActionResult::error("Invalid action: zoom");
        assert!(result.is_error());
        assert!(result.output.is_none());
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let json = serde_json::to_value(ActionResult::output("X=1,Y=2")).unwrap();
        assert_eq!(json, serde_json::json!({"output": "X=1,Y=2"}));
    }

    #[test]
    fn test_into_tool_result_success() {
        let tool_result: ToolResult = ActionResult::output("Typed text: hi").into();
        assert!(tool_result.success);
        assert_eq!(tool_result.content, "Typed text: hi");
        assert!(tool_result.metadata.is_empty());
    }

    #[test]
    fn test_into_tool_result_image() {
        let tool_result: ToolResult = ActionResult::image("aGk=".to_string(), 1280, 720).into();
        assert!(tool_result.success);
        assert!(tool_result.content.is_empty());
        assert_eq!(tool_result.base64_image.as_deref(), Some("aGk="));
        assert_eq!(tool_result.metadata["width"], 1280);
        assert_eq!(tool_result.metadata["height"], 720);
    }

    #[test]
    fn test_into_tool_result_error() {
        let tool_result: ToolResult = ActionResult::error("Backend failure: boom").into();
        assert!(!tool_result.success);
        assert_eq!(tool_result.error.as_deref(), Some("Backend failure: boom"));
    }
}
