//! One-shot commands: `describe` and `exec`.

use std::path::Path;

use tracing::info;

use computer_use_protocols::tool::{Tool, ToolContext};
use computer_use_tools_computer::{ActionRequest, ComputerTool};

use crate::server::invoke;

/// Print the capability descriptor and tool definition.
pub(crate) fn describe(tool: &ComputerTool) -> Result<(), Box<dyn std::error::Error>> {
    let description = serde_json::json!({
        "descriptor": tool.to_params(),
        "definition": tool.definition().to_anthropic_tool(),
    });
    println!("{}", serde_json::to_string_pretty(&description)?);
    Ok(())
}

/// Build the request for `exec` from command-line arguments.
pub(crate) fn exec_request(
    action: String,
    text: Option<String>,
    coordinate: Option<(u32, u32)>,
) -> ActionRequest {
    let mut request = ActionRequest::new(action);
    if let Some(text) = text {
        request = request.with_text(text);
    }
    if let Some((x, y)) = coordinate {
        request = request.with_coordinate(x, y);
    }
    request
}

/// Run one action and print the result.
///
/// Returns whether the action succeeded.
pub(crate) async fn exec(
    tool: &ComputerTool,
    request: ActionRequest,
    output_dir: &Path,
) -> Result<bool, Box<dyn std::error::Error>> {
    let ctx = ToolContext::new("cli");
    info!(correlation_id = %ctx.correlation_id, "Running {}", request.action);

    let params = serde_json::to_value(&request)?;
    let result = invoke(tool, params, ctx, Some(output_dir)).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(result.success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exec_request_plain() {
        let request = exec_request("left_click".to_string(), None, None);
        assert_eq!(request, ActionRequest::new("left_click"));
    }

    #[test]
    fn test_exec_request_with_fields() {
        let request = exec_request(
            "mouse_move".to_string(),
            None,
            Some((640, 360)),
        );
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({"action": "mouse_move", "coordinate": [640, 360]})
        );

        let request = exec_request("type".to_string(), Some("hi".to_string()), None);
        assert_eq!(request.text, Some(serde_json::json!("hi")));
    }
}
