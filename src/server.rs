//! Startup and the stdin/stdout serving loop.

use std::path::{Path, PathBuf};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use computer_use_config::{
    Config, ConfigError, ConfigLoader, ConfigValidator, LoggingConfig, ValidationWarning,
};
use computer_use_protocols::tool::{Tool, ToolContext, ToolResult};
use computer_use_tools_computer::ComputerTool;

use crate::adapters::{computer_settings, computer_use_dir, save_screenshot};

/// Initialize tracing with console and file output.
///
/// Console output goes to stderr so stdout stays free for results. Log files
/// rotate daily under `logging.log_dir` (default ~/.computer-use/logs).
pub(crate) fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = logging
        .log_dir_path()
        .unwrap_or_else(|| computer_use_dir().join("logs"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("computer-use")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the writer alive for the program duration
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(true),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

/// Load and validate the configuration file, falling back to defaults.
///
/// Validation errors fail the load; warnings are returned for logging once
/// tracing is up.
pub(crate) fn load_config(path: &Path) -> Result<(Config, Vec<ValidationWarning>), ConfigError> {
    let config = ConfigLoader::load_or_default(path)?;

    let validation = ConfigValidator::validate(&config);
    if let Some(first) = validation.errors.first() {
        let message = validation
            .errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(ConfigError::InvalidValue {
            field: first.path.clone(),
            message,
        });
    }

    Ok((config, validation.warnings))
}

/// Build the tool against the local desktop.
pub(crate) async fn build_tool(config: &Config) -> Result<ComputerTool, Box<dyn std::error::Error>> {
    let settings = computer_settings(&config.computer);
    let tool = tokio::task::spawn_blocking(move || ComputerTool::desktop(settings)).await??;
    info!(
        "Computer tool ready ({}x{})",
        tool.geometry().target_width,
        tool.geometry().target_height
    );
    Ok(tool)
}

/// Execute one call through the `Tool` surface, saving any screenshot.
pub(crate) async fn invoke(
    tool: &dyn Tool,
    params: serde_json::Value,
    ctx: ToolContext,
    output_dir: Option<&Path>,
) -> ToolResult {
    let correlation_id = ctx.correlation_id.clone();

    let outcome = match tool.validate(&params) {
        Ok(()) => tool.execute(params, ctx).await,
        Err(e) => Err(e),
    };
    let result = match outcome {
        Ok(result) => result,
        Err(e) => {
            warn!(%correlation_id, "Tool call failed: {}", e);
            ToolResult::error(e.to_string())
        }
    };

    if let (Some(dir), Some(image)) = (output_dir, result.base64_image.as_deref()) {
        if let Err(e) = save_screenshot(dir, &correlation_id, image) {
            error!("Failed to save screenshot: {}", e);
        }
    }

    result
}

/// Handle one request line and build the response object.
///
/// A string `id` on the request is echoed back and used as the correlation ID.
pub(crate) async fn handle_line(
    tool: &dyn Tool,
    session: &str,
    line: &str,
    output_dir: Option<&Path>,
) -> serde_json::Value {
    let params: serde_json::Value = match serde_json::from_str(line) {
        Ok(params) => params,
        Err(e) => return response(None, ToolResult::error(format!("Invalid JSON: {}", e))),
    };

    let id = params
        .get("id")
        .and_then(|v| v.as_str())
        .map(str::to_string);
    let mut ctx = ToolContext::new(session);
    if let Some(id) = &id {
        ctx = ctx.with_correlation_id(id.clone());
    }

    let result = invoke(tool, params, ctx, output_dir).await;
    response(id, result)
}

fn response(id: Option<String>, result: ToolResult) -> serde_json::Value {
    let mut value = serde_json::to_value(&result).unwrap_or_else(|e| {
        serde_json::json!({ "success": false, "error": e.to_string() })
    });
    if let (Some(id), Some(object)) = (id, value.as_object_mut()) {
        object.insert("id".to_string(), serde_json::Value::String(id));
    }
    value
}

/// Serve JSON-lines requests from stdin until it closes.
pub(crate) async fn run_serve(
    tool: ComputerTool,
    session: String,
    output_dir: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    info!("Serving computer tool on stdin (session {})", session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(&tool, &session, line, output_dir.as_deref()).await;
        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        stdout.write_all(&encoded).await?;
        stdout.flush().await?;
    }

    info!("stdin closed, shutting down");
    Ok(())
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
