//! Configuration schema definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub computer: ComputerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the computer tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputerConfig {
    /// Widest screen the agent is shown; wider displays are scaled down.
    #[serde(default = "default_max_width")]
    pub max_width: u32,

    /// Translate between agent and physical coordinates.
    #[serde(default = "default_true")]
    pub scaling_enabled: bool,

    /// Pause before a screenshot so earlier actions can render.
    #[serde(default = "default_screenshot_delay_ms")]
    pub screenshot_delay_ms: u64,

    /// Delay between typed characters.
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,

    /// Characters typed per blocking backend call.
    #[serde(default = "default_typing_group_size")]
    pub typing_group_size: usize,

    /// X display number advertised to the model, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_number: Option<u32>,

    /// Directory screenshots are written to by the CLI.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_width(),
            scaling_enabled: true,
            screenshot_delay_ms: default_screenshot_delay_ms(),
            typing_delay_ms: default_typing_delay_ms(),
            typing_group_size: default_typing_group_size(),
            display_number: None,
            output_dir: default_output_dir(),
        }
    }
}

impl ComputerConfig {
    /// Output directory with `~` expanded.
    pub fn output_dir_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.output_dir).as_ref())
    }
}

fn default_max_width() -> u32 {
    1280
}

fn default_true() -> bool {
    true
}

fn default_screenshot_delay_ms() -> u64 {
    1000
}

fn default_typing_delay_ms() -> u64 {
    12
}

fn default_typing_group_size() -> usize {
    50
}

fn default_output_dir() -> String {
    "/tmp/outputs".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for rolling log files; defaults to `~/.computer-use/logs`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            log_dir: None,
        }
    }
}

impl LoggingConfig {
    /// Configured log directory with `~` expanded.
    pub fn log_dir_path(&self) -> Option<PathBuf> {
        self.log_dir
            .as_deref()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).as_ref()))
    }
}

fn default_level() -> String {
    "info".to_string()
}
