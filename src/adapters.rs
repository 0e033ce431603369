//! Glue between the config file, the tool and the filesystem.

use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::Engine;
use tracing::info;

use computer_use_config::ComputerConfig;
use computer_use_tools_computer::ComputerSettings;

/// Get the .computer-use directory path.
pub(crate) fn computer_use_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".computer-use"))
        .unwrap_or_else(|| PathBuf::from(".computer-use"))
}

/// Map the `[computer]` config section onto tool settings.
pub(crate) fn computer_settings(config: &ComputerConfig) -> ComputerSettings {
    ComputerSettings {
        max_width: config.max_width,
        scaling_enabled: config.scaling_enabled,
        screenshot_delay: Duration::from_millis(config.screenshot_delay_ms),
        typing_delay: Duration::from_millis(config.typing_delay_ms),
        typing_group_size: config.typing_group_size,
        display_number: config.display_number,
    }
}

/// Decode a base64 PNG and write it as `screenshot_<id>.png` under `dir`.
pub(crate) fn save_screenshot(
    dir: &Path,
    id: &str,
    base64_image: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let data = base64::engine::general_purpose::STANDARD.decode(base64_image)?;
    std::fs::create_dir_all(dir)?;

    let path = dir.join(format!("screenshot_{}.png", id));
    std::fs::write(&path, data)?;
    info!("Screenshot saved to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computer_settings_from_config() {
        let config = ComputerConfig {
            max_width: 1024,
            scaling_enabled: false,
            screenshot_delay_ms: 250,
            typing_delay_ms: 5,
            typing_group_size: 10,
            display_number: Some(2),
            ..Default::default()
        };
        let settings = computer_settings(&config);
        assert_eq!(settings.max_width, 1024);
        assert!(!settings.scaling_enabled);
        assert_eq!(settings.screenshot_delay, Duration::from_millis(250));
        assert_eq!(settings.typing_delay, Duration::from_millis(5));
        assert_eq!(settings.typing_group_size, 10);
        assert_eq!(settings.display_number, Some(2));
    }

    #[test]
    fn test_default_config_matches_default_settings() {
        let settings = computer_settings(&ComputerConfig::default());
        let defaults = ComputerSettings::default();
        assert_eq!(settings.max_width, defaults.max_width);
        assert_eq!(settings.screenshot_delay, defaults.screenshot_delay);
        assert_eq!(settings.typing_delay, defaults.typing_delay);
        assert_eq!(settings.typing_group_size, defaults.typing_group_size);
    }

    #[test]
    fn test_save_screenshot() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("outputs");
        let encoded = base64::engine::general_purpose::STANDARD.encode(b"\x89PNG");

        let path = save_screenshot(&out, "abc", &encoded).unwrap();
        assert_eq!(path, out.join("screenshot_abc.png"));
        assert_eq!(std::fs::read(&path).unwrap(), b"\x89PNG");
    }

    #[test]
    fn test_save_screenshot_rejects_bad_base64() {
        let dir = tempfile::tempdir().unwrap();
        assert!(save_screenshot(dir.path(), "x", "not base64!").is_err());
    }

    #[test]
    fn test_computer_use_dir() {
        assert!(computer_use_dir().ends_with(".computer-use"));
    }
}
