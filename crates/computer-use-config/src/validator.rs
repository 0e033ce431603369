//! Configuration validation.

use crate::schema::Config;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_computer(config, &mut result);
        Self::validate_logging(config, &mut result);

        result
    }

    fn validate_computer(config: &Config, result: &mut ValidationResult) {
        let computer = &config.computer;

        if computer.max_width == 0 {
            result.add_error(ValidationError::new(
                "computer.max_width",
                "max_width must be greater than 0",
            ));
        }

        if computer.typing_group_size == 0 {
            result.add_error(ValidationError::new(
                "computer.typing_group_size",
                "typing_group_size must be greater than 0",
            ));
        }

        if computer.output_dir.trim().is_empty() {
            result.add_error(ValidationError::new(
                "computer.output_dir",
                "output_dir cannot be empty",
            ));
        }

        if computer.typing_delay_ms > 1000 {
            result.add_warning(ValidationWarning::new(
                "computer.typing_delay_ms",
                "typing_delay_ms is above one second per character",
            ));
        }

        if computer.screenshot_delay_ms > 10_000 {
            result.add_warning(ValidationWarning::new(
                "computer.screenshot_delay_ms",
                "screenshot_delay_ms is above ten seconds",
            ));
        }
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        if config.logging.level.trim().is_empty() {
            result.add_error(ValidationError::new(
                "logging.level",
                "level cannot be empty",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
