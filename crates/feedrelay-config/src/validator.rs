//! Configuration validation.

use crate::env::EnvOverlay;
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

/// Upper bound for a single rate-limit wait.
const MAX_RETRY_AFTER_SECS: f64 = 300.0;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_required(config, &mut result);
        Self::validate_discord(config, &mut result);
        Self::validate_anthropic(config, &mut result);
        Self::validate_monitor(config, &mut result);
        Self::validate_browser(config, &mut result);

        result
    }

    fn validate_required(config: &Config, result: &mut ValidationResult) {
        for name in EnvOverlay::missing_required(config) {
            result.add_error(ValidationError::new(name, "required setting is not set"));
        }
    }

    fn validate_discord(config: &Config, result: &mut ValidationResult) {
        if let Some(ref url) = config.discord.webhook_url {
            if !is_http_url(url) {
                result.add_error(ValidationError::new(
                    "discord.webhook_url",
                    "webhook_url must start with http:// or https://",
                ));
            }
        }

        if config.discord.max_attempts == 0 {
            result.add_error(ValidationError::new(
                "discord.max_attempts",
                "max_attempts must be greater than 0",
            ));
        }

        let retry_after = config.discord.default_retry_after_secs;
        if !retry_after.is_finite() || retry_after < 0.0 {
            result.add_error(ValidationError::new(
                "discord.default_retry_after_secs",
                "default_retry_after_secs must be a finite, non-negative number",
            ));
        } else if retry_after > MAX_RETRY_AFTER_SECS {
            result.add_error(ValidationError::new(
                "discord.default_retry_after_secs",
                format!("default_retry_after_secs cannot exceed {}", MAX_RETRY_AFTER_SECS),
            ));
        }
    }

    fn validate_anthropic(config: &Config, result: &mut ValidationResult) {
        if !is_http_url(&config.anthropic.base_url) {
            result.add_error(ValidationError::new(
                "anthropic.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if config.anthropic.model.trim().is_empty() {
            result.add_error(ValidationError::new(
                "anthropic.model",
                "model cannot be empty",
            ));
        }

        if config.anthropic.max_tokens == 0 {
            result.add_error(ValidationError::new(
                "anthropic.max_tokens",
                "max_tokens must be greater than 0",
            ));
        }

        if !(0.0..=1.0).contains(&config.anthropic.temperature) {
            result.add_error(ValidationError::new(
                "anthropic.temperature",
                "temperature must be between 0.0 and 1.0",
            ));
        }
    }

    fn validate_monitor(config: &Config, result: &mut ValidationResult) {
        if config.monitor.check_interval_secs == 0 {
            result.add_error(ValidationError::new(
                "monitor.check_interval_secs",
                "check_interval_secs must be greater than 0",
            ));
        } else if config.monitor.check_interval_secs < 10 {
            result.add_warning(ValidationWarning::new(
                "monitor.check_interval_secs",
                "check interval below 10 seconds launches a browser very often and may get the scraper blocked",
            ));
        }

        if config.monitor.max_cycles == 0 {
            result.add_error(ValidationError::new(
                "monitor.max_cycles",
                "max_cycles must be greater than 0",
            ));
        }

        if config.monitor.force_reprocess {
            result.add_warning(ValidationWarning::new(
                "monitor.force_reprocess",
                "stored state will be ignored on startup",
            ));
        }
    }

    fn validate_browser(config: &Config, result: &mut ValidationResult) {
        if !is_http_url(&config.browser.feed_url) {
            result.add_error(ValidationError::new(
                "browser.feed_url",
                "feed_url must start with http:// or https://",
            ));
        }

        if let Some(ref path) = config.browser.chrome_path {
            if !path.exists() {
                result.add_warning(ValidationWarning::new(
                    "browser.chrome_path",
                    format!("Chrome binary does not exist: {:?}", path),
                ));
            }
        }

        if config.browser.feed_hard_limit_secs == 0 || config.browser.details_hard_limit_secs == 0 {
            result.add_error(ValidationError::new(
                "browser",
                "hard limits must be greater than 0",
            ));
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
