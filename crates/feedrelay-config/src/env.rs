//! Environment-variable overlay.
//!
//! Container deployments configure the service purely through environment
//! variables; they take precedence over anything read from a TOML file.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::schema::Config;

pub const ENV_DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const ENV_ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
const ENV_ANTHROPIC_MODEL: &str = "ANTHROPIC_MODEL";
const ENV_CHECK_INTERVAL: &str = "CHECK_INTERVAL";
const ENV_DATA_DIR: &str = "DATA_DIR";
const ENV_FORCE_REPROCESS: &str = "FORCE_REPROCESS";
const ENV_MAX_CYCLES: &str = "MAX_CYCLES";
const ENV_FEED_URL: &str = "FEED_URL";
const ENV_CHROME_PATH: &str = "CHROME_PATH";
const ENV_HEADLESS: &str = "HEADLESS";

/// Applies environment variables on top of a loaded [`Config`].
pub struct EnvOverlay;

impl EnvOverlay {
    /// Overlay the current process environment.
    pub fn apply(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_with(config, |key| std::env::var(key).ok())
    }

    /// Overlay values from an arbitrary lookup. Empty values are ignored.
    pub fn apply_with<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(ENV_DISCORD_WEBHOOK_URL) {
            config.discord.webhook_url = Some(url);
        }
        if let Some(key) = get(ENV_ANTHROPIC_API_KEY) {
            config.anthropic.api_key = Some(key);
        }
        if let Some(model) = get(ENV_ANTHROPIC_MODEL) {
            config.anthropic.model = model;
        }
        if let Some(raw) = get(ENV_CHECK_INTERVAL) {
            config.monitor.check_interval_secs = parse_number(ENV_CHECK_INTERVAL, &raw)?;
        }
        if let Some(dir) = get(ENV_DATA_DIR) {
            config.monitor.data_dir = PathBuf::from(dir);
        }
        if let Some(raw) = get(ENV_FORCE_REPROCESS) {
            config.monitor.force_reprocess = parse_flag(&raw);
        }
        if let Some(raw) = get(ENV_MAX_CYCLES) {
            config.monitor.max_cycles = parse_number(ENV_MAX_CYCLES, &raw)?;
        }
        if let Some(url) = get(ENV_FEED_URL) {
            config.browser.feed_url = url;
        }
        if let Some(path) = get(ENV_CHROME_PATH) {
            config.browser.chrome_path = Some(PathBuf::from(path));
        }
        if let Some(raw) = get(ENV_HEADLESS) {
            config.browser.headless = parse_flag(&raw);
        }

        Ok(())
    }

    /// Names of required settings that are still unset after loading.
    pub fn missing_required(config: &Config) -> Vec<String> {
        let mut missing = Vec::new();
        if config.discord.webhook_url.as_deref().is_none_or(str::is_empty) {
            missing.push(ENV_DISCORD_WEBHOOK_URL.to_string());
        }
        if config.anthropic.api_key.as_deref().is_none_or(str::is_empty) {
            missing.push(ENV_ANTHROPIC_API_KEY.to_string());
        }
        missing
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "true" | "1" | "yes")
}

fn parse_number<T: std::str::FromStr>(field: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("'{}' is not a valid number", raw),
    })
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
