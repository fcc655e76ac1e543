//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Aggregator listing scanned in stage 1, newest first.
pub const DEFAULT_FEED_URL: &str =
    "https://rollcall.com/factbase/trump/topic/social/?platform=all&sort=date&sort_order=desc&page=1";

pub const DEFAULT_MODEL: &str = "claude-3-7-sonnet-20250219";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub discord: DiscordConfig,

    #[serde(default)]
    pub anthropic: AnthropicConfig,

    #[serde(default)]
    pub monitor: MonitorConfig,

    #[serde(default)]
    pub browser: BrowserConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub daemon: DaemonConfig,
}

/// Discord webhook output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordConfig {
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// Attempts per post, counting rate-limited retries.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Wait used when a 429 carries no usable `Retry-After`.
    #[serde(default = "default_retry_after")]
    pub default_retry_after_secs: f64,

    #[serde(default = "default_http_timeout")]
    pub timeout_seconds: u64,
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            max_attempts: default_max_attempts(),
            default_retry_after_secs: default_retry_after(),
            timeout_seconds: default_http_timeout(),
        }
    }
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_after() -> f64 {
    5.0
}

fn default_http_timeout() -> u64 {
    30
}

/// Anthropic translation provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnthropicConfig {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_anthropic_base_url")]
    pub base_url: String,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_http_timeout")]
    pub timeout_seconds: u64,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            base_url: default_anthropic_base_url(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_seconds: default_http_timeout(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_anthropic_base_url() -> String {
    "https://api.anthropic.com".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_temperature() -> f32 {
    0.3
}

/// Polling loop behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default = "default_check_interval")]
    pub check_interval_secs: u64,

    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Ignore the stored last id on startup.
    #[serde(default)]
    pub force_reprocess: bool,

    /// Cycles before the process exits on purpose so the container restarts.
    #[serde(default = "default_max_cycles")]
    pub max_cycles: u32,

    /// Pause after each published post.
    #[serde(default = "default_post_delay")]
    pub post_delay_secs: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            check_interval_secs: default_check_interval(),
            data_dir: default_data_dir(),
            force_reprocess: false,
            max_cycles: default_max_cycles(),
            post_delay_secs: default_post_delay(),
        }
    }
}

fn default_check_interval() -> u64 {
    60
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("/data")
}

fn default_max_cycles() -> u32 {
    30
}

fn default_post_delay() -> u64 {
    5
}

/// Headless browser used for scraping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,

    /// Explicit Chrome/Chromium binary; searched for when unset.
    #[serde(default)]
    pub chrome_path: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub headless: bool,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_feed_hard_limit")]
    pub feed_hard_limit_secs: u64,

    #[serde(default = "default_details_hard_limit")]
    pub details_hard_limit_secs: u64,

    /// Time given to client-side rendering after the cards appear.
    #[serde(default = "default_settle")]
    pub settle_secs: u64,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            chrome_path: None,
            headless: true,
            user_agent: default_user_agent(),
            feed_hard_limit_secs: default_feed_hard_limit(),
            details_hard_limit_secs: default_details_hard_limit(),
            settle_secs: default_settle(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_feed_url() -> String {
    DEFAULT_FEED_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_feed_hard_limit() -> u64 {
    180
}

fn default_details_hard_limit() -> u64 {
    45
}

fn default_settle() -> u64 {
    5
}

/// Log output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub json: bool,

    /// Also write daily-rotated files under `<data_dir>/logs`.
    #[serde(default)]
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
            file: false,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Process supervision.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Reap orphaned children even when not running as PID 1.
    #[serde(default)]
    pub reap_orphans: bool,
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
