//! Webhook delivery with 429 handling.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{error, info, warn};

use feedrelay_config::DiscordConfig;
use feedrelay_protocols::{Delivery, FeedPost, PublishError, Publisher};

use crate::embed::{WebhookPayload, build_embed};

/// Longest wait honoured for a single rate limit.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(300);

const FALLBACK_RETRY_AFTER: Duration = Duration::from_secs(5);

/// Posts embeds to one Discord webhook.
pub struct DiscordPublisher {
    webhook_url: String,
    client: reqwest::Client,
    max_attempts: u32,
    default_retry_after: Duration,
    /// Added on top of `Retry-After` before retrying.
    retry_padding: Duration,
}

impl DiscordPublisher {
    pub fn new(webhook_url: impl Into<String>, config: &DiscordConfig) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| PublishError::Network(e.to_string()))?;

        Ok(Self {
            webhook_url: webhook_url.into(),
            client,
            max_attempts: config.max_attempts.max(1),
            default_retry_after: wait_from_secs(config.default_retry_after_secs)
                .unwrap_or(FALLBACK_RETRY_AFTER),
            retry_padding: Duration::from_secs(1),
        })
    }

    pub fn from_config(config: &DiscordConfig) -> Result<Self, PublishError> {
        let url = config
            .webhook_url
            .clone()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| PublishError::NotConfigured("DISCORD_WEBHOOK_URL is not set".to_string()))?;
        Self::new(url, config)
    }

    pub fn with_retry_padding(mut self, padding: Duration) -> Self {
        self.retry_padding = padding;
        self
    }

    /// Send `payload`, waiting out rate limits.
    pub async fn send(&self, payload: &WebhookPayload) -> Result<Delivery, PublishError> {
        for attempt in 1..=self.max_attempts {
            info!("Sending Discord request (attempt {})", attempt);

            let response = self
                .client
                .post(&self.webhook_url)
                .json(payload)
                .send()
                .await
                .map_err(|e| PublishError::Network(e.to_string()))?;

            let status = response.status();
            match status {
                StatusCode::OK | StatusCode::NO_CONTENT => {
                    return Ok(Delivery {
                        attempts: attempt,
                        status: status.as_u16(),
                    });
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    let retry_after = self.retry_after(response.headers());
                    warn!(
                        "Discord rate limit (429), waiting {:.1}s before retry {}/{}",
                        retry_after.as_secs_f64(),
                        attempt,
                        self.max_attempts
                    );
                    if attempt < self.max_attempts {
                        tokio::time::sleep(retry_after.saturating_add(self.retry_padding)).await;
                    }
                }
                _ => {
                    let body = response.text().await.unwrap_or_default();
                    error!("Discord post failed with status {}", status.as_u16());
                    return Err(PublishError::Status {
                        status: status.as_u16(),
                        body,
                    });
                }
            }
        }

        Err(PublishError::RateLimitExhausted {
            attempts: self.max_attempts,
        })
    }

    /// `Retry-After` in (fractional) seconds, falling back to the default.
    fn retry_after(&self, headers: &reqwest::header::HeaderMap) -> Duration {
        headers
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<f64>().ok())
            .and_then(wait_from_secs)
            .unwrap_or(self.default_retry_after)
    }
}

/// Seconds as a wait capped at [`MAX_RETRY_AFTER`]. Negative, NaN and
/// infinite values are rejected.
fn wait_from_secs(secs: f64) -> Option<Duration> {
    if !secs.is_finite() || secs < 0.0 {
        return None;
    }
    let wait = Duration::try_from_secs_f64(secs).unwrap_or(MAX_RETRY_AFTER);
    Some(wait.min(MAX_RETRY_AFTER))
}

#[async_trait]
impl Publisher for DiscordPublisher {
    async fn publish(
        &self,
        post: &FeedPost,
        translated: &str,
        original: &str,
    ) -> Result<Delivery, PublishError> {
        let now = chrono::Local::now().naive_local();
        let payload = WebhookPayload {
            embeds: vec![build_embed(post, translated, original, now)],
        };
        self.send(&payload).await
    }
}

#[cfg(test)]
#[path = "publisher_tests.rs"]
mod tests;
