//! Hungarian translation of composite post text.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{info, warn};

use feedrelay_config::AnthropicConfig;
use feedrelay_protocols::{TranslateError, Translation, Translator};

use crate::api::{ApiMessage, ApiRequest};
use crate::client::AnthropicClient;
use crate::prompt::TRANSLATION_SYSTEM_PROMPT;

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("url pattern is valid"));

/// Shortest URL-free remainder worth a model call.
const MIN_TRANSLATABLE_CHARS: usize = 10;

/// Every `http(s)://` token in `text`, in order.
pub fn extract_urls(text: &str) -> Vec<&str> {
    URL_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Whether anything but links is left to translate.
pub fn has_translatable_content(text: &str) -> bool {
    let without_urls = URL_PATTERN.replace_all(text, "");
    without_urls.trim().chars().count() >= MIN_TRANSLATABLE_CHARS
}

/// Translates English posts into Hungarian, keeping URLs, hashtags and mentions.
pub struct HungarianTranslator {
    client: AnthropicClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl HungarianTranslator {
    pub fn new(client: AnthropicClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            max_tokens: 1024,
            temperature: 0.3,
        }
    }

    pub fn from_config(config: &AnthropicConfig) -> Result<Self, TranslateError> {
        let api_key = config
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| TranslateError::Authentication("ANTHROPIC_API_KEY is not set".to_string()))?;

        let client = AnthropicClient::new(
            api_key,
            config.base_url.as_str(),
            Duration::from_secs(config.timeout_seconds),
        )?;

        Ok(Self {
            client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(&self, text: &str) -> ApiRequest {
        ApiRequest {
            model: self.model.clone(),
            messages: vec![ApiMessage::user(text)],
            system: Some(TRANSLATION_SYSTEM_PROMPT.to_string()),
            max_tokens: self.max_tokens,
            temperature: Some(self.temperature),
        }
    }
}

#[async_trait]
impl Translator for HungarianTranslator {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(Translation::Skipped);
        }
        if !has_translatable_content(text) {
            info!("Skipping translation: text is only URLs/links");
            return Ok(Translation::Skipped);
        }

        let response = self.client.create_message(&self.build_request(text)).await?;
        let translated = response
            .first_text()
            .map(str::trim)
            .ok_or(TranslateError::EmptyResponse)?
            .to_string();

        let original_urls: HashSet<&str> = extract_urls(text).into_iter().collect();
        let translated_urls: HashSet<&str> = extract_urls(&translated).into_iter().collect();
        if original_urls != translated_urls {
            warn!("URL mismatch in translation");
        }

        info!(
            "Translated text ({} -> {} chars)",
            text.chars().count(),
            translated.chars().count()
        );
        Ok(Translation::Text(translated))
    }
}

#[cfg(test)]
#[path = "translator_tests.rs"]
mod tests;
