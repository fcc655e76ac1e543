//! Thin Messages API client.

use std::time::Duration;

use tracing::debug;

use feedrelay_protocols::TranslateError;

use crate::api::{ApiRequest, ApiResponse};

pub const API_VERSION: &str = "2023-06-01";

/// Authenticated client for `<base_url>/v1/messages`.
pub struct AnthropicClient {
    api_key: String,
    base_url: String,
    http: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    pub(crate) async fn create_message(
        &self,
        request: &ApiRequest,
    ) -> Result<ApiResponse, TranslateError> {
        debug!(model = %request.model, "Sending Messages API request");

        let response = self
            .http
            .post(self.endpoint())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION)
            .header("content-type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            // {"type": "error", "error": {"type": "...", "message": "..."}}
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(String::from))
                .unwrap_or(body);
            return Err(TranslateError::from_api_response(status, message));
        }

        response
            .json()
            .await
            .map_err(|e| TranslateError::Network(e.to_string()))
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
