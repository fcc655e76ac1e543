//! CDP page session for interacting with a single page.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{Value, json};
use tracing::debug;

use super::client::Connection;
use super::error::CdpError;
use super::protocol::exception_text;

/// Interval between DOM polls while waiting.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A flat session attached to one page target.
pub struct PageSession {
    target_id: String,
    session_id: String,
    conn: Arc<Connection>,
}

impl PageSession {
    pub(crate) fn new(target_id: String, session_id: String, conn: Arc<Connection>) -> Self {
        Self {
            target_id,
            session_id,
            conn,
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Send a CDP command to this page session.
    pub async fn call(&self, method: &str, params: Option<Value>) -> Result<Value, CdpError> {
        self.conn.call(method, params, Some(&self.session_id)).await
    }

    pub(crate) async fn enable_domains(&self) -> Result<(), CdpError> {
        self.call("Page.enable", None).await?;
        self.call("Runtime.enable", None).await?;
        debug!("Enabled CDP domains for session {}", self.session_id);
        Ok(())
    }

    /// Override the user agent for every request made by this page.
    pub async fn set_user_agent(&self, user_agent: &str) -> Result<(), CdpError> {
        self.call(
            "Network.setUserAgentOverride",
            Some(json!({"userAgent": user_agent})),
        )
        .await?;
        Ok(())
    }

    /// Evaluate a JavaScript expression and return its value as JSON.
    pub async fn evaluate(&self, expression: &str) -> Result<Value, CdpError> {
        let result = self
            .call(
                "Runtime.evaluate",
                Some(json!({
                    "expression": expression,
                    "returnByValue": true,
                    "awaitPromise": true,
                })),
            )
            .await?;

        if let Some(text) = exception_text(&result) {
            return Err(CdpError::JavaScript(text));
        }

        Ok(result["result"]["value"].clone())
    }

    /// Navigate and wait until the DOM is parsed (`domcontentloaded`).
    pub async fn navigate(&self, url: &str, timeout: Duration) -> Result<(), CdpError> {
        let start = Instant::now();
        let result = tokio::time::timeout(
            timeout,
            self.call("Page.navigate", Some(json!({"url": url}))),
        )
        .await
        .map_err(|_| CdpError::Timeout(format!("Navigation to {} timed out", url)))??;

        if let Some(error) = result.get("errorText").and_then(Value::as_str) {
            return Err(CdpError::NavigationFailed(format!("{}: {}", url, error)));
        }

        self.wait_for_dom(timeout.saturating_sub(start.elapsed())).await?;
        debug!("Navigated to {}", url);
        Ok(())
    }

    /// Poll until the new document is at least `interactive`.
    async fn wait_for_dom(&self, timeout: Duration) -> Result<(), CdpError> {
        const READY: &str = "location.href !== 'about:blank' && \
            (document.readyState === 'interactive' || document.readyState === 'complete')";

        let start = Instant::now();
        loop {
            if self.evaluate(READY).await?.as_bool() == Some(true) {
                return Ok(());
            }
            if start.elapsed() > timeout {
                return Err(CdpError::Timeout("Page load timeout".to_string()));
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    /// Wait for a CSS selector to match at least one element.
    pub async fn wait_for_selector(&self, selector: &str, timeout: Duration) -> Result<(), CdpError> {
        let expression = selector_probe(selector)?;
        let start = Instant::now();

        loop {
            if self.evaluate(&expression).await?.as_bool() == Some(true) {
                return Ok(());
            }

            if start.elapsed() > timeout {
                return Err(CdpError::Timeout(format!(
                    "Waiting for selector '{}' timed out",
                    selector
                )));
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }
}

/// Expression that is `true` once `selector` matches.
fn selector_probe(selector: &str) -> Result<String, CdpError> {
    let quoted = serde_json::to_string(selector)?;
    Ok(format!("document.querySelector({}) !== null", quoted))
}
