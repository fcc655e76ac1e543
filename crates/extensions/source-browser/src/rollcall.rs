//! Roll Call Factbase listing plus Truth Social post pages.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, warn};

use feedrelay_config::BrowserConfig;
use feedrelay_core::sort_posts;
use feedrelay_protocols::{FeedPost, FeedSource, PostDetails, SourceError};

use crate::cdp::PageSession;
use crate::error::BrowserError;
use crate::launcher::{BrowserInstance, BrowserLauncher};
use crate::scripts::{CARD_SELECTOR, DETAILS_SCRIPT, FEED_SCRIPT, STATUS_CONTENT_SELECTOR};

const FEED_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);
const FEED_SELECTOR_TIMEOUT: Duration = Duration::from_secs(60);
const DETAILS_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);
const DETAILS_SELECTOR_TIMEOUT: Duration = Duration::from_secs(15);

/// Two-stage scraper driving an ephemeral headless browser per call.
pub struct RollCallSource {
    launcher: BrowserLauncher,
    feed_url: String,
    user_agent: String,
    feed_hard_limit: Duration,
    details_hard_limit: Duration,
    settle: Duration,
}

impl RollCallSource {
    pub fn from_config(config: &BrowserConfig) -> Self {
        Self {
            launcher: BrowserLauncher::new(config.chrome_path.clone(), config.headless),
            feed_url: config.feed_url.clone(),
            user_agent: config.user_agent.clone(),
            feed_hard_limit: Duration::from_secs(config.feed_hard_limit_secs),
            details_hard_limit: Duration::from_secs(config.details_hard_limit_secs),
            settle: Duration::from_secs(config.settle_secs),
        }
    }

    /// Open a page with the configured user agent.
    async fn open_page(&self, browser: &BrowserInstance) -> Result<PageSession, BrowserError> {
        let page = browser.new_page().await?;
        page.set_user_agent(&self.user_agent).await?;
        Ok(page)
    }

    async fn scrape_feed(&self) -> Result<Vec<FeedPost>, SourceError> {
        info!("Opening headless browser to scrape the listing");
        let browser = self.launcher.launch().await?;

        let result = self.extract_feed(&browser).await;
        close_browser(browser).await;

        let mut posts = result?;
        sort_posts(&mut posts);
        info!("Found {} posts on the listing", posts.len());
        Ok(posts)
    }

    async fn extract_feed(&self, browser: &BrowserInstance) -> Result<Vec<FeedPost>, BrowserError> {
        let page = self.open_page(browser).await?;

        let url = cache_busted_url(&self.feed_url, chrono::Utc::now().timestamp());
        page.navigate(&url, FEED_NAVIGATION_TIMEOUT).await?;
        debug!("DOM loaded, waiting for post cards");

        page.wait_for_selector(CARD_SELECTOR, FEED_SELECTOR_TIMEOUT).await?;
        debug!("Post cards found, letting content render");
        tokio::time::sleep(self.settle).await;

        let value = page.evaluate(FEED_SCRIPT).await?;
        Ok(serde_json::from_value(value).map_err(crate::cdp::CdpError::from)?)
    }

    async fn scrape_details(&self, url: &str) -> Result<PostDetails, SourceError> {
        info!("Deep scraping {}", url);
        let browser = self.launcher.launch().await?;

        let details = match self.extract_details(&browser, url).await {
            Ok(details) => {
                debug!(
                    retruth = details.is_retruth,
                    card = !details.card_content.is_empty(),
                    media = details.media_urls.len(),
                    "Extracted post details"
                );
                details
            }
            Err(e) => {
                warn!("Deep scrape navigation failed, skipping: {}", e);
                PostDetails::default()
            }
        };

        close_browser(browser).await;
        Ok(details)
    }

    async fn extract_details(
        &self,
        browser: &BrowserInstance,
        url: &str,
    ) -> Result<PostDetails, BrowserError> {
        let page = self.open_page(browser).await?;
        page.navigate(url, DETAILS_NAVIGATION_TIMEOUT).await?;
        page.wait_for_selector(STATUS_CONTENT_SELECTOR, DETAILS_SELECTOR_TIMEOUT)
            .await?;
        debug!("Post page loaded");

        let value = page.evaluate(DETAILS_SCRIPT).await?;
        Ok(serde_json::from_value(value).map_err(crate::cdp::CdpError::from)?)
    }
}

#[async_trait]
impl FeedSource for RollCallSource {
    async fn fetch_feed(&self) -> Result<Vec<FeedPost>, SourceError> {
        with_hard_limit(self.feed_hard_limit, self.scrape_feed()).await
    }

    async fn fetch_details(&self, url: &str) -> Result<PostDetails, SourceError> {
        with_hard_limit(self.details_hard_limit, self.scrape_details(url)).await
    }
}

/// Abort `work` after `limit`. Dropping the future kills the browser.
async fn with_hard_limit<T>(
    limit: Duration,
    work: impl Future<Output = Result<T, SourceError>>,
) -> Result<T, SourceError> {
    tokio::time::timeout(limit, work)
        .await
        .map_err(|_| SourceError::HardTimeout(limit.as_secs()))?
}

async fn close_browser(browser: BrowserInstance) {
    match browser.close().await {
        Ok(()) => debug!("Browser closed"),
        Err(e) => warn!("Could not close browser cleanly: {}", e),
    }
}

/// Append a `t=<unix seconds>` query parameter so caches never serve a stale listing.
pub fn cache_busted_url(feed_url: &str, unix_secs: i64) -> String {
    let separator = if feed_url.contains('?') { '&' } else { '?' };
    format!("{}{}t={}", feed_url, separator, unix_secs)
}

#[cfg(test)]
#[path = "rollcall_tests.rs"]
mod tests;
