//! Polling monitor: detect, deep-scrape, translate, publish, persist.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use feedrelay_config::MonitorConfig;
use feedrelay_protocols::{
    FeedPost, FeedSource, PostDetails, Publisher, StateStore, Translation, Translator,
};

use crate::merge::merge_details;
use crate::prompt::compose_translation_input;
use crate::selection::select_new_posts;

/// Loop timing and lifecycle settings.
#[derive(Debug, Clone)]
pub struct MonitorSettings {
    pub check_interval: Duration,
    pub post_delay: Duration,
    pub max_cycles: u32,
    pub force_reprocess: bool,
}

impl MonitorSettings {
    pub fn from_config(config: &MonitorConfig) -> Self {
        Self {
            check_interval: Duration::from_secs(config.check_interval_secs),
            post_delay: Duration::from_secs(config.post_delay_secs),
            max_cycles: config.max_cycles,
            force_reprocess: config.force_reprocess,
        }
    }
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self::from_config(&MonitorConfig::default())
    }
}

/// What happened during one check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Posts found on the listing.
    pub found: usize,
    /// Posts selected for processing.
    pub new: usize,
    pub published: usize,
    pub failed: usize,
}

/// Why [`Monitor::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// A shutdown signal arrived.
    Shutdown,
    /// `max_cycles` were completed; the process should exit so the
    /// container runtime restarts it with a fresh process table.
    RestartRequested,
}

/// Drives the pipeline over the four seams.
pub struct Monitor {
    source: Arc<dyn FeedSource>,
    translator: Arc<dyn Translator>,
    publisher: Arc<dyn Publisher>,
    state: Arc<dyn StateStore>,
    settings: MonitorSettings,
    last_id: Option<String>,
}

impl Monitor {
    pub fn new(
        source: Arc<dyn FeedSource>,
        translator: Arc<dyn Translator>,
        publisher: Arc<dyn Publisher>,
        state: Arc<dyn StateStore>,
        settings: MonitorSettings,
    ) -> Self {
        Self {
            source,
            translator,
            publisher,
            state,
            settings,
            last_id: None,
        }
    }

    /// Last processed id held in memory.
    pub fn last_id(&self) -> Option<&str> {
        self.last_id.as_deref()
    }

    /// Load the stored id, unless reprocessing is forced.
    pub async fn initialize(&mut self) {
        if self.settings.force_reprocess {
            warn!("FORCE_REPROCESS is set, ignoring saved state");
            self.last_id = None;
            return;
        }

        self.last_id = self.state.load_last_id().await;
        match self.last_id {
            Some(ref id) => info!("Loaded last processed id: {}", id),
            None => info!("No saved state, the next check processes only the newest post"),
        }
    }

    /// Run one check of the listing.
    pub async fn run_cycle(&mut self) -> CycleReport {
        self.run_cycle_until(&CancellationToken::new()).await
    }

    /// Run one check, stopping early on shutdown.
    ///
    /// Shutdown is observed while scraping the listing and between posts.
    /// A post that has started is always finished and persisted, so a
    /// published post is never published again after a restart.
    pub async fn run_cycle_until(&mut self, shutdown: &CancellationToken) -> CycleReport {
        info!("Checking for new posts");
        let mut report = CycleReport::default();

        let fetched = tokio::select! {
            biased;
            _ = shutdown.cancelled() => return report,
            fetched = self.source.fetch_feed() => fetched,
        };
        let posts = match fetched {
            Ok(posts) => posts,
            Err(e) => {
                error!("Feed scrape failed: {}", e);
                Vec::new()
            }
        };
        report.found = posts.len();

        if posts.is_empty() {
            warn!("No posts found on the listing (scrape failed or page empty)");
            return report;
        }

        let new_posts = select_new_posts(&posts, self.last_id.as_deref());
        report.new = new_posts.len();

        if new_posts.is_empty() {
            info!("No new posts since last check");
            return report;
        }

        if self.last_id.is_none() {
            info!(
                post_id = %new_posts[0].id,
                "First run, processing only the newest post to initialize state"
            );
        } else {
            info!("Found {} new posts, starting deep scrape", new_posts.len());
        }

        for post in new_posts {
            if shutdown.is_cancelled() {
                info!("Shutdown requested, leaving remaining posts for the next run");
                break;
            }
            if self.process_post(post).await {
                report.published += 1;
            } else {
                report.failed += 1;
            }
            if !self.settings.post_delay.is_zero() {
                tokio::select! {
                    _ = shutdown.cancelled() => {}
                    _ = tokio::time::sleep(self.settings.post_delay) => {}
                }
            }
        }

        report
    }

    /// Process one post end to end. Returns whether it was published.
    async fn process_post(&mut self, mut post: FeedPost) -> bool {
        info!(post_id = %post.id, "Processing post");

        let details = match self.source.fetch_details(&post.url).await {
            Ok(details) => details,
            Err(e) => {
                warn!(post_id = %post.id, "Deep scrape failed, using listing data: {}", e);
                PostDetails::default()
            }
        };

        let listing_media = post.media_urls.len();
        merge_details(&mut post, &details);
        if details.media_urls.is_empty() {
            debug!(post_id = %post.id, "Deep scrape found no media, keeping {} listing images", listing_media);
        } else {
            debug!(post_id = %post.id, "Using {} deep scrape images", details.media_urls.len());
        }

        let original_text = post.content.trim().to_string();
        let translated = match compose_translation_input(&post, &original_text, &details.card_content) {
            Some(input) => match self.translator.translate(&input).await {
                Ok(Translation::Text(text)) => text,
                Ok(Translation::Skipped) => {
                    info!(post_id = %post.id, "Skipping translation, text is only links");
                    String::new()
                }
                Err(e) => {
                    error!(post_id = %post.id, "Translation failed, posting untranslated text: {}", e);
                    input
                }
            },
            None => String::new(),
        };

        let published = match self.publisher.publish(&post, &translated, &original_text).await {
            Ok(delivery) => {
                info!(
                    post_id = %post.id,
                    attempts = delivery.attempts,
                    "Posted to Discord"
                );
                true
            }
            Err(e) => {
                error!(post_id = %post.id, "Publishing failed: {}", e);
                false
            }
        };

        // The id advances even when publishing failed so a broken post
        // cannot wedge the monitor.
        self.last_id = Some(post.id.clone());
        if let Err(e) = self.state.save_last_id(&post.id).await {
            warn!("Could not save state: {}", e);
        }

        published
    }

    /// Poll until shutdown or until `max_cycles` checks have completed.
    pub async fn run(&mut self, shutdown: CancellationToken) -> RunOutcome {
        self.initialize().await;
        info!(
            "Starting monitoring loop (interval: {}s, restart after {} cycles)",
            self.settings.check_interval.as_secs(),
            self.settings.max_cycles
        );

        let mut cycle_count: u32 = 0;

        loop {
            let report = self.run_cycle_until(&shutdown).await;
            debug!(?report, "Cycle finished");
            if shutdown.is_cancelled() {
                info!("Shutting down gracefully");
                return RunOutcome::Shutdown;
            }

            info!(
                "Waiting {} seconds until next check",
                self.settings.check_interval.as_secs()
            );
            tokio::select! {
                _ = shutdown.cancelled() => {
                    info!("Shutting down gracefully");
                    return RunOutcome::Shutdown;
                }
                _ = tokio::time::sleep(self.settings.check_interval) => {}
            }

            cycle_count += 1;
            if cycle_count >= self.settings.max_cycles {
                info!(
                    "Periodic maintenance: {} cycles completed, exiting to force a clean restart",
                    cycle_count
                );
                return RunOutcome::RestartRequested;
            }
        }
    }
}

#[cfg(test)]
#[path = "monitor_tests.rs"]
mod tests;
