//! Feed source trait definition.

use async_trait::async_trait;

use crate::error::SourceError;
use crate::types::{FeedPost, PostDetails};

/// Two-stage post source: a cheap listing scan and a per-post deep scrape.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Stage 1: posts currently on the listing, sorted ascending by id.
    async fn fetch_feed(&self) -> Result<Vec<FeedPost>, SourceError>;

    /// Stage 2: details from the post's own page.
    async fn fetch_details(&self, url: &str) -> Result<PostDetails, SourceError>;
}
