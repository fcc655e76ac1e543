//! Post types shared by every stage of the pipeline.

use serde::{Deserialize, Serialize};

/// A post detected on the aggregator listing, enriched in place by the deep scrape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    /// Decimal post id taken from the `/posts/<id>` segment of `url`.
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub timestamp_str: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub is_retruth: bool,
    #[serde(default)]
    pub retruth_header: Option<String>,
    #[serde(default)]
    pub video_url: Option<String>,
}

fn default_source() -> String {
    "rollcall".to_string()
}

impl FeedPost {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            content: String::new(),
            timestamp_str: String::new(),
            media_urls: Vec::new(),
            source: default_source(),
            is_retruth: false,
            retruth_header: None,
            video_url: None,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// Details extracted from the post's own page.
///
/// The default value stands for "deep scrape failed": callers keep the
/// listing data untouched when they receive it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostDetails {
    pub is_retruth: bool,
    pub retruth_header: String,
    pub full_text: String,
    pub media_urls: Vec<String>,
    pub video_url: Option<String>,
    pub card_content: String,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
