//! Publisher trait definition.

use async_trait::async_trait;

use crate::error::PublishError;
use crate::types::FeedPost;

/// Successful delivery summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Number of HTTP attempts it took.
    pub attempts: u32,
    pub status: u16,
}

#[async_trait]
pub trait Publisher: Send + Sync {
    /// Deliver `post`. `translated` may be empty, in which case `original` is shown.
    async fn publish(
        &self,
        post: &FeedPost,
        translated: &str,
        original: &str,
    ) -> Result<Delivery, PublishError>;
}
