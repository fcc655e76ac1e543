//! State store trait definition.

use async_trait::async_trait;

use crate::error::StateError;

/// Persistence for the id of the newest processed post.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Last processed id, `None` when nothing usable is stored.
    async fn load_last_id(&self) -> Option<String>;

    async fn save_last_id(&self, id: &str) -> Result<(), StateError>;

    async fn clear(&self) -> Result<(), StateError>;
}
