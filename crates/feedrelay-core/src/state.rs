//! Last-processed-id persistence.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use feedrelay_protocols::{StateError, StateStore};

/// File holding the last processed id, relative to the data directory.
pub const STATE_FILE_NAME: &str = "last_id.txt";

const WRITE_PROBE_NAME: &str = ".write_test";

/// Plain-text state file inside the data directory.
///
/// ```text
/// {data_dir}/
/// └── last_id.txt
/// ```
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(STATE_FILE_NAME),
        }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl StateStore for FileStateStore {
    async fn load_last_id(&self) -> Option<String> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let id = content.trim().to_string();
                if id.is_empty() { None } else { Some(id) }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Could not read state file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    async fn save_last_id(&self, id: &str) -> Result<(), StateError> {
        fs::write(&self.path, id)
            .await
            .map_err(|e| StateError::Write {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        debug!("Saved last id {} to {}", id, self.path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StateError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StateError::Write {
                path: self.path.clone(),
                reason: e.to_string(),
            }),
        }
    }
}

/// In-memory state store for testing.
#[derive(Default)]
pub struct MemoryStateStore {
    last_id: RwLock<Option<String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_last_id(id: impl Into<String>) -> Self {
        Self {
            last_id: RwLock::new(Some(id.into())),
        }
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load_last_id(&self) -> Option<String> {
        self.last_id.read().await.clone()
    }

    async fn save_last_id(&self, id: &str) -> Result<(), StateError> {
        *self.last_id.write().await = Some(id.to_string());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StateError> {
        *self.last_id.write().await = None;
        Ok(())
    }
}

/// Create the data directory if needed and prove it is writable.
pub async fn ensure_data_dir(path: &Path) -> Result<(), StateError> {
    if !path.exists() {
        fs::create_dir_all(path)
            .await
            .map_err(|e| StateError::CreateDir {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        info!("Data directory created: {}", path.display());
    }

    let probe = path.join(WRITE_PROBE_NAME);
    let not_writable = |e: std::io::Error| StateError::NotWritable {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };
    fs::write(&probe, b"").await.map_err(not_writable)?;
    fs::remove_file(&probe).await.map_err(not_writable)?;

    info!("Data directory is writable: {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
