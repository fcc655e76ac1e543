//! State store errors.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to write state file {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Data directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    #[error("Failed to create data directory {path}: {reason}")]
    CreateDir { path: PathBuf, reason: String },
}
