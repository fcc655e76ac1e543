//! Daemon-related errors.

use thiserror::Error;

/// Errors that can occur while setting up process-level handling.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Failed to set up signal handlers.
    #[error("Failed to set up signal handlers: {0}")]
    SignalSetup(String),

    /// Failed to install the child reaper.
    #[error("Failed to install child reaper: {0}")]
    ReaperSetup(String),
}
