//! Browser lifecycle errors.

use thiserror::Error;

use feedrelay_protocols::SourceError;

use crate::cdp::CdpError;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("Chrome not found. Install Chromium or set CHROME_PATH.")]
    ChromeNotFound,

    #[error("Failed to launch Chrome: {0}")]
    LaunchFailed(String),

    #[error("Chrome did not open its debugging endpoint within {0} ms")]
    StartupTimeout(u64),

    #[error(transparent)]
    Cdp(#[from] CdpError),
}

impl From<BrowserError> for SourceError {
    fn from(e: BrowserError) -> Self {
        match e {
            BrowserError::Cdp(CdpError::NavigationFailed(msg)) => SourceError::Navigation(msg),
            BrowserError::Cdp(CdpError::JavaScript(msg)) => SourceError::Extraction(msg),
            BrowserError::Cdp(CdpError::Serialization(e)) => SourceError::Extraction(e.to_string()),
            other => SourceError::Browser(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_source_error() {
        let err: SourceError = BrowserError::ChromeNotFound.into();
        assert!(matches!(err, SourceError::Browser(_)));

        let err: SourceError =
            BrowserError::Cdp(CdpError::NavigationFailed("net::ERR_ABORTED".to_string())).into();
        assert!(matches!(err, SourceError::Navigation(ref m) if m == "net::ERR_ABORTED"));

        let err: SourceError =
            BrowserError::Cdp(CdpError::JavaScript("ReferenceError".to_string())).into();
        assert!(matches!(err, SourceError::Extraction(_)));
    }

    #[test]
    fn test_startup_timeout_display() {
        let err = BrowserError::StartupTimeout(6000);
        assert!(err.to_string().contains("6000 ms"));
    }
}
