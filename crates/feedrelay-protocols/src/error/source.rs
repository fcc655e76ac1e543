//! Feed source errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Navigation failed: {0}")]
    Navigation(String),

    #[error("Extraction failed: {0}")]
    Extraction(String),

    #[error("Scrape exceeded hard limit of {0} seconds")]
    HardTimeout(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_hard_timeout() {
        let err = SourceError::HardTimeout(180);
        assert!(err.to_string().contains("180"));
        assert!(err.to_string().contains("hard limit"));
    }

    #[test]
    fn test_source_error_browser() {
        let err = SourceError::Browser("Chrome not found".to_string());
        assert_eq!(err.to_string(), "Browser error: Chrome not found");
    }
}
