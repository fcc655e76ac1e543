//! Publisher errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("Webhook returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Still rate limited after {attempts} attempts")]
    RateLimitExhausted { attempts: u32 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Publisher not configured: {0}")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_error_status() {
        let err = PublishError::Status {
            status: 400,
            body: "bad embed".to_string(),
        };
        assert!(err.to_string().contains("400"));
        assert!(err.to_string().contains("bad embed"));
    }

    #[test]
    fn test_publish_error_exhausted() {
        let err = PublishError::RateLimitExhausted { attempts: 3 };
        assert_eq!(err.to_string(), "Still rate limited after 3 attempts");
    }
}
