//! Translation provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Empty response from model")]
    EmptyResponse,
}

impl TranslateError {
    /// Map a non-success HTTP response onto an error variant.
    pub fn from_api_response(status: u16, message: String) -> Self {
        match status {
            401 | 403 => TranslateError::Authentication(message),
            429 => TranslateError::RateLimited(message),
            _ => TranslateError::Api { status, message },
        }
    }
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
