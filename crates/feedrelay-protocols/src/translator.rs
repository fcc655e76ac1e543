//! Translator trait definition.

use async_trait::async_trait;

use crate::error::TranslateError;

/// Outcome of a translation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// The input had nothing worth translating (empty or only links).
    Skipped,
    Text(String),
}

impl Translation {
    /// Translated text, empty when skipped.
    pub fn into_text(self) -> String {
        match self {
            Translation::Skipped => String::new(),
            Translation::Text(text) => text,
        }
    }
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str) -> Result<Translation, TranslateError>;
}
