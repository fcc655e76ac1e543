//! Anthropic-backed [`Translator`](feedrelay_protocols::Translator).

mod api;
mod client;
mod prompt;
mod translator;

pub use client::{API_VERSION, AnthropicClient};
pub use prompt::TRANSLATION_SYSTEM_PROMPT;
pub use translator::{HungarianTranslator, extract_urls, has_translatable_content};
