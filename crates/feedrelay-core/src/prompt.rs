//! Composite translation input.
//!
//! The translator's system prompt understands three markers:
//!
//! - `[<re-share header>]` opens a re-shared post
//! - `[SHARED_CONTENT]` precedes the re-shared text
//! - `[LINK_PREVIEW]` precedes link-card title and description

use feedrelay_protocols::FeedPost;

pub const SHARED_CONTENT_TAG: &str = "[SHARED_CONTENT]";
pub const LINK_PREVIEW_TAG: &str = "[LINK_PREVIEW]";
const UNKNOWN_RETRUTH_HEADER: &str = "ReTruthed from ???";

/// Build the tagged text sent to the translator, `None` when there is
/// nothing to translate.
pub fn compose_translation_input(
    post: &FeedPost,
    original_text: &str,
    card_content: &str,
) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if post.is_retruth {
        let header = post
            .retruth_header
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or(UNKNOWN_RETRUTH_HEADER);
        parts.push(format!("[{}]", header));
        if !original_text.is_empty() {
            parts.push(SHARED_CONTENT_TAG.to_string());
            parts.push(original_text.to_string());
        }
    } else if !original_text.is_empty() {
        parts.push(original_text.to_string());
    }

    if !card_content.is_empty() {
        parts.push(format!("\n{}", LINK_PREVIEW_TAG));
        parts.push(card_content.to_string());
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("\n"))
    }
}

#[cfg(test)]
#[path = "prompt_tests.rs"]
mod tests;
