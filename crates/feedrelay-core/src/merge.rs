//! Folding deep-scrape details into a listing post.

use feedrelay_protocols::{FeedPost, PostDetails};

/// Merge `details` into `post`, keeping listing data wherever the deep
/// scrape came back empty.
pub fn merge_details(post: &mut FeedPost, details: &PostDetails) {
    post.is_retruth = details.is_retruth;
    if details.is_retruth {
        post.retruth_header = Some(details.retruth_header.clone());
    }

    if let Some(ref video) = details.video_url {
        if !video.is_empty() {
            post.video_url = Some(video.clone());
        }
    }

    if details.full_text.chars().count() > post.content.chars().count() {
        post.content = details.full_text.clone();
    }

    if !details.media_urls.is_empty() {
        post.media_urls = details.media_urls.clone();
    }
}
