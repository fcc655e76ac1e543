//! Extraction scripts evaluated inside the page.
//!
//! Both return plain JSON objects whose keys match the serde names of
//! [`FeedPost`](feedrelay_protocols::FeedPost) and
//! [`PostDetails`](feedrelay_protocols::PostDetails).

/// Rendered post cards on the listing.
pub const CARD_SELECTOR: &str = "div.rounded-xl.border";

/// Main text block on a post page.
pub const STATUS_CONTENT_SELECTOR: &str = "div.status__content";

/// Stage 1: every card carrying a "View on Truth Social" link, ascending by id.
pub const FEED_SCRIPT: &str = r#"(() => {
    const posts = [];
    const cards = document.querySelectorAll('div.rounded-xl.border');

    cards.forEach(card => {
        const link = Array.from(card.querySelectorAll('a')).find(a =>
            a.innerText.includes('View on Truth Social') && a.href.includes('truthsocial.com')
        );
        if (!link) return;

        const url = link.href;
        const contentEl = card.querySelector('div.text-sm.font-medium.whitespace-pre-wrap');
        const content = contentEl ? contentEl.innerText.trim() : "";

        const timeEl = Array.from(card.querySelectorAll('div')).find(div =>
            div.innerText.includes('@') && div.innerText.includes('ET')
        );
        const timestamp_str = timeEl ? timeEl.innerText.trim() : "";

        const matches = url.match(/posts\/(\d+)/);
        const id = matches ? matches[1] : "";

        // Skip avatars and icons.
        const media_urls = Array.from(card.querySelectorAll('img'))
            .filter(img => img.naturalWidth > 150 || img.naturalHeight > 150)
            .map(img => img.src);

        if (id) {
            posts.push({ id, url, content, timestamp_str, media_urls, source: "rollcall" });
        }
    });

    posts.sort((a, b) => {
        const x = BigInt(a.id);
        const y = BigInt(b.id);
        return x < y ? -1 : (x > y ? 1 : 0);
    });
    return posts;
})()"#;

/// Stage 2: re-share header, full text, link card and media of one post.
pub const DETAILS_SCRIPT: &str = r#"(() => {
    const res = {
        is_retruth: false,
        retruth_header: "",
        full_text: "",
        media_urls: [],
        video_url: null,
        card_content: ""
    };

    const headerEl = document.querySelector('.status__header');
    if (headerEl && headerEl.innerText.includes('ReTruthed')) {
        res.is_retruth = true;
        res.retruth_header = headerEl.innerText.trim();
    }

    const contentEl = document.querySelector('.status__content');
    if (contentEl) {
        res.full_text = contentEl.innerText.trim();
    }

    const cardEl = document.querySelector('a.status-card');
    if (cardEl) {
        const title = cardEl.querySelector('strong.status-card__title')?.innerText.trim();
        const desc = cardEl.querySelector('.status-card__description')?.innerText.trim();
        if (title || desc) {
            res.card_content = [title, desc].filter(Boolean).join("\n");
        }
    }

    const mediaDiv = document.querySelector('.status__media');
    if (mediaDiv) {
        res.media_urls = Array.from(mediaDiv.querySelectorAll('img')).map(img => img.src);
        const videoEl = mediaDiv.querySelector('video');
        if (videoEl && videoEl.src) {
            res.video_url = videoEl.src;
        }
    }

    return res;
})()"#;

#[cfg(test)]
mod tests {
    use super::*;
    use feedrelay_protocols::{FeedPost, PostDetails};
    use serde_json::json;

    #[test]
    fn test_scripts_are_expressions() {
        for script in [FEED_SCRIPT, DETAILS_SCRIPT] {
            assert!(script.starts_with("(() => {"));
            assert!(script.ends_with("})()"));
        }
    }

    #[test]
    fn test_scripts_use_shared_selectors() {
        assert!(FEED_SCRIPT.contains(CARD_SELECTOR));
        assert!(DETAILS_SCRIPT.contains(".status__content"));
    }

    #[test]
    fn test_feed_script_shape_deserializes() {
        let value = json!([{
            "id": "114881234567890123",
            "url": "https://truthsocial.com/@realDonaldTrump/posts/114881234567890123",
            "content": "MAKE AMERICA GREAT AGAIN!",
            "timestamp_str": "July 18, 2025 @ 9:15 PM ET",
            "media_urls": ["https://static-assets-1.truthsocial.com/tmtg:prime-ts-assets/x.jpg"],
            "source": "rollcall"
        }]);
        let posts: Vec<FeedPost> = serde_json::from_value(value).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].timestamp_str, "July 18, 2025 @ 9:15 PM ET");
        assert!(!posts[0].is_retruth);
        assert!(posts[0].video_url.is_none());
    }

    #[test]
    fn test_details_script_shape_deserializes() {
        let value = json!({
            "is_retruth": true,
            "retruth_header": "Donald J. Trump ReTruthed",
            "full_text": "Full text",
            "media_urls": [],
            "video_url": null,
            "card_content": "Title\nDescription"
        });
        let details: PostDetails = serde_json::from_value(value).unwrap();
        assert!(details.is_retruth);
        assert!(details.video_url.is_none());
        assert_eq!(details.card_content, "Title\nDescription");
    }
}
