use super::*;
use chrono::NaiveDate;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 19)
        .unwrap()
        .and_hms_opt(3, 15, 0)
        .unwrap()
}

fn post() -> FeedPost {
    let mut post = FeedPost::new(
        "114881234567890123",
        "https://truthsocial.com/@realDonaldTrump/posts/114881234567890123",
    );
    post.timestamp_str = "July 18, 2025 @ 9:15 PM ET".to_string();
    post
}

#[test]
fn test_translated_post_layout() {
    let mut post = post();
    post.media_urls = vec![
        "https://static.example.com/a.jpg".to_string(),
        "https://static.example.com/b.jpg".to_string(),
    ];

    let embed = build_embed(&post, "Szia Amerika!", "Hello America!", now());

    assert_eq!(embed.title, EMBED_TITLE);
    assert_eq!(embed.description.as_deref(), Some("Szia Amerika!"));
    assert_eq!(embed.color, 0x1DA1F2);
    assert_eq!(
        embed.image,
        Some(EmbedImage { url: "https://static.example.com/a.jpg".to_string() })
    );
    assert_eq!(
        embed.footer.text,
        "🤖 Generated by TotM AI\nposted on Truth: July 18, 2025 @ 9:15 PM ET"
    );

    let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["\u{200b}", "🔗 Eredeti bejegyzés", "\u{200b}"]);
    assert_eq!(
        embed.fields[1].value,
        "[Link a Truth Social-hoz](https://truthsocial.com/@realDonaldTrump/posts/114881234567890123)"
    );
    assert!(embed.fields.iter().all(|f| !f.inline));
}

#[test]
fn test_video_field_between_spacer_and_link() {
    let mut post = post();
    post.video_url = Some("https://video.example.com/v.mp4".to_string());

    let embed = build_embed(&post, "Videó", "", now());

    let names: Vec<&str> = embed.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["\u{200b}", "🎬 Videó", "🔗 Eredeti bejegyzés", "\u{200b}"]
    );
    assert_eq!(
        embed.fields[1].value,
        "[Lejátszás/Megtekintés](https://video.example.com/v.mp4)"
    );
}

#[test]
fn test_fallback_to_original() {
    let embed = build_embed(&post(), "", "Hello America!", now());
    assert_eq!(embed.description.as_deref(), Some("Hello America!"));
}

#[test]
fn test_retruth_fallback_has_header() {
    let mut post = post();
    post.is_retruth = true;
    post.retruth_header = Some("Donald J. Trump ReTruthed".to_string());

    let embed = build_embed(&post, "", "Shared text", now());
    assert_eq!(
        embed.description.as_deref(),
        Some("**Donald J. Trump ReTruthed**\n---\nShared text")
    );
}

#[test]
fn test_retruth_without_header_label() {
    let mut post = post();
    post.is_retruth = true;

    let embed = build_embed(&post, "", "", now());
    assert_eq!(embed.description.as_deref(), Some("**ReTruth**\n---"));
}

#[test]
fn test_retruth_with_translation_has_no_header() {
    let mut post = post();
    post.is_retruth = true;
    post.retruth_header = Some("Donald J. Trump ReTruthed".to_string());

    let embed = build_embed(&post, "Donald Trump megosztotta", "Shared", now());
    assert_eq!(embed.description.as_deref(), Some("Donald Trump megosztotta"));
}

#[test]
fn test_no_text_no_description() {
    let embed = build_embed(&post(), "", "", now());
    assert!(embed.description.is_none());
    assert!(embed.image.is_none());
}

#[test]
fn test_long_original_truncated() {
    let original = "á".repeat(2000);
    let embed = build_embed(&post(), "", &original, now());

    let description = embed.description.unwrap();
    assert!(description.ends_with("... [tovább az eredeti linken]"));
    assert_eq!(
        description.chars().count(),
        1800 + "... [tovább az eredeti linken]".chars().count()
    );
}

#[test]
fn test_long_translation_capped() {
    let translated = "x".repeat(5000);
    let embed = build_embed(&post(), &translated, "", now());

    let description = embed.description.unwrap();
    assert_eq!(description.chars().count(), 4096);
    assert!(description.ends_with("xxx..."));
}

#[test]
fn test_footer_time_variants() {
    assert_eq!(
        footer_time("Posted July 4, 2025 @ 10:02 AM ET (edited)", now()),
        "July 4, 2025 @ 10:02 AM ET"
    );
    assert_eq!(footer_time("yesterday", now()), "yesterday");
    assert_eq!(footer_time("", now()), "2025.07.19. 03:15 (Gen)");
}

#[test]
fn test_payload_serialization() {
    let embed = build_embed(&post(), "Szia", "", now());
    let payload = WebhookPayload { embeds: vec![embed] };
    let json = serde_json::to_value(&payload).unwrap();

    assert_eq!(json["embeds"][0]["color"], 0x1DA1F2);
    assert_eq!(json["embeds"][0]["fields"][0]["inline"], false);
    assert!(json["embeds"][0].get("image").is_none());
    assert_eq!(json["embeds"][0]["description"], "Szia");
}
