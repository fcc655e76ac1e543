//! Embed layout for a relayed post.

use chrono::NaiveDateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use feedrelay_protocols::FeedPost;

pub const EMBED_TITLE: &str = "🇺🇸 Új Truth Social bejegyzés - Donald Trump";
pub const EMBED_COLOR: u32 = 0x1DA1F2;

const FOOTER_PREFIX: &str = "🤖 Generated by TotM AI\nposted on Truth: ";
const ZERO_WIDTH_SPACE: &str = "\u{200b}";

/// Longest original text shown before it is cut.
const ORIGINAL_TEXT_LIMIT: usize = 1800;
const ORIGINAL_TEXT_SUFFIX: &str = "... [tovább az eredeti linken]";
/// Discord's description limit.
const DESCRIPTION_LIMIT: usize = 4096;

static ET_TIMESTAMP: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z]+ \d{1,2}, \d{4} @ \d{1,2}:\d{2} [AP]M ET)")
        .expect("timestamp pattern is valid")
});

/// Body of a webhook execute request.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookPayload {
    pub embeds: Vec<DiscordEmbed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscordEmbed {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
    pub footer: EmbedFooter,
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl EmbedField {
    fn block(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            inline: false,
        }
    }

    fn spacer() -> Self {
        Self::block(ZERO_WIDTH_SPACE, ZERO_WIDTH_SPACE)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// Lay out `post` as an embed.
///
/// `translated` wins over `original`; when both are empty the embed has no
/// description. `now` is the local time used when the post carries no
/// timestamp.
pub fn build_embed(
    post: &FeedPost,
    translated: &str,
    original: &str,
    now: NaiveDateTime,
) -> DiscordEmbed {
    let original = truncate_original(original);

    let mut parts: Vec<String> = Vec::new();
    if post.is_retruth && translated.is_empty() {
        let header = post
            .retruth_header
            .as_deref()
            .filter(|h| !h.is_empty())
            .unwrap_or("ReTruth");
        parts.push(format!("**{}**", header));
        parts.push("---".to_string());
    }

    if !translated.is_empty() {
        parts.push(translated.to_string());
    } else if !original.is_empty() {
        parts.push(original);
    }

    let description = if parts.is_empty() {
        None
    } else {
        Some(cap_description(parts.join("\n")))
    };

    let mut fields = vec![EmbedField::spacer()];
    if let Some(video) = post.video_url.as_deref().filter(|v| !v.is_empty()) {
        fields.push(EmbedField::block(
            "🎬 Videó",
            format!("[Lejátszás/Megtekintés]({})", video),
        ));
    }
    if !post.url.is_empty() {
        fields.push(EmbedField::block(
            "🔗 Eredeti bejegyzés",
            format!("[Link a Truth Social-hoz]({})", post.url),
        ));
    }
    fields.push(EmbedField::spacer());

    DiscordEmbed {
        title: EMBED_TITLE.to_string(),
        description,
        fields,
        image: post.media_urls.first().map(|url| EmbedImage { url: url.clone() }),
        footer: EmbedFooter {
            text: format!("{}{}", FOOTER_PREFIX, footer_time(&post.timestamp_str, now)),
        },
        color: EMBED_COLOR,
    }
}

/// Time shown in the footer.
///
/// The `Month D, YYYY @ H:MM AM ET` part of the listing timestamp when it
/// has one, the raw timestamp otherwise, or `now` marked as generated.
pub fn footer_time(timestamp: &str, now: NaiveDateTime) -> String {
    if timestamp.is_empty() {
        return format!("{} (Gen)", now.format("%Y.%m.%d. %H:%M"));
    }
    match ET_TIMESTAMP.captures(timestamp) {
        Some(caps) => caps[1].to_string(),
        None => timestamp.to_string(),
    }
}

fn truncate_original(original: &str) -> String {
    if original.chars().count() > ORIGINAL_TEXT_LIMIT {
        let head: String = original.chars().take(ORIGINAL_TEXT_LIMIT).collect();
        format!("{}{}", head, ORIGINAL_TEXT_SUFFIX)
    } else {
        original.to_string()
    }
}

fn cap_description(description: String) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let head: String = description.chars().take(DESCRIPTION_LIMIT - 3).collect();
        format!("{}...", head)
    } else {
        description
    }
}

#[cfg(test)]
#[path = "embed_tests.rs"]
mod tests;
