//! Discord webhook [`Publisher`](feedrelay_protocols::Publisher).

mod embed;
mod publisher;

pub use embed::{
    DiscordEmbed, EmbedField, EmbedFooter, EmbedImage, WebhookPayload, build_embed,
    footer_time,
};
pub use publisher::{DiscordPublisher, MAX_RETRY_AFTER};
