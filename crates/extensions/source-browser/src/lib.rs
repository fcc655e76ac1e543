//! # feedrelay Browser Source
//!
//! [`FeedSource`](feedrelay_protocols::FeedSource) backed by headless
//! Chrome, driven through a small Chrome DevTools Protocol client.
//!
//! ## Stages
//!
//! 1. The aggregator listing is loaded and every rendered post card is
//!    extracted (`fetch_feed`).
//! 2. Each new post's own page is loaded for the full text, re-share
//!    header, link card and media (`fetch_details`).
//!
//! Every call launches a fresh browser and closes it afterwards.

pub mod cdp;
mod error;
mod launcher;
mod rollcall;
mod scripts;

pub use error::BrowserError;
pub use launcher::{BrowserInstance, BrowserLauncher};
pub use rollcall::{RollCallSource, cache_busted_url};
