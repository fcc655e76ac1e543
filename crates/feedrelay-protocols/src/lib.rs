//! # feedrelay Protocols
//!
//! Core protocol definitions for feedrelay.
//! Contains only types and interface definitions - no implementations.
//!
//! ## Core Traits
//!
//! - [`FeedSource`] - Detects posts on the aggregator and deep-scrapes them
//! - [`Translator`] - Turns a composite post prompt into translated text
//! - [`Publisher`] - Delivers a processed post to the output channel
//! - [`StateStore`] - Persists the last processed post id

pub mod error;
pub mod publisher;
pub mod source;
pub mod state;
pub mod translator;
pub mod types;

pub use error::{PublishError, SourceError, StateError, TranslateError};
pub use publisher::{Delivery, Publisher};
pub use source::FeedSource;
pub use state::StateStore;
pub use translator::{Translation, Translator};
pub use types::{FeedPost, PostDetails};
