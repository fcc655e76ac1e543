//! # feedrelay Core
//!
//! The pipeline that turns a listing scan into published posts:
//!
//! 1. [`select_new_posts`] picks posts newer than the stored id
//! 2. [`merge_details`] folds the deep-scrape result into each post
//! 3. [`compose_translation_input`] builds the tagged translation prompt
//! 4. [`Monitor`] drives source, translator, publisher and state store in a
//!    polling loop that ends after a bounded number of cycles

pub mod merge;
pub mod monitor;
pub mod prompt;
pub mod selection;
pub mod state;

pub use merge::merge_details;
pub use monitor::{CycleReport, Monitor, MonitorSettings, RunOutcome};
pub use prompt::compose_translation_input;
pub use selection::{compare_ids, select_new_posts, sort_posts};
pub use state::{FileStateStore, MemoryStateStore, STATE_FILE_NAME, ensure_data_dir};
