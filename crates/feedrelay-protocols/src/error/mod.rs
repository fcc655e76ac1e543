//! Error types for the feedrelay protocol layer.

mod publish;
mod source;
mod state;
mod translate;

pub use publish::*;
pub use source::*;
pub use state::*;
pub use translate::*;
