//! # feedrelay Daemon
//!
//! Process-level concerns for running the monitor as a long-lived service:
//!
//! - OS signal handling bridged onto a [`CancellationToken`](tokio_util::sync::CancellationToken)
//! - Zombie reaping when the process runs as PID 1 in a container
//! - Exit code policy for the container runtime

pub mod error;
pub mod exit;
pub mod reaper;
pub mod signal;

pub use error::DaemonError;
pub use exit::{EXIT_FAILURE, EXIT_RESTART, EXIT_SUCCESS, exit_code_for};
pub use reaper::ChildReaper;
pub use signal::{DaemonSignal, SignalHandler};
