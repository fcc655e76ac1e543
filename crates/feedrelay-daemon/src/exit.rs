//! Exit codes understood by the container runtime.
//!
//! A restart policy of `always`/`unless-stopped` brings the service back
//! after [`EXIT_RESTART`]; a clean stop exits with [`EXIT_SUCCESS`].

use feedrelay_core::RunOutcome;

pub const EXIT_SUCCESS: u8 = 0;
/// Periodic maintenance exit after `max_cycles`.
pub const EXIT_RESTART: u8 = 1;
/// Startup failure (configuration, data directory).
pub const EXIT_FAILURE: u8 = 1;

pub fn exit_code_for(outcome: RunOutcome) -> u8 {
    match outcome {
        RunOutcome::Shutdown => EXIT_SUCCESS,
        RunOutcome::RestartRequested => EXIT_RESTART,
    }
}
