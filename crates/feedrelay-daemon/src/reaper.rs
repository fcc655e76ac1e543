//! Orphan reaping for containers without an init process.
//!
//! When the monitor is PID 1, browser helper processes that outlive their
//! parent are re-parented to it. Nobody else will `wait` for them, so they
//! pile up as zombies unless PID 1 collects them on SIGCHLD.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::error::DaemonError;

/// Background task collecting exited children.
pub struct ChildReaper {
    reaped: Arc<AtomicU64>,
    task: JoinHandle<()>,
}

impl ChildReaper {
    /// Install the reaper when running as PID 1, or when `force` is set.
    pub fn install_if_pid1(force: bool) -> Result<Option<Self>, DaemonError> {
        let pid = std::process::id();
        if pid != 1 && !force {
            debug!(pid, "Not PID 1, child reaper not installed");
            return Ok(None);
        }
        Self::install().map(Some)
    }

    #[cfg(unix)]
    fn install() -> Result<Self, DaemonError> {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigchld =
            signal(SignalKind::child()).map_err(|e| DaemonError::ReaperSetup(e.to_string()))?;
        let reaped = Arc::new(AtomicU64::new(0));
        let counter = reaped.clone();

        let task = tokio::spawn(async move {
            while sigchld.recv().await.is_some() {
                let pids = reap_exited();
                counter.fetch_add(pids.len() as u64, Ordering::Relaxed);
            }
        });

        info!("Child reaper installed (SIGCHLD)");
        Ok(Self { reaped, task })
    }

    #[cfg(not(unix))]
    fn install() -> Result<Self, DaemonError> {
        Err(DaemonError::ReaperSetup(
            "Child reaping not supported on this platform".to_string(),
        ))
    }

    /// Number of children collected so far.
    pub fn reaped(&self) -> u64 {
        self.reaped.load(Ordering::Relaxed)
    }
}

impl Drop for ChildReaper {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Collect every already-exited child without blocking. Returns their pids.
#[cfg(unix)]
pub fn reap_exited() -> Vec<i32> {
    use nix::errno::Errno;
    use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
    use nix::unistd::Pid;

    let mut pids = Vec::new();
    loop {
        match waitpid(Pid::from_raw(-1), Some(WaitPidFlag::WNOHANG)) {
            Ok(WaitStatus::StillAlive) => break,
            Ok(WaitStatus::Exited(pid, code)) => {
                debug!(pid = pid.as_raw(), code, "Reaped child");
                pids.push(pid.as_raw());
            }
            Ok(WaitStatus::Signaled(pid, signal, _)) => {
                debug!(pid = pid.as_raw(), ?signal, "Reaped child killed by signal");
                pids.push(pid.as_raw());
            }
            Ok(_) => continue,
            Err(Errno::EINTR) => continue,
            // ECHILD: no children left
            Err(_) => break,
        }
    }
    pids
}

#[cfg(not(unix))]
pub fn reap_exited() -> Vec<i32> {
    Vec::new()
}
