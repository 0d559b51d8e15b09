//! The orphan sweep - find and kill processes leaked by aborted jobs

use crate::reaper::table::{ProcessRecord, ProcessTable};
use anyhow::Result;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from sending a termination signal.
///
/// A target that vanished before the signal landed is not an error; the
/// signaler reports that as a successful no-op.
#[derive(Error, Debug)]
pub enum SignalError {
    #[error("Permission denied for PID {0}")]
    PermissionDenied(u32),
    #[error("Failed to signal PID {0}: {1}")]
    SignalFailed(u32, String),
}

/// Sends the kill signal to a process
pub trait Signaler {
    fn kill(&mut self, pid: u32) -> Result<(), SignalError>;
}

/// Sends SIGKILL via the kernel
pub struct SigkillSignaler;

impl Signaler for SigkillSignaler {
    fn kill(&mut self, pid: u32) -> Result<(), SignalError> {
        use nix::errno::Errno;
        use nix::sys::signal::{kill, Signal};
        use nix::unistd::Pid;

        match kill(Pid::from_raw(pid as i32), Signal::SIGKILL) {
            Ok(()) => Ok(()),
            // Target already gone
            Err(Errno::ESRCH) => Ok(()),
            Err(Errno::EPERM) => Err(SignalError::PermissionDenied(pid)),
            Err(e) => Err(SignalError::SignalFailed(pid, e.to_string())),
        }
    }
}

/// Orphan process reaper.
///
/// A process is targeted only when it simultaneously matches all three of:
/// owner equals the caller's effective uid, parent is PID 1, and executable
/// name is on the victim list. Re-parenting to PID 1 is taken as proof that
/// the original parent (the aborted job) has exited; why transient
/// re-parenting would ever look the same is unclear, so that heuristic is a
/// documented assumption rather than a verified one.
pub struct Reaper {
    victims: Vec<String>,
}

impl Reaper {
    /// Create a reaper targeting the given executable names
    pub fn new(victims: Vec<String>) -> Self {
        Self { victims }
    }

    /// Select the records the sweep would target
    pub fn find_orphans<'a>(
        &self,
        records: &'a [ProcessRecord],
        euid: u32,
    ) -> Vec<&'a ProcessRecord> {
        records
            .iter()
            .filter(|r| r.uid == euid && r.ppid == 1 && self.victims.iter().any(|v| *v == r.name))
            .collect()
    }

    /// Run one best-effort sweep.
    ///
    /// Candidates are selected from one snapshot, then re-verified against a
    /// fresh snapshot immediately before signaling so a recycled pid whose
    /// new occupant no longer matches is skipped. A residual race between
    /// re-verification and the signal remains; pid-based targeting cannot
    /// close it.
    ///
    /// Kill failures are swallowed: the sweep is one-shot and always reports
    /// success once a snapshot was obtained. Returns the pids signaled.
    pub fn reap(
        &self,
        table: &mut dyn ProcessTable,
        signaler: &mut dyn Signaler,
        euid: u32,
    ) -> Result<Vec<u32>> {
        let snapshot = table.snapshot()?;
        let candidates: Vec<ProcessRecord> = self
            .find_orphans(&snapshot, euid)
            .into_iter()
            .cloned()
            .collect();

        if candidates.is_empty() {
            debug!("No orphaned processes found");
            return Ok(Vec::new());
        }

        let fresh = table.snapshot()?;
        let mut killed = Vec::new();

        for candidate in &candidates {
            let still_matches = fresh.iter().any(|r| {
                r.pid == candidate.pid
                    && r.uid == candidate.uid
                    && r.ppid == candidate.ppid
                    && r.name == candidate.name
            });
            if !still_matches {
                debug!(pid = candidate.pid, "Candidate no longer matches, skipping");
                continue;
            }

            info!("Killing pid {}", candidate.pid);
            if let Err(e) = signaler.kill(candidate.pid) {
                // Best effort only
                warn!(pid = candidate.pid, "Kill failed: {e}");
            }
            killed.push(candidate.pid);
        }

        Ok(killed)
    }
}
