//! Process table access - live snapshots via sysinfo

use anyhow::Result;
use sysinfo::System;

/// One row of the process table, read fresh on every snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub uid: u32,
    pub ppid: u32,
    pub name: String,
}

/// Source of process table snapshots.
///
/// The sweep only ever sees this trait, so tests can inject a fake table
/// instead of the live one.
pub trait ProcessTable {
    fn snapshot(&mut self) -> Result<Vec<ProcessRecord>>;
}

/// Live process table backed by the operating system
pub struct LiveTable {
    sys: System,
}

impl LiveTable {
    pub fn new() -> Self {
        Self { sys: System::new() }
    }
}

impl Default for LiveTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessTable for LiveTable {
    fn snapshot(&mut self) -> Result<Vec<ProcessRecord>> {
        self.sys.refresh_processes();

        let records = self
            .sys
            .processes()
            .iter()
            .filter_map(|(pid, proc)| {
                // Processes without a resolvable owner can never match the
                // sweep's owner filter, so they are dropped here.
                let uid = proc.user_id().map(|u| **u)?;
                Some(ProcessRecord {
                    pid: pid.as_u32(),
                    uid,
                    ppid: proc.parent().map(|p| p.as_u32()).unwrap_or(0),
                    name: proc.name().to_string(),
                })
            })
            .collect();

        Ok(records)
    }
}
