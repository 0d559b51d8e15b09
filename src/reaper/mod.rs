//! Orphan process reaping for CI workers

pub mod sweep;
pub mod table;

pub use sweep::{Reaper, SigkillSignaler, SignalError, Signaler};
pub use table::{LiveTable, ProcessRecord, ProcessTable};
