//! ci-janitor library - CI worker cleanup and release publishing

pub mod config;
pub mod publish;
pub mod reaper;

// Re-export commonly used types
pub use config::Config;
pub use publish::{publish, resolve_channel, CommandLine, CommandRunner, Outcome, PublishOptions};
pub use reaper::{LiveTable, ProcessRecord, ProcessTable, Reaper, SigkillSignaler, Signaler};
