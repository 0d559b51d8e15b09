//! Container image publishing, gated on an externally computed channel

pub mod channel;
pub mod flow;
pub mod runner;

pub use channel::resolve_channel;
pub use flow::{publish, Outcome, PublishOptions};
pub use runner::{CommandLine, CommandRunner, EchoRunner, ShellRunner};
