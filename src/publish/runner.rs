//! Command execution seam for the publish flow

use anyhow::{bail, Context, Result};
use std::fmt;
use std::process::Command;
use tracing::info;

/// A command line the publish flow wants executed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Wrap this command in an `echo` of itself
    pub fn into_echo(self) -> Self {
        let mut args = vec![self.program];
        args.extend(self.args);
        Self {
            program: "echo".to_string(),
            args,
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Executes command lines on behalf of the publish flow.
///
/// The flow never spawns processes directly; tests inject a recording
/// implementation and assert on the exact sequence issued.
pub trait CommandRunner {
    fn run(&mut self, cmd: &CommandLine) -> Result<()>;
}

/// Runs commands for real, failing fast on non-zero exit
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&mut self, cmd: &CommandLine) -> Result<()> {
        info!("Running: {cmd}");

        let status = Command::new(&cmd.program)
            .args(&cmd.args)
            .status()
            .with_context(|| format!("Failed to launch {}", cmd.program))?;

        if !status.success() {
            bail!("Command failed ({status}): {cmd}");
        }

        Ok(())
    }
}

/// Prints command lines without executing them, recording what it saw
#[derive(Default)]
pub struct EchoRunner {
    pub seen: Vec<CommandLine>,
}

impl CommandRunner for EchoRunner {
    fn run(&mut self, cmd: &CommandLine) -> Result<()> {
        println!("{cmd}");
        self.seen.push(cmd.clone());
        Ok(())
    }
}
