//! The build-and-publish flow

use crate::publish::runner::{CommandLine, CommandRunner};
use anyhow::Result;
use tracing::info;

/// Everything the publish flow needs decided up front
#[derive(Debug, Clone)]
pub struct PublishOptions {
    /// Release channel the image is tagged with, if one was determined
    pub channel: Option<String>,
    /// Whether we are running inside a recognized CI environment
    pub ci: bool,
    /// Registry credentials
    pub username: Option<String>,
    pub password: Option<String>,
    /// Toolchain container image the release build runs inside
    pub toolchain_image: String,
    /// Registry repository the image is tagged under
    pub image_repo: String,
    /// Source tree to build
    pub source_dir: String,
    /// Local directory build artifacts are staged into
    pub staging_dir: String,
}

/// What the flow ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No channel was determined; nothing was built or pushed
    SkippedNoChannel,
    /// The image was built and pushed (or echo-pushed outside CI)
    Published { tag: String },
}

/// Build the release inside the toolchain container, stage its artifacts,
/// build the image, and push it to the registry.
///
/// Every step is issued through `runner`; the first failing command aborts
/// the flow with its error. An undetermined channel is a benign early exit,
/// not a failure.
pub fn publish(opts: &PublishOptions, runner: &mut dyn CommandRunner) -> Result<Outcome> {
    let channel = match &opts.channel {
        Some(c) => c.clone(),
        None => {
            info!("Channel not specified, nothing to publish");
            return Ok(Outcome::SkippedNoChannel);
        }
    };

    let tag = format!("{}:{}", opts.image_repo, channel);

    // Release build inside the fixed toolchain image, artifacts staged into
    // the mounted staging directory.
    let build_script =
        "cargo build --release && mkdir -p /staging/usr/bin && cp -a target/release/. /staging/usr/bin/";
    runner.run(&CommandLine::new(
        "docker",
        &[
            "run",
            "--rm",
            "-v",
            &format!("{}:/src", opts.source_dir),
            "-v",
            &format!("{}:/staging", opts.staging_dir),
            "-w",
            "/src",
            &opts.toolchain_image,
            "bash",
            "-c",
            build_script,
        ],
    ))?;

    // Image build copies the staged artifacts in via its build context
    runner.run(&CommandLine::new(
        "docker",
        &["build", "-t", &tag, &opts.staging_dir],
    ))?;

    // Authenticate only when both credentials are present
    if let (Some(user), Some(pass)) = (&opts.username, &opts.password) {
        runner.run(&CommandLine::new("docker", &["login", "-u", user, "-p", pass]))?;
    }

    let push = CommandLine::new("docker", &["push", &tag]);
    if opts.ci {
        runner.run(&push)?;
    } else {
        // Outside CI the push is a rehearsal
        info!("Not in CI, echoing push instead");
        runner.run(&push.into_echo())?;
    }

    Ok(Outcome::Published { tag })
}
