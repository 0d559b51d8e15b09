use anyhow::Result;
use ci_janitor::publish::{publish, resolve_channel, EchoRunner, Outcome, PublishOptions, ShellRunner};
use ci_janitor::reaper::{LiveTable, Reaper, SigkillSignaler};
use ci_janitor::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ci-janitor")]
#[command(about = "CI worker janitor - reap leaked processes, publish release images", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Kill orphaned build processes left over from aborted jobs
    Reap,
    /// Build and push the release container image for the current channel
    Publish {
        /// Release channel to tag the image with (falls back to $CHANNEL)
        #[arg(short, long)]
        channel: Option<String>,

        /// Print every command instead of executing it
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let config = Config::load();

    match args.command {
        Commands::Reap => {
            let reaper = Reaper::new(config.reaper.victims);
            let mut table = LiveTable::new();
            let mut signaler = SigkillSignaler;
            let euid = nix::unistd::Uid::effective().as_raw();

            // Best effort: the sweep always succeeds, even when nothing
            // could actually be killed.
            reaper.reap(&mut table, &mut signaler, euid)?;
        }
        Commands::Publish { channel, dry_run } => {
            let source_dir = std::env::current_dir()?.display().to_string();

            let opts = PublishOptions {
                channel: resolve_channel(channel.as_deref()),
                ci: std::env::var("CI").map(|v| !v.is_empty()).unwrap_or(false),
                username: std::env::var("DOCKER_USERNAME").ok().filter(|v| !v.is_empty()),
                password: std::env::var("DOCKER_PASSWORD").ok().filter(|v| !v.is_empty()),
                toolchain_image: config.publish.toolchain_image,
                image_repo: config.publish.image_repo,
                source_dir,
                staging_dir: config.publish.staging_dir,
            };

            let outcome = if dry_run {
                publish(&opts, &mut EchoRunner::default())?
            } else {
                publish(&opts, &mut ShellRunner)?
            };

            match outcome {
                Outcome::SkippedNoChannel => {
                    println!("Channel not specified, nothing to publish");
                }
                Outcome::Published { tag } => {
                    println!("Published {tag}");
                }
            }
        }
    }

    Ok(())
}
