//! Watch command - periodic sync loop.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::sync::watch::run_watch;

/// Arguments for the watch command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotable watch                   Sync now, then every 60 seconds\n    \
    quotable watch --interval 300    Sync now, then every 5 minutes")]
pub struct Args {
    /// Seconds between runs (overrides the configured interval)
    #[arg(long, value_name = "SECS")]
    pub interval: Option<u64>,
}

/// Executes the watch command.
pub fn run(args: Args, verbose: bool) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(interval) = args.interval {
        config.sync_interval_secs = interval;
    }

    println!(
        "{}",
        format!(
            "Watching: syncing every {} seconds.",
            config.sync_interval_secs
        )
        .green()
    );
    println!("{}", "Press Ctrl+C to stop".dimmed());
    println!();

    let rt = tokio::runtime::Runtime::new().context("Failed to create tokio runtime")?;
    rt.block_on(run_watch(config, verbose))
}
