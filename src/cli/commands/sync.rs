//! Sync command - one manual sync run.
//!
//! Runs the same routine as the watch-mode timer, out of band.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::storage::Database;
use crate::store::QuoteStore;
use crate::sync::{sync_once, SyncClient};

/// Arguments for the sync command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotable sync                                   Sync against the configured endpoint\n    \
    quotable sync --url https://example.com/posts   Override the endpoint for this run")]
pub struct Args {
    /// Override the configured endpoint for this run
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

/// Executes the sync command.
///
/// Fetch failures are soft: the command prints the status line and
/// exits zero, matching the scheduled runs in watch mode.
pub fn run(args: Args) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = args.url {
        config.sync_url = url;
    }

    let db = Database::open_default()?;
    let mut store = QuoteStore::load(db)?;
    let client = SyncClient::new(&config)?;

    println!("{}", "Syncing data with server...".dimmed());
    let summary = sync_once(&mut store, &client)?;

    if summary.succeeded() {
        println!("{} {}", "Success:".green(), summary.status_line());
    } else {
        println!("{} {}", "Warning:".yellow(), summary.status_line());
    }

    Ok(())
}
