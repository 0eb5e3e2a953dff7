//! Status command - store statistics and the last sync outcome.

use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::storage::db::default_db_path;
use crate::storage::Database;
use crate::store::QuoteStore;
use crate::sync::SyncState;

/// Arguments for the status command.
#[derive(clap::Args)]
pub struct Args {}

/// Executes the status command.
pub fn run(_args: Args) -> Result<()> {
    let db = Database::open_default()?;
    let store = QuoteStore::load(db)?;
    let sync_state = SyncState::load(store.db())?;

    println!("{}", "Quotable Status".bold());
    println!();
    println!("  {}  {}", "Quotes:".dimmed(), store.len());
    println!("  {}  {}", "Categories:".dimmed(), store.categories().len());
    println!("  {}  {}", "Active filter:".dimmed(), store.last_filter()?);
    println!();
    println!("  {}  {}", "Database:".dimmed(), default_db_path()?.display());
    println!("  {}  {}", "Config:".dimmed(), Config::config_path()?.display());
    println!();

    println!("{}", "Last sync".bold());
    println!();
    match sync_state.last_sync_at {
        Some(at) => {
            let result = match sync_state.last_sync_success {
                Some(true) => "ok".green().to_string(),
                Some(false) => "failed".red().to_string(),
                None => "unknown".dimmed().to_string(),
            };
            println!(
                "  {}  {}",
                "When:".dimmed(),
                at.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("  {}  {result}", "Result:".dimmed());
            println!(
                "  {}  {} added, {} skipped",
                "Merged:".dimmed(),
                sync_state.last_added.unwrap_or(0),
                sync_state.last_skipped.unwrap_or(0)
            );
        }
        None => {
            println!("  {}", "Never synced.".dimmed());
        }
    }

    Ok(())
}
