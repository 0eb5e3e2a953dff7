//! Random command - print one random quote.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;
use crate::store::QuoteStore;

/// Arguments for the random command.
#[derive(clap::Args)]
pub struct Args {}

/// Executes the random command.
pub fn run(_args: Args) -> Result<()> {
    let db = Database::open_default()?;
    let store = QuoteStore::load(db)?;

    match store.random() {
        Some(quote) => {
            println!("\"{}\"", quote.text);
            println!("{}", format!("- {}", quote.category).dimmed());
        }
        None => {
            println!("{}", "No quotes available. Add some new quotes!".dimmed());
        }
    }

    Ok(())
}
