//! Import command - append quotes from a JSON backup.
//!
//! The file must be a JSON array of `{text, category}` records; the
//! whole file is validated before anything is appended, so a bad file
//! never produces a partial import. Reports the count actually added,
//! consistent with sync reporting.

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::Config;
use crate::storage::Database;
use crate::store::QuoteStore;
use crate::transfer;

/// Arguments for the import command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotable import quotes_backup.json                     Import, skipping duplicates\n    \
    quotable import quotes_backup.json --allow-duplicates  Import everything")]
pub struct Args {
    /// Backup file to import
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Import records even when their text matches an existing quote
    #[arg(long)]
    pub allow_duplicates: bool,
}

/// Executes the import command.
pub fn run(args: Args) -> Result<()> {
    let contents = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file))?;

    let records = transfer::parse_backup(&contents)?;

    let config = Config::load()?;
    let dedup = config.dedup_on_import && !args.allow_duplicates;

    let db = Database::open_default()?;
    let mut store = QuoteStore::load(db)?;
    let report = store.import(records, dedup)?;

    let mut message = format!("Imported {} quote(s).", report.added);
    if report.skipped > 0 {
        message.push_str(&format!(" ({} duplicate(s) skipped.)", report.skipped));
    }
    println!("{} {}", "Success:".green(), message);

    Ok(())
}
