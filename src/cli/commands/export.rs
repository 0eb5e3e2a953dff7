//! Export command - write the store as a JSON backup.
//!
//! Pure read: exporting never mutates the store.

use anyhow::{Context, Result};

use crate::storage::Database;
use crate::store::QuoteStore;
use crate::transfer::{self, DEFAULT_BACKUP_NAME};

/// Arguments for the export command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotable export                        Write quotes_backup.json\n    \
    quotable export --output my.json       Write to a specific file\n    \
    quotable export --stdout               Print the backup to stdout")]
pub struct Args {
    /// Write to this file instead of quotes_backup.json
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Print the backup to stdout instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Executes the export command.
pub fn run(args: Args) -> Result<()> {
    let db = Database::open_default()?;
    let store = QuoteStore::load(db)?;

    let json = transfer::render_backup(store.quotes())?;

    if args.stdout {
        println!("{json}");
        return Ok(());
    }

    let path = args.output.unwrap_or_else(|| DEFAULT_BACKUP_NAME.to_string());
    std::fs::write(&path, &json).with_context(|| format!("Failed to write to {path}"))?;
    println!("Exported {} quote(s) to: {path}", store.len());

    Ok(())
}
