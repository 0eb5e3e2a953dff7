//! Categories command - list the distinct categories in the store.

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::storage::Database;
use crate::store::QuoteStore;

/// Arguments for the categories command.
#[derive(clap::Args)]
pub struct Args {
    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the categories command.
pub fn run(args: Args) -> Result<()> {
    let db = Database::open_default()?;
    let store = QuoteStore::load(db)?;

    let categories = store.categories();

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
        OutputFormat::Text => {
            if categories.is_empty() {
                println!("{}", "No categories yet.".dimmed());
                return Ok(());
            }

            for category in &categories {
                let count = store.filtered(category).len();
                println!("  {}  {}", category, format!("({count})").dimmed());
            }
        }
    }

    Ok(())
}
