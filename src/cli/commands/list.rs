//! List command - the filter view over the store.
//!
//! Without `--category`, the previously persisted filter applies
//! (defaulting to "all"). With `--category`, the given value is used
//! and becomes the persisted filter for future invocations.

use anyhow::Result;
use colored::Colorize;

use crate::cli::OutputFormat;
use crate::storage::Database;
use crate::store::{QuoteStore, FILTER_ALL};

/// Arguments for the list command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotable list                      List under the active filter\n    \
    quotable list --category Life      Filter to one category (and remember it)\n    \
    quotable list --category all       Show everything (and remember it)\n    \
    quotable list --format json        Output as JSON")]
pub struct Args {
    /// Filter to this category; 'all' selects everything.
    /// Becomes the persisted filter for future runs.
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Output format: text (default), json
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Executes the list command.
pub fn run(args: Args) -> Result<()> {
    let db = Database::open_default()?;
    let store = QuoteStore::load(db)?;

    let filter = match args.category {
        Some(category) => {
            store.set_filter(&category)?;
            category
        }
        None => store.last_filter()?,
    };

    let quotes = store.filtered(&filter);

    match args.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&quotes)?;
            println!("{json}");
        }
        OutputFormat::Text => {
            if quotes.is_empty() {
                if store.is_empty() {
                    println!("{}", "No quotes available. Add some new quotes!".dimmed());
                } else {
                    println!(
                        "{}",
                        format!("No quotes found for category '{filter}'.").dimmed()
                    );
                }
                return Ok(());
            }

            if filter != FILTER_ALL {
                println!("{}", format!("Category: {filter}").bold());
                println!();
            }

            for quote in &quotes {
                println!(
                    "  \"{}\"  {}",
                    quote.text,
                    format!("- {}", quote.category).dimmed()
                );
            }

            println!();
            println!("{}", format!("{} quote(s).", quotes.len()).dimmed());
        }
    }

    Ok(())
}
