//! Add command - add a quote to the local store.

use anyhow::Result;
use colored::Colorize;

use crate::storage::Database;
use crate::store::QuoteStore;

/// Arguments for the add command.
#[derive(clap::Args)]
#[command(after_help = "EXAMPLES:\n    \
    quotable add \"Stay hungry, stay foolish.\"                 Add under 'Uncategorized'\n    \
    quotable add \"Less is more.\" --category Design           Add under a category")]
pub struct Args {
    /// The quote text
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Category label (defaults to "Uncategorized")
    #[arg(short, long, value_name = "CATEGORY")]
    pub category: Option<String>,
}

/// Executes the add command.
///
/// Empty or whitespace-only text is rejected without mutating the
/// store; the validation error surfaces on stderr with a nonzero exit.
pub fn run(args: Args) -> Result<()> {
    let db = Database::open_default()?;
    let mut store = QuoteStore::load(db)?;

    store.add_quote(&args.text, args.category.as_deref())?;

    println!(
        "{} Quote added ({} total quotes now).",
        "Success:".green(),
        store.len()
    );

    Ok(())
}
