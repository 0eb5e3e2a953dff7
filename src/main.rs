use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod storage;
mod store;
mod sync;
mod transfer;

use cli::commands;

/// The main CLI command line interface.
#[derive(Parser)]
#[command(name = "quotable")]
#[command(version)]
#[command(about = "A local quote collection with remote sync")]
#[command(long_about = "Quotable keeps a collection of quotes on your machine: add them,\n\
    browse them by category, back them up as JSON, and merge in records\n\
    from a remote source without ever overwriting your own.")]
#[command(after_help = "EXAMPLES:\n    \
    quotable add \"Less is more.\" -c Design   Add a quote\n    \
    quotable list                            List under the active filter\n    \
    quotable list --category Design          Filter by category\n    \
    quotable random                          Print one random quote\n    \
    quotable export                          Write quotes_backup.json\n    \
    quotable import quotes_backup.json       Import a backup\n    \
    quotable sync                            Merge in remote quotes once\n    \
    quotable watch                           Sync every 60 seconds\n\n\
    For more information about a command, run 'quotable <command> --help'.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Add a quote to the local store
    #[command(long_about = "Appends a quote to the store and persists it. The text is\n\
        required and must be non-empty after trimming; the category\n\
        defaults to 'Uncategorized'.")]
    Add(commands::add::Args),

    /// List quotes, optionally filtered by category
    #[command(long_about = "Shows the quotes visible under a category filter. Without\n\
        --category the previously selected filter applies; with it, the\n\
        given value is used and remembered for future runs.")]
    List(commands::list::Args),

    /// Print one random quote
    Random(commands::random::Args),

    /// List the distinct categories in the store
    #[command(long_about = "Prints the sorted set of category labels currently present in\n\
        the store, with per-category quote counts.")]
    Categories(commands::categories::Args),

    /// Export the store as a JSON backup file
    #[command(long_about = "Writes the full store as a pretty-printed JSON array. Exporting\n\
        never modifies the store.")]
    Export(commands::export::Args),

    /// Import quotes from a JSON backup file
    #[command(long_about = "Appends records from a JSON backup. The file must be an array of\n\
        {text, category} objects and is validated in full before anything\n\
        is added. Duplicate texts are skipped unless --allow-duplicates\n\
        is given (or dedup_on_import is disabled in config).")]
    Import(commands::import::Args),

    /// Pull remote quotes and merge them into the store
    #[command(long_about = "Fetches a small batch of records from the remote source and\n\
        appends the ones whose text does not already exist locally.\n\
        Local quotes are never overwritten or deleted. Network failures\n\
        are reported softly and retried on the next run.")]
    Sync(commands::sync::Args),

    /// Sync on a fixed interval until interrupted
    #[command(long_about = "Runs one sync immediately, then one per interval (default 60\n\
        seconds) until Ctrl+C. At most one sync runs at a time; a tick\n\
        arriving during a slow run is skipped.")]
    Watch(commands::watch::Args),

    /// Show store statistics and the last sync outcome
    Status(commands::status::Args),

    /// View and manage configuration settings
    #[command(long_about = "Provides subcommands to show, get, and set configuration values.\n\
        Configuration is stored in config.json under the data directory.")]
    Config(commands::config::Args),

    /// Generate shell completion scripts
    Completions(commands::completions::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. Watch installs its own subscriber so the
    // console layer and the watch.log file layer share one registry.
    if !matches!(cli.command, Commands::Watch(_)) {
        let filter = if cli.verbose {
            "quotable=debug"
        } else {
            "quotable=info"
        };

        tracing_subscriber::registry()
            .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
            .with(tracing_subscriber::fmt::layer().without_time())
            .init();
    }

    match cli.command {
        Commands::Add(args) => commands::add::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Random(args) => commands::random::run(args),
        Commands::Categories(args) => commands::categories::run(args),
        Commands::Export(args) => commands::export::run(args),
        Commands::Import(args) => commands::import::run(args),
        Commands::Sync(args) => commands::sync::run(args),
        Commands::Watch(args) => commands::watch::run(args, cli.verbose),
        Commands::Status(args) => commands::status::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Completions(args) => {
            let mut cmd = Cli::command();
            commands::completions::generate_completions(&mut cmd, args.shell);
            Ok(())
        }
    }
}
