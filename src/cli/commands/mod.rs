//! CLI commands for Quotable.
//!
//! Each submodule implements a single CLI command with its argument
//! parsing and execution logic.

/// Add a quote to the local store.
pub mod add;

/// List the distinct categories in the store.
pub mod categories;

/// Generate shell completion scripts.
pub mod completions;

/// Configuration viewing and management.
pub mod config;

/// Export the store as a JSON backup.
pub mod export;

/// Import quotes from a JSON backup.
pub mod import;

/// List quotes, optionally filtered by category.
pub mod list;

/// Print one random quote.
pub mod random;

/// Show store statistics and the last sync outcome.
pub mod status;

/// Pull remote quotes and merge them into the store.
pub mod sync;

/// Sync on a fixed interval until interrupted.
pub mod watch;
