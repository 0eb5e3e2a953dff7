//! Remote sync for Quotable.
//!
//! Sync is a one-way conservative merge: records fetched from the
//! remote source are appended when no local quote has exactly equal
//! text, and local quotes are never overwritten or deleted. Fetch
//! failures are soft; they surface as a status message and are retried
//! on the next manual or scheduled run.
//!
//! # Submodules
//!
//! - `client` - HTTP client for the remote quote source
//! - `state` - persisted record of the last sync attempt
//! - `watch` - periodic sync loop

pub mod client;
pub mod state;
pub mod watch;

pub use client::SyncClient;
pub use state::SyncState;

use anyhow::Result;

use crate::store::QuoteStore;

/// Default read endpoint for remote quotes.
pub const DEFAULT_SYNC_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Default seconds between automatic runs in watch mode.
pub const DEFAULT_SYNC_INTERVAL_SECS: u64 = 60;

/// Default number of remote items mapped into quotes per run.
pub const DEFAULT_FETCH_LIMIT: usize = 5;

/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Custom error type for sync operations.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    /// HTTP request error (network failure, timeout, bad payload).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },
}

/// Outcome of a single sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncSummary {
    /// Remote records appended to the store.
    pub added: usize,
    /// Remote records skipped as exact-text conflicts.
    pub skipped: usize,
    /// Fetch failure message, if the run could not reach the source.
    pub failure: Option<String>,
}

impl SyncSummary {
    /// Whether the remote source was reached and merged.
    pub fn succeeded(&self) -> bool {
        self.failure.is_none()
    }

    /// Human-readable status line for this run.
    pub fn status_line(&self) -> String {
        if let Some(ref failure) = self.failure {
            return format!("Sync failed ({failure}); no changes made.");
        }

        if self.added == 0 {
            return "Sync complete: no new quotes added.".to_string();
        }

        let mut line = format!(
            "Sync complete: added {} new quote(s) from server.",
            self.added
        );
        if self.skipped > 0 {
            line.push_str(&format!(" ({} existing quote(s) ignored.)", self.skipped));
        }
        line
    }
}

/// Runs one sync: fetch, merge, persist, record the outcome.
///
/// A fetch failure is recorded in the summary and never escapes to the
/// caller; the store is left untouched. Local persistence failures do
/// propagate, since losing a merge silently would be worse than
/// failing the command.
pub fn sync_once(store: &mut QuoteStore, client: &SyncClient) -> Result<SyncSummary> {
    let summary = match client.fetch_quotes() {
        Ok(incoming) => {
            let report = store.merge_remote(incoming)?;

            if report.added > 0 {
                // Best-effort write-back; the mock endpoint just echoes it
                if let Err(e) = client.push_snapshot(store.len()) {
                    tracing::debug!("Snapshot push failed: {e}");
                }
            }

            SyncSummary {
                added: report.added,
                skipped: report.skipped,
                failure: None,
            }
        }
        Err(e) => {
            tracing::warn!("Failed to fetch remote quotes: {e}");
            SyncSummary {
                failure: Some(e.to_string()),
                ..Default::default()
            }
        }
    };

    SyncState::record(store.db(), &summary)?;
    Ok(summary)
}
