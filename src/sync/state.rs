//! Persisted record of the last sync attempt.
//!
//! Written after every run, successful or not, and shown by the
//! `status` command.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::SyncSummary;
use crate::storage::db::{Database, KEY_SYNC_STATE};

/// Outcome of the most recent sync run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SyncState {
    /// When the last sync was attempted (successfully or not).
    pub last_sync_at: Option<DateTime<Utc>>,
    /// Whether the remote source was reached.
    pub last_sync_success: Option<bool>,
    /// Quotes added by the last run.
    pub last_added: Option<usize>,
    /// Conflicts skipped by the last run.
    pub last_skipped: Option<usize>,
}

impl SyncState {
    /// Loads the last recorded state.
    ///
    /// Returns the default (never synced) state when nothing has been
    /// recorded or the stored value cannot be parsed.
    pub fn load(db: &Database) -> Result<Self> {
        match db.get(KEY_SYNC_STATE)? {
            Some(json) => Ok(serde_json::from_str(&json).unwrap_or_default()),
            None => Ok(Self::default()),
        }
    }

    /// Records the outcome of a sync attempt.
    pub fn record(db: &Database, summary: &SyncSummary) -> Result<()> {
        let state = SyncState {
            last_sync_at: Some(Utc::now()),
            last_sync_success: Some(summary.succeeded()),
            last_added: Some(summary.added),
            last_skipped: Some(summary.skipped),
        };
        db.set(KEY_SYNC_STATE, &serde_json::to_string(&state)?)
    }
}
