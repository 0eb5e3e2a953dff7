//! HTTP client for the remote quote source.
//!
//! The source is a mock REST endpoint returning a list of posts. The
//! first few post titles are mapped into quotes under the fixed
//! "Server Data" category. Requests carry an explicit timeout so a
//! stalled connection fails like any other network error.

use chrono::{DateTime, Utc};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::SyncError;
use crate::config::Config;
use crate::storage::models::{Quote, SERVER_CATEGORY};

/// Client for fetching and pushing against the remote source.
pub struct SyncClient {
    /// HTTP client instance.
    client: Client,
    /// Endpoint URL.
    url: String,
    /// How many remote items to map into quotes per fetch.
    fetch_limit: usize,
}

impl SyncClient {
    /// Creates a client from the active configuration.
    pub fn new(config: &Config) -> Result<Self, SyncError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            url: config.sync_url.trim_end_matches('/').to_string(),
            fetch_limit: config.fetch_limit,
        })
    }

    /// Returns the configured endpoint URL.
    #[allow(dead_code)]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetches the remote batch and maps it into server-sourced quotes.
    ///
    /// Only the first `fetch_limit` items are kept. Each item's title
    /// gets its first character uppercased and becomes the quote text.
    pub fn fetch_quotes(&self) -> Result<Vec<Quote>, SyncError> {
        let response = self.client.get(&self.url).send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SyncError::ServerError { status, message });
        }

        let posts: Vec<RemotePost> = response.json()?;

        Ok(posts
            .into_iter()
            .take(self.fetch_limit)
            .filter(|post| !post.title.is_empty())
            .map(|post| Quote::new(capitalize_first(&post.title), SERVER_CATEGORY))
            .collect())
    }

    /// Posts a small synthetic snapshot back to the endpoint.
    ///
    /// The mock endpoint echoes the payload; the response is logged and
    /// not otherwise consumed.
    pub fn push_snapshot(&self, quote_count: usize) -> Result<(), SyncError> {
        let payload = Snapshot {
            title: "quotable snapshot".to_string(),
            body: format!("{quote_count} quotes stored locally"),
            user_id: 1,
            synced_at: Utc::now(),
        };

        let response = self.client.post(&self.url).json(&payload).send()?;
        tracing::debug!("Snapshot push returned {}", response.status());
        Ok(())
    }
}

/// A post as returned by the remote source; only the title is used.
#[derive(Debug, Deserialize)]
struct RemotePost {
    #[serde(default)]
    title: String,
}

/// Synthetic payload for the write-back call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    title: String,
    body: String,
    user_id: u32,
    /// When the local merge that triggered this push completed.
    synced_at: DateTime<Utc>,
}

/// Uppercases the first character of a string.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
