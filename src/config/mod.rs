//! Configuration management
//!
//! Settings live in `config.json` under the data directory. A missing
//! file means defaults; unknown keys in the file are ignored.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::storage::db::data_dir;
use crate::sync::{
    DEFAULT_FETCH_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_SYNC_INTERVAL_SECS,
    DEFAULT_SYNC_URL,
};

/// The configuration keys accepted by `config get` and `config set`.
pub const CONFIG_KEYS: &[&str] = &[
    "sync_url",
    "sync_interval_secs",
    "fetch_limit",
    "request_timeout_secs",
    "dedup_on_import",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Read endpoint the sync engine pulls remote quotes from.
    pub sync_url: String,

    /// Seconds between automatic runs in watch mode.
    pub sync_interval_secs: u64,

    /// How many remote items are mapped into quotes per run.
    pub fetch_limit: usize,

    /// Request timeout for sync calls, in seconds.
    pub request_timeout_secs: u64,

    /// Skip imported records whose text matches an existing quote.
    pub dedup_on_import: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sync_url: DEFAULT_SYNC_URL.to_string(),
            sync_interval_secs: DEFAULT_SYNC_INTERVAL_SECS,
            fetch_limit: DEFAULT_FETCH_LIMIT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            dedup_on_import: true,
        }
    }
}

impl Config {
    /// Returns the path of the config file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.json"))
    }

    /// Loads the configuration, falling back to defaults when no file
    /// exists. A malformed file is an error rather than silently
    /// reverting the user's settings.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).context("Failed to read config file")?;
        serde_json::from_str(&contents).context("Failed to parse config file")
    }

    /// Persists the configuration.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(&path, contents).context("Failed to write config file")
    }

    /// Reads a single value by key.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "sync_url" => Some(self.sync_url.clone()),
            "sync_interval_secs" => Some(self.sync_interval_secs.to_string()),
            "fetch_limit" => Some(self.fetch_limit.to_string()),
            "request_timeout_secs" => Some(self.request_timeout_secs.to_string()),
            "dedup_on_import" => Some(self.dedup_on_import.to_string()),
            _ => None,
        }
    }

    /// Updates a single value by key, validating its type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "sync_url" => self.sync_url = value.to_string(),
            "sync_interval_secs" => {
                self.sync_interval_secs = value
                    .parse()
                    .with_context(|| format!("'{value}' is not a valid number of seconds"))?;
            }
            "fetch_limit" => {
                self.fetch_limit = value
                    .parse()
                    .with_context(|| format!("'{value}' is not a valid count"))?;
            }
            "request_timeout_secs" => {
                self.request_timeout_secs = value
                    .parse()
                    .with_context(|| format!("'{value}' is not a valid number of seconds"))?;
            }
            "dedup_on_import" => {
                self.dedup_on_import = value
                    .parse()
                    .with_context(|| format!("'{value}' is not true or false"))?;
            }
            _ => anyhow::bail!(
                "Unknown config key '{}'. Valid keys: {}",
                key,
                CONFIG_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.sync_url, DEFAULT_SYNC_URL);
        assert_eq!(config.sync_interval_secs, 60);
        assert_eq!(config.fetch_limit, 5);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.dedup_on_import);
    }

    #[test]
    fn test_get_every_listed_key() {
        let config = Config::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing value for key {key}");
        }
        assert!(config.get("unknown").is_none());
    }

    #[test]
    fn test_set_numeric_value() {
        let mut config = Config::default();
        config.set("sync_interval_secs", "90").unwrap();
        assert_eq!(config.sync_interval_secs, 90);
    }

    #[test]
    fn test_set_bool_value() {
        let mut config = Config::default();
        config.set("dedup_on_import", "false").unwrap();
        assert!(!config.dedup_on_import);
    }

    #[test]
    fn test_set_rejects_bad_number() {
        let mut config = Config::default();
        assert!(config.set("fetch_limit", "lots").is_err());
        assert_eq!(config.fetch_limit, DEFAULT_FETCH_LIMIT);
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = Config::default();
        let err = config.set("no_such_key", "1").unwrap_err();
        assert!(err.to_string().contains("no_such_key"));
    }

    #[test]
    fn test_serde_roundtrip_and_partial_file() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sync_url, config.sync_url);

        // Missing fields fall back to defaults
        let partial: Config = serde_json::from_str(r#"{"fetch_limit":3}"#).unwrap();
        assert_eq!(partial.fetch_limit, 3);
        assert_eq!(partial.sync_interval_secs, DEFAULT_SYNC_INTERVAL_SECS);
    }
}
