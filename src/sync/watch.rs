//! Periodic sync loop (watch mode).
//!
//! Runs one sync immediately at startup, then one per configured
//! interval until Ctrl-C. At most one sync is in flight at a time:
//! a tick that arrives while a run is still executing is skipped.
//!
//! Watch mode logs to `watch.log` under the data directory in addition
//! to stderr. The CLI leaves subscriber installation to this module so
//! both layers land in one registry.

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tokio::time::{interval, Duration};
use tracing_appender::non_blocking::WorkerGuard;

use super::{sync_once, SyncClient, SyncSummary};
use crate::config::Config;
use crate::storage::db::{data_dir, Database};
use crate::store::QuoteStore;

/// Runs the watch loop until interrupted.
pub async fn run_watch(config: Config, verbose: bool) -> Result<()> {
    let _guard = setup_logging(&data_dir()?, verbose)?;

    tracing::info!(
        "Watch mode started, syncing every {}s",
        config.sync_interval_secs
    );

    let in_flight = Arc::new(tokio::sync::Mutex::new(()));

    // The first tick fires immediately, giving the startup run
    let mut ticker = interval(Duration::from_secs(config.sync_interval_secs.max(1)));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let permit = match in_flight.clone().try_lock_owned() {
                    Ok(permit) => permit,
                    Err(_) => {
                        tracing::warn!("Previous sync still running, skipping this tick");
                        continue;
                    }
                };

                let config = config.clone();
                tokio::task::spawn_blocking(move || {
                    let _permit = permit;
                    match run_single(&config) {
                        Ok(summary) => tracing::info!("{}", summary.status_line()),
                        Err(e) => tracing::error!("Sync run failed: {e:#}"),
                    }
                });
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Received Ctrl+C, stopping watch");
                break;
            }
        }
    }

    Ok(())
}

/// Performs one full sync run against the default database.
fn run_single(config: &Config) -> Result<SyncSummary> {
    let db = Database::open_default().context("Could not open database")?;
    let mut store = QuoteStore::load(db)?;
    let client = SyncClient::new(config)?;
    sync_once(&mut store, &client)
}

/// Installs the watch-mode subscriber: a stderr layer plus a
/// non-blocking `watch.log` appender under the given directory.
///
/// Returns a guard that must be kept alive for the duration of the
/// loop; dropping it flushes buffered log lines to the file.
fn setup_logging(dir: &Path, verbose: bool) -> Result<WorkerGuard> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let file_appender = tracing_appender::rolling::never(dir, "watch.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .without_time();

    let filter = if verbose {
        "quotable=debug"
    } else {
        "quotable=info"
    };

    // try_init keeps repeated installs (e.g. in tests) from panicking
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    Ok(guard)
}
