//! Price Sync Job
//!
//! Periodically polls the sfl.world price API and stores filtered prices
//! in the resource_prices table. The interval's first tick fires at once,
//! so startup triggers an immediate fetch. Supports graceful shutdown via
//! SIGINT.

use std::env;
use tokio::time::{Duration, interval};
use tracing::{error, info};

use crate::services::price_fetcher::PriceFetcher;

/// Default fetch interval in seconds (15 minutes)
const DEFAULT_SYNC_INTERVAL_SECS: u64 = 900;

/// Environment variable overriding the fetch interval
const ENV_SYNC_INTERVAL: &str = "PRICE_SYNC_INTERVAL_SECS";

/// Start the price sync job.
///
/// Spawns a background task that runs one fetch cycle immediately, then one
/// per interval for the lifetime of the process. A failed cycle is logged
/// and skipped; the loop keeps running. Cycles are serialized: the next tick
/// is not taken until the previous cycle has completed.
pub async fn start_price_sync_job(fetcher: PriceFetcher) {
    tokio::spawn(async move {
        let interval_secs: u64 = env::var(ENV_SYNC_INTERVAL)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SYNC_INTERVAL_SECS);

        info!(interval_secs = interval_secs, "Price sync job started");

        let mut interval = interval(Duration::from_secs(interval_secs));

        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received, stopping price sync job");
                    break;
                }
                _ = interval.tick() => {
                    match fetcher.run().await {
                        Ok(stored) => {
                            info!(stored = stored, "Price sync completed");
                        }
                        Err(e) => {
                            error!(error = %e, "Price sync failed, skipping cycle");
                        }
                    }
                }
            }
        }

        info!("Price sync job stopped");
    });
}
