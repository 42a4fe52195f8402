//! One fetch cycle: poll the upstream API, filter to the allow-list, and
//! persist the surviving prices as a single timestamped batch.

use tracing::info;

use crate::services::price_store::{PriceObservation, PriceStore};
use crate::services::resource_filter;
use crate::services::sfl_world::{PriceSnapshot, SflWorldService};

/// Error types for one fetch cycle. None of these escape the scheduled-job
/// boundary; the job logs them and waits for the next tick.
#[derive(Debug)]
pub enum FetchError {
    Upstream(String),
    MalformedPayload(String),
    Persistence(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Upstream(msg) => write!(f, "Upstream error: {}", msg),
            FetchError::MalformedPayload(msg) => write!(f, "Malformed payload: {}", msg),
            FetchError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Clone)]
pub struct PriceFetcher {
    api: SflWorldService,
    store: PriceStore,
}

impl PriceFetcher {
    pub fn new(api: SflWorldService, store: PriceStore) -> Self {
        Self { api, store }
    }

    /// Run one complete fetch cycle and return the number of rows stored.
    pub async fn run(&self) -> Result<usize, FetchError> {
        let snapshot = self.api.fetch_prices().await?;
        self.store_snapshot(snapshot).await
    }

    /// Filter a snapshot to the allow-list and persist the remainder in one
    /// transaction. Every stored row carries the snapshot's timestamp.
    pub async fn store_snapshot(&self, snapshot: PriceSnapshot) -> Result<usize, FetchError> {
        let timestamp = snapshot.updated_at;
        let total = snapshot.prices.len();

        let observations: Vec<PriceObservation> = snapshot
            .prices
            .into_iter()
            .filter(|(resource, _)| resource_filter::is_allowed(resource))
            .map(|(resource, price)| PriceObservation {
                resource,
                price,
                timestamp,
            })
            .collect();

        let stored = self
            .store
            .insert_batch(&observations)
            .await
            .map_err(|e| FetchError::Persistence(e.to_string()))?;

        info!(
            timestamp = %timestamp,
            stored = stored,
            skipped = total - stored,
            "Filtered prices fetched and stored"
        );

        Ok(stored)
    }
}
