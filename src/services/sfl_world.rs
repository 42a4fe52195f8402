//! HTTP client for the sfl.world price API.
//!
//! One GET returns every p2p market price plus the instant the snapshot was
//! generated (`updatedAt`, epoch milliseconds).

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::services::price_fetcher::FetchError;

/// Upstream request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Clone)]
pub struct SflWorldService {
    client: Client,
    base_url: String,
}

/// One validated upstream snapshot: raw p2p prices plus the instant they
/// were generated.
#[derive(Debug, Clone)]
pub struct PriceSnapshot {
    pub prices: HashMap<String, f64>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct PricesPayload {
    #[serde(default)]
    data: PayloadData,
    #[serde(rename = "updatedAt")]
    updated_at: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
struct PayloadData {
    #[serde(default)]
    p2p: HashMap<String, f64>,
}

impl SflWorldService {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self { client, base_url }
    }

    /// Fetch and validate one price snapshot from the upstream API.
    pub async fn fetch_prices(&self) -> Result<PriceSnapshot, FetchError> {
        tracing::debug!("Fetching p2p prices from {}", self.base_url);

        let response = self
            .client
            .get(&self.base_url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(FetchError::Upstream(format!(
                "sfl.world API error {}: {}",
                status, error_text
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Upstream(e.to_string()))?;

        parse_snapshot(&body)
    }
}

/// Parse an upstream response body into a validated snapshot.
///
/// A missing `data` or `p2p` object decodes to an empty price map; a missing
/// or zero `updatedAt` rejects the whole payload.
pub fn parse_snapshot(body: &str) -> Result<PriceSnapshot, FetchError> {
    let payload: PricesPayload = serde_json::from_str(body)
        .map_err(|e| FetchError::MalformedPayload(format!("Invalid payload: {}", e)))?;

    let updated_ms = match payload.updated_at {
        Some(ms) if ms != 0 => ms,
        _ => {
            return Err(FetchError::MalformedPayload(
                "Missing updatedAt in API response".to_string(),
            ));
        }
    };

    let updated_at = DateTime::from_timestamp_millis(updated_ms).ok_or_else(|| {
        FetchError::MalformedPayload(format!("updatedAt out of range: {}", updated_ms))
    })?;

    Ok(PriceSnapshot {
        prices: payload.data.p2p,
        updated_at,
    })
}
