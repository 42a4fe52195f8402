use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::entities::resource_prices;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    pub id: i32,
    pub resource: String,
    pub price: f64,
    pub timestamp: DateTime<FixedOffset>,
}

impl From<resource_prices::Model> for PriceResponse {
    fn from(model: resource_prices::Model) -> Self {
        Self {
            id: model.id,
            resource: model.resource,
            price: model.price,
            timestamp: model.timestamp,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendQuery {
    pub limit: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub price: f64,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AveragePriceResponse {
    pub resource: String,
    pub average_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
