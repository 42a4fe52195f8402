use axum::{Json, extract::State, http::StatusCode};

use crate::AppState;
use crate::models::price::{AveragePriceResponse, ErrorResponse};

/// Handler for GET /analytics/average
///
/// One entry per distinct resource with the arithmetic mean of all its
/// stored prices.
pub async fn get_average_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<AveragePriceResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let averages = state.store.average_by_resource().await.map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Database error: {}", e),
            }),
        )
    })?;

    Ok(Json(
        averages
            .into_iter()
            .map(|avg| AveragePriceResponse {
                resource: avg.resource,
                average_price: avg.average_price,
            })
            .collect(),
    ))
}
