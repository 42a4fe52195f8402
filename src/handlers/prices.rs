use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::AppState;
use crate::models::price::{ErrorResponse, PriceResponse, TrendPoint, TrendQuery};

const DEFAULT_TREND_LIMIT: u64 = 10;
const MAX_TREND_LIMIT: u64 = 100;

/// Handler for GET /prices
pub async fn get_all_prices(
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = state.store.all().await.map_err(internal_error)?;

    Ok(Json(rows.into_iter().map(PriceResponse::from).collect()))
}

/// Handler for GET /prices/{resource}
pub async fn get_resource_prices(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Result<Json<Vec<PriceResponse>>, (StatusCode, Json<ErrorResponse>)> {
    let rows = state
        .store
        .by_resource(&resource)
        .await
        .map_err(internal_error)?;

    if rows.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No prices found for resource: {}", resource),
            }),
        ));
    }

    Ok(Json(rows.into_iter().map(PriceResponse::from).collect()))
}

/// Handler for GET /prices/{resource}/trend
///
/// Returns the `limit` most recent observations, oldest first.
pub async fn get_price_trend(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(query): Query<TrendQuery>,
) -> Result<Json<Vec<TrendPoint>>, (StatusCode, Json<ErrorResponse>)> {
    let limit = query.limit.unwrap_or(DEFAULT_TREND_LIMIT);
    if limit < 1 || limit > MAX_TREND_LIMIT {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: format!("limit must be between 1 and {}", MAX_TREND_LIMIT),
            }),
        ));
    }

    let rows = state
        .store
        .trend(&resource, limit)
        .await
        .map_err(internal_error)?;

    if rows.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("No trend data found for resource: {}", resource),
            }),
        ));
    }

    // Store returns newest-first; clients expect oldest-first.
    let points: Vec<TrendPoint> = rows
        .into_iter()
        .rev()
        .map(|row| TrendPoint {
            price: row.price,
            timestamp: row.timestamp.to_rfc3339(),
        })
        .collect();

    Ok(Json(points))
}

fn internal_error(e: sea_orm::DbErr) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Database error: {}", e),
        }),
    )
}
