use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use super::models::WeatherResponse;
use crate::error::WeatherApiError;
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct WeatherQuery {
    /// Latitude, at most 6 decimal places
    pub lat: Option<String>,
    /// Longitude, at most 6 decimal places
    pub long: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Get the warmest forecast day for a UK coordinate
///
/// GET /weather?lat=51.507351&long=-0.127758
#[utoipa::path(
    get,
    path = "/weather",
    params(WeatherQuery),
    responses(
        (status = 200, description = "Warmest forecast day", body = WeatherResponse),
        (status = 400, description = "Invalid parameters or non-UK location", body = WeatherResponse),
        (status = 500, description = "Weather provider failure", body = WeatherResponse),
    ),
    tag = "weather"
)]
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherResponse>, WeatherApiError> {
    // Missing parameters fall through to the parse stage as empty strings.
    let lat = query.lat.unwrap_or_default();
    let long = query.long.unwrap_or_default();

    let warmest = state.weather_service.warmest_uk_day(&lat, &long).await?;

    Ok(Json(WeatherResponse::from_warmest_day(warmest)))
}
