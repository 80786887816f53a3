use axum::{routing::get, Router};

use crate::openapi;
use crate::weather::handlers as weather_handlers;
use crate::AppState;

/// Build the weather API routes
fn weather_routes() -> Router<AppState> {
    Router::new().route("/weather", get(weather_handlers::get_weather))
}

/// Build the complete application router
pub fn build_router() -> Router<AppState> {
    Router::new()
        // Health check at root level
        .route("/", get(weather_handlers::health))
        .route("/health", get(weather_handlers::health))
        .merge(weather_routes())
        // OpenAPI document
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
}
