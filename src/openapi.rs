use axum::Json;
use utoipa::OpenApi;

use crate::weather::models::{Temperature, WeatherResponse};

/// OpenAPI documentation for the Warmrs API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Warmrs API",
        version = "0.1.0",
        description = "Returns the warmest 5-day forecast interval for a UK coordinate, backed by OpenWeatherMap."
    ),
    paths(crate::weather::handlers::get_weather),
    tags(
        (name = "weather", description = "Warmest-day lookup for UK coordinates")
    ),
    components(
        schemas(
            WeatherResponse,
            Temperature,
        )
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
