mod forecast;
mod models;
mod openweather;

use async_trait::async_trait;
use thiserror::Error;

pub use forecast::WarmestDay;
pub use openweather::OpenWeatherProvider;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to fetch data: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("No data returned from weather provider")]
    EmptyForecast,
}

/// Capability seam between the request handler and the weather data
/// provider. One production implementation (OpenWeatherMap); tests
/// substitute their own.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Reverse-geocode the coordinate and report whether it resolves to
    /// the United Kingdom.
    async fn check_uk_location(&self, lat: f32, long: f32) -> Result<bool, ProviderError>;

    /// Fetch the 5-day/3-hour forecast and reduce it to the warmest
    /// interval.
    async fn get_warmest_day(&self, lat: f32, long: f32) -> Result<WarmestDay, ProviderError>;
}
