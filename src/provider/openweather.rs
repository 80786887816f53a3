use async_trait::async_trait;
use reqwest::Client;

use super::forecast::{select_warmest, ForecastInterval, WarmestDay};
use super::models::{OwmForecastResponse, OwmGeoCandidate};
use super::{ProviderError, WeatherProvider};

const FORECAST_PATH: &str = "/data/2.5/forecast";
const REVERSE_GEO_PATH: &str = "/geo/1.0/reverse";
const GEO_CANDIDATE_LIMIT: &str = "5";
const UK_COUNTRY_CODE: &str = "GB";

/// OpenWeatherMap-backed provider. Holds only immutable configuration and
/// a cloned client handle, safe for concurrent use across requests.
pub struct OpenWeatherProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherProvider {
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn check_uk_location(&self, lat: f32, long: f32) -> Result<bool, ProviderError> {
        tracing::debug!(lat = %lat, long = %long, "Reverse geocoding coordinate");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, REVERSE_GEO_PATH))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", long.to_string()),
                ("limit", GEO_CANDIDATE_LIMIT.to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(ProviderError::ApiError(body));
        }

        let candidates: Vec<OwmGeoCandidate> = response.json().await?;

        // No candidates means the coordinate resolves nowhere; that is a
        // negative answer, not an error.
        let Some(first) = candidates.first() else {
            return Ok(false);
        };

        tracing::debug!(place = %first.name, country = %first.country, "Reverse geocode candidate");

        Ok(first.country == UK_COUNTRY_CODE)
    }

    async fn get_warmest_day(&self, lat: f32, long: f32) -> Result<WarmestDay, ProviderError> {
        tracing::debug!(lat = %lat, long = %long, "Fetching 5-day forecast");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, FORECAST_PATH))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", long.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| format!("HTTP {}", status));
            return Err(ProviderError::ApiError(body));
        }

        let data: OwmForecastResponse = response.json().await?;

        if data.list.is_empty() {
            return Err(ProviderError::EmptyForecast);
        }

        let intervals: Vec<ForecastInterval> = data
            .list
            .into_iter()
            .map(|entry| ForecastInterval {
                timestamp: entry.dt_txt,
                temperature: entry.main.temp,
                humidity: entry.main.humidity,
            })
            .collect();

        let warmest = select_warmest(&intervals);
        tracing::info!(day = %warmest.timestamp, temp = %warmest.temperature, "Warmest forecast day selected");

        Ok(warmest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider(server: &MockServer) -> OpenWeatherProvider {
        OpenWeatherProvider::new(Client::new(), &server.uri(), "test-api-key")
    }

    #[tokio::test]
    async fn test_check_uk_location_true_for_gb_candidate() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/reverse"))
            .and(query_param("lat", "51.5"))
            .and(query_param("lon", "-0.12"))
            .and(query_param("limit", "5"))
            .and(query_param("appid", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "London", "country": "GB", "lat": 51.5, "lon": -0.12},
                {"name": "Islington", "country": "GB", "lat": 51.53, "lon": -0.1}
            ])))
            .mount(&server)
            .await;

        let is_uk = provider(&server).check_uk_location(51.5, -0.12).await.unwrap();
        assert!(is_uk);
    }

    #[tokio::test]
    async fn test_check_uk_location_false_for_other_country() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "Paris", "country": "FR", "lat": 48.85, "lon": 2.35}
            ])))
            .mount(&server)
            .await;

        let is_uk = provider(&server).check_uk_location(48.85, 2.35).await.unwrap();
        assert!(!is_uk);
    }

    #[tokio::test]
    async fn test_check_uk_location_empty_candidates_is_false_not_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let is_uk = provider(&server).check_uk_location(0.0, 0.0).await.unwrap();
        assert!(!is_uk);
    }

    #[tokio::test]
    async fn test_check_uk_location_only_first_candidate_counts() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geo/1.0/reverse"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "Calais", "country": "FR", "lat": 50.95, "lon": 1.85},
                {"name": "Dover", "country": "GB", "lat": 51.12, "lon": 1.31}
            ])))
            .mount(&server)
            .await;

        let is_uk = provider(&server).check_uk_location(50.95, 1.85).await.unwrap();
        assert!(!is_uk);
    }

    #[tokio::test]
    async fn test_get_warmest_day_selects_highest_temperature() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .and(query_param("lat", "53.48"))
            .and(query_param("lon", "-2.24"))
            .and(query_param("units", "metric"))
            .and(query_param("appid", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "list": [
                    {"main": {"temp": 14.2, "humidity": 60}, "dt_txt": "2023-09-25 06:00:00"},
                    {"main": {"temp": 19.8, "humidity": 90}, "dt_txt": "2023-09-26 12:00:00"},
                    {"main": {"temp": 17.1, "humidity": 40}, "dt_txt": "2023-09-27 15:00:00"}
                ]
            })))
            .mount(&server)
            .await;

        let warmest = provider(&server).get_warmest_day(53.48, -2.24).await.unwrap();

        assert_eq!(warmest.timestamp, "2023-09-26 12:00:00");
        assert_eq!(warmest.temperature, 19.8);
        assert_eq!(warmest.scale, "Celcius");
    }

    #[tokio::test]
    async fn test_get_warmest_day_empty_list_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"list": []})))
            .mount(&server)
            .await;

        let err = provider(&server).get_warmest_day(53.48, -2.24).await.unwrap_err();

        assert!(matches!(err, ProviderError::EmptyForecast));
        assert_eq!(err.to_string(), "No data returned from weather provider");
    }

    #[tokio::test]
    async fn test_get_warmest_day_missing_list_key_is_an_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"cod": "200"})))
            .mount(&server)
            .await;

        let err = provider(&server).get_warmest_day(53.48, -2.24).await.unwrap_err();
        assert!(matches!(err, ProviderError::EmptyForecast));
    }

    #[tokio::test]
    async fn test_get_warmest_day_non_success_status_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"cod":401,"message":"Invalid API key"}"#),
            )
            .mount(&server)
            .await;

        let err = provider(&server).get_warmest_day(53.48, -2.24).await.unwrap_err();

        match err {
            ProviderError::ApiError(body) => assert!(body.contains("Invalid API key")),
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_get_warmest_day_malformed_body_is_request_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = provider(&server).get_warmest_day(53.48, -2.24).await.unwrap_err();
        assert!(matches!(err, ProviderError::RequestError(_)));
    }
}
