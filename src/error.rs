use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::provider::ProviderError;
use crate::weather::models::WeatherResponse;

#[derive(Error, Debug)]
pub enum WeatherApiError {
    /// One or more request-validation failures, in order of detection.
    #[error("{}", .0.join(" "))]
    BadRequest(Vec<String>),

    #[error(transparent)]
    Upstream(#[from] ProviderError),
}

impl WeatherApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_messages(self) -> Vec<String> {
        match self {
            Self::BadRequest(errors) => errors,
            Self::Upstream(e) => vec![e.to_string()],
        }
    }
}

// Handlers return Result<_, WeatherApiError> directly; the error body
// carries zero-valued success fields alongside the error sequence.
impl IntoResponse for WeatherApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        tracing::error!(error = %self, status = %status, "Weather API error");

        let body = WeatherResponse::from_errors(self.into_messages());
        (status, Json(body)).into_response()
    }
}
