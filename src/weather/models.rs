use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::provider::WarmestDay;

/// Wire payload for `GET /weather`.
///
/// Exactly one of the two shapes is meaningful to the caller: a populated
/// warmest-day/temperature pair, or a non-empty `errors` sequence with the
/// success fields zero-valued. `errors` is omitted from the JSON when empty.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WeatherResponse {
    #[serde(rename = "warmest-day")]
    pub warmest_day: String,

    pub temperature: Temperature,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Temperature {
    pub value: f32,
    pub scale: String,
}

impl WeatherResponse {
    pub fn from_warmest_day(day: WarmestDay) -> Self {
        Self {
            warmest_day: day.timestamp,
            temperature: Temperature {
                value: day.temperature,
                scale: day.scale,
            },
            errors: Vec::new(),
        }
    }

    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            warmest_day: String::new(),
            temperature: Temperature {
                value: 0.0,
                scale: String::new(),
            },
            errors,
        }
    }
}
