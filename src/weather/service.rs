use std::sync::Arc;

use crate::error::WeatherApiError;
use crate::provider::{WarmestDay, WeatherProvider};

pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Resolve the warmest forecast day for a raw `lat`/`long` parameter
    /// pair.
    ///
    /// Validation runs in strict ordered stages, each short-circuiting on
    /// failure: numeric parse, decimal-precision check, UK geofence, then
    /// the forecast lookup. The first two stages check both parameters and
    /// accumulate one message per failing parameter, lat first.
    pub async fn warmest_uk_day(
        &self,
        lat_raw: &str,
        long_raw: &str,
    ) -> Result<WarmestDay, WeatherApiError> {
        let (lat, long) =
            parse_coordinates(lat_raw, long_raw).map_err(WeatherApiError::BadRequest)?;

        check_precision(lat_raw, long_raw).map_err(WeatherApiError::BadRequest)?;

        // A failed geofence lookup is treated the same as a non-UK
        // coordinate; the response does not distinguish the two.
        let is_uk = match self.provider.check_uk_location(lat, long).await {
            Ok(is_uk) => is_uk,
            Err(e) => {
                tracing::warn!(error = %e, lat = %lat, long = %long, "Geofence check failed, treating location as outside the UK");
                false
            }
        };

        if !is_uk {
            return Err(WeatherApiError::BadRequest(vec![
                "Only UK locations are permitted.".to_string(),
            ]));
        }

        Ok(self.provider.get_warmest_day(lat, long).await?)
    }
}

fn parse_coordinates(lat_raw: &str, long_raw: &str) -> Result<(f32, f32), Vec<String>> {
    let mut errors = Vec::new();

    let lat = lat_raw.parse::<f32>();
    if lat.is_err() {
        errors.push("lat parameter could not be parsed as a float.".to_string());
    }

    let long = long_raw.parse::<f32>();
    if long.is_err() {
        errors.push("long parameter could not be parsed as a float.".to_string());
    }

    match (lat, long) {
        (Ok(lat), Ok(long)) => Ok((lat, long)),
        _ => Err(errors),
    }
}

fn check_precision(lat_raw: &str, long_raw: &str) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !within_precision(lat_raw) {
        errors.push("lat parameter has too many decimal places.".to_string());
    }

    if !within_precision(long_raw) {
        errors.push("long parameter has too many decimal places.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Accepted parameter format: optional sign, digits, optional decimal
/// point, at most 6 fractional digits. Anything else (including exponent
/// notation that survives the float parse) is rejected here.
fn within_precision(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);

    match unsigned.split_once('.') {
        Some((whole, frac)) => {
            whole.chars().all(|c| c.is_ascii_digit())
                && frac.len() <= 6
                && frac.chars().all(|c| c.is_ascii_digit())
        }
        None => unsigned.chars().all(|c| c.is_ascii_digit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_precision_accepts_six_fractional_digits() {
        assert!(within_precision("51.507351"));
        assert!(within_precision("-0.127758"));
        assert!(within_precision("+1.5"));
    }

    #[test]
    fn test_within_precision_accepts_whole_numbers() {
        assert!(within_precision("51"));
        assert!(within_precision("-2"));
        assert!(within_precision("51."));
    }

    #[test]
    fn test_within_precision_rejects_seven_fractional_digits() {
        assert!(!within_precision("234.5672154"));
        assert!(!within_precision("-0.1277581"));
    }

    #[test]
    fn test_within_precision_rejects_non_digit_forms() {
        assert!(!within_precision("1e5"));
        assert!(!within_precision("12,5"));
        assert!(!within_precision("NaN"));
    }

    #[test]
    fn test_parse_coordinates_accumulates_both_failures_lat_first() {
        let errors = parse_coordinates("abc", "xyz").unwrap_err();

        assert_eq!(
            errors,
            vec![
                "lat parameter could not be parsed as a float.".to_string(),
                "long parameter could not be parsed as a float.".to_string(),
            ]
        );
    }

    #[test]
    fn test_parse_coordinates_reports_only_the_failing_parameter() {
        let errors = parse_coordinates("51.5", "xyz").unwrap_err();

        assert_eq!(
            errors,
            vec!["long parameter could not be parsed as a float.".to_string()]
        );
    }

    #[test]
    fn test_parse_coordinates_round_trips_well_formed_input() {
        let (lat, long) = parse_coordinates("51.507351", "-0.127758").unwrap();

        assert_eq!(lat, 51.507351f32);
        assert_eq!(long, -0.127758f32);
    }

    #[test]
    fn test_check_precision_accumulates_both_failures() {
        let errors = check_precision("234.5672154", "123.4567895").unwrap_err();

        assert_eq!(
            errors,
            vec![
                "lat parameter has too many decimal places.".to_string(),
                "long parameter has too many decimal places.".to_string(),
            ]
        );
    }
}
