/// One 3-hour forecast record from the provider.
///
/// The timestamp is the provider's own label (e.g. "2023-09-25 06:00:00")
/// and is passed through verbatim, never parsed as a calendar type.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastInterval {
    pub timestamp: String,
    pub temperature: f32,
    pub humidity: u32,
}

/// The selected warmest forecast interval.
#[derive(Debug, Clone, PartialEq)]
pub struct WarmestDay {
    pub timestamp: String,
    pub temperature: f32,
    pub scale: String,
}

/// Wire spelling of the temperature scale, kept as published.
pub const TEMPERATURE_SCALE: &str = "Celcius";

/// Sentinel below any realistic forecast temperature, so the first
/// interval always becomes the initial best.
const SENTINEL_TEMP: f32 = -200.0;

/// Select the interval with the highest temperature. Ties at the maximum
/// temperature are broken by lowest humidity; a full tie keeps the
/// earliest-encountered interval.
pub fn select_warmest(intervals: &[ForecastInterval]) -> WarmestDay {
    let mut best = WarmestDay {
        timestamp: String::new(),
        temperature: SENTINEL_TEMP,
        scale: TEMPERATURE_SCALE.to_string(),
    };
    let mut best_humidity = 0u32;

    for interval in intervals {
        let warmer = interval.temperature > best.temperature;
        // Exact f32 equality is the tie condition.
        let drier_tie =
            interval.temperature == best.temperature && interval.humidity < best_humidity;

        if warmer || drier_tie {
            best.temperature = interval.temperature;
            best.timestamp = interval.timestamp.clone();
            best_humidity = interval.humidity;
        }
    }

    best
}
