use serde::Deserialize;

/// OpenWeatherMap 5-day/3-hour forecast response (`/data/2.5/forecast`).
///
/// A response that omits the list entirely is treated as an empty list.
#[derive(Debug, Deserialize)]
pub struct OwmForecastResponse {
    #[serde(default)]
    pub list: Vec<OwmForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub struct OwmForecastEntry {
    pub main: OwmForecastMain,
    pub dt_txt: String,
}

#[derive(Debug, Deserialize)]
pub struct OwmForecastMain {
    pub temp: f32,
    pub humidity: u32,
}

/// One reverse-geocoding candidate (`/geo/1.0/reverse` returns an array).
#[derive(Debug, Deserialize)]
pub struct OwmGeoCandidate {
    pub name: String,
    pub country: String,
}
