//! OpenWeather payload models
//!
//! Wire shapes of the `/weather` and `/forecast` responses. Blocks the
//! normalizer has to check for are optional here so that a missing block is
//! reported as a malformed response instead of a generic decode error.

use serde::Deserialize;

/// The `cod` field: a number on `/weather`, a string on `/forecast`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ResponseCode {
    /// Numeric code, e.g. `200`
    Number(i64),
    /// Textual code, e.g. `"404"`
    Text(String),
}

impl ResponseCode {
    /// Whether the code signals an unknown location
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Number(code) => *code == 404,
            Self::Text(code) => code.trim() == "404",
        }
    }
}

/// Temperature, pressure and humidity block
#[derive(Debug, Clone, Deserialize)]
pub struct MainBlock {
    /// Temperature
    pub temp: f64,
    /// Apparent temperature
    pub feels_like: f64,
    /// Minimum temperature (interval minimum on forecast items)
    pub temp_min: f64,
    /// Maximum temperature (interval maximum on forecast items)
    pub temp_max: f64,
    /// Pressure in hPa
    pub pressure: u16,
    /// Relative humidity in percent
    pub humidity: u8,
}

/// One condition entry of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherBlock {
    /// Condition id
    #[serde(default)]
    pub id: Option<u32>,
    /// Condition group, e.g. "Rain"
    #[serde(default)]
    pub main: Option<String>,
    /// Condition text, e.g. "light rain"
    pub description: String,
    /// Icon id, e.g. "10d"
    pub icon: String,
}

/// Wind block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindBlock {
    /// Speed in m/s (metric units)
    #[serde(default)]
    pub speed: Option<f64>,
    /// Direction in degrees; omitted by the provider in calm conditions
    #[serde(default)]
    pub deg: Option<u16>,
}

/// `sys` block of the current-conditions response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SysBlock {
    /// ISO country code
    #[serde(default)]
    pub country: Option<String>,
    /// Sunrise, unix seconds
    #[serde(default)]
    pub sunrise: Option<i64>,
    /// Sunset, unix seconds
    #[serde(default)]
    pub sunset: Option<i64>,
}

/// Response of `GET /weather`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentConditionsResponse {
    /// Response code
    #[serde(default)]
    pub cod: Option<ResponseCode>,
    /// Resolved place name
    #[serde(default)]
    pub name: Option<String>,
    /// Country and sun times
    #[serde(default)]
    pub sys: Option<SysBlock>,
    /// Measurements
    #[serde(default)]
    pub main: Option<MainBlock>,
    /// Conditions, first entry is the primary one
    #[serde(default)]
    pub weather: Vec<WeatherBlock>,
    /// Wind
    #[serde(default)]
    pub wind: Option<WindBlock>,
}

/// One 3-hourly entry of the forecast timeline
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    /// Interval start, unix seconds
    pub dt: i64,
    /// Measurements
    #[serde(default)]
    pub main: Option<MainBlock>,
    /// Conditions
    #[serde(default)]
    pub weather: Vec<WeatherBlock>,
    /// Wind
    #[serde(default)]
    pub wind: Option<WindBlock>,
}

/// `city` block of the forecast response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CityBlock {
    /// Resolved place name
    #[serde(default)]
    pub name: Option<String>,
    /// ISO country code
    #[serde(default)]
    pub country: Option<String>,
    /// Shift from UTC in seconds
    #[serde(default)]
    pub timezone: Option<i32>,
}

/// Response of `GET /forecast`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    /// Response code
    #[serde(default)]
    pub cod: Option<ResponseCode>,
    /// The timeline, oldest first
    #[serde(default)]
    pub list: Option<Vec<ForecastItem>>,
    /// Place the timeline is for
    #[serde(default)]
    pub city: Option<CityBlock>,
}
