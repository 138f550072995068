//! Current weather record

use serde::{Deserialize, Serialize};

use crate::value_objects::Humidity;

/// Simplified current conditions for one place
///
/// Built fresh for every request from the provider payload and serialized
/// straight into the response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Place name as resolved by the provider
    pub city: String,
    /// ISO country code
    pub country: String,
    /// Temperature in °C, rounded
    pub temperature: i32,
    /// Apparent temperature in °C, rounded
    pub feels_like: i32,
    /// Relative humidity
    pub humidity: Humidity,
    /// Atmospheric pressure in hPa
    pub pressure: u16,
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Wind direction in degrees, when the provider reports one
    pub wind_direction: Option<u16>,
    /// Textual condition, e.g. "light rain"
    pub description: String,
    /// Provider icon identifier, e.g. "10d"
    pub icon: String,
    /// Local time of sunrise
    pub sunrise: String,
    /// Local time of sunset
    pub sunset: String,
}
