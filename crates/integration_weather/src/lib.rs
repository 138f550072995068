//! OpenWeather integration
//!
//! Client for the OpenWeather 2.5 API (<https://openweathermap.org/api>).
//! Fetches current conditions and the 5 day / 3 hour forecast and reshapes
//! both into the simplified domain records.

pub mod client;
mod models;
pub mod normalize;

pub use client::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
pub use models::{
    CityBlock, CurrentConditionsResponse, ForecastItem, ForecastResponse, MainBlock, ResponseCode,
    SysBlock, WeatherBlock, WindBlock,
};
