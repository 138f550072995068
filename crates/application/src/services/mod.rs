//! Application services (use cases)

mod weather_service;

pub use weather_service::WeatherService;
