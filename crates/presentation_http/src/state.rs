//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherService;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather lookups
    pub weather_service: Arc<WeatherService>,
}

impl AppState {
    /// Create state around a weather service
    pub fn new(weather_service: WeatherService) -> Self {
        Self {
            weather_service: Arc::new(weather_service),
        }
    }
}
