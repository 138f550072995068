//! Weather lookup service
//!
//! Thin use-case layer between the HTTP handlers and the provider port:
//! records what was asked for, forwards to the port and logs failures with
//! their full detail so the response layer can stay generic.

use std::fmt;
use std::sync::Arc;

use domain::{CurrentWeather, Forecast, LocationQuery};
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Service for current-conditions and forecast lookups
#[derive(Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherPort>,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("provider", &"<WeatherPort>")
            .finish()
    }
}

impl WeatherService {
    /// Create a new service backed by the given provider
    pub fn new(provider: Arc<dyn WeatherPort>) -> Self {
        Self { provider }
    }

    /// Look up current conditions
    #[instrument(skip(self), fields(location = %query))]
    pub async fn current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentWeather, ApplicationError> {
        let result = self.provider.current_weather(query).await;
        match &result {
            Ok(weather) => info!(
                city = %weather.city,
                country = %weather.country,
                temperature = weather.temperature,
                "Current weather resolved"
            ),
            Err(e) => log_failure("current weather", e),
        }
        result
    }

    /// Look up the daily forecast
    #[instrument(skip(self), fields(location = %query))]
    pub async fn forecast(&self, query: &LocationQuery) -> Result<Forecast, ApplicationError> {
        let result = self.provider.forecast(query).await;
        match &result {
            Ok(forecast) => info!(days = forecast.len(), "Forecast resolved"),
            Err(e) => log_failure("forecast", e),
        }
        result
    }
}

fn log_failure(what: &str, err: &ApplicationError) {
    if err.is_client_error() {
        debug!(error = %err, "{what} lookup rejected");
    } else {
        warn!(error = %err, "{what} lookup failed");
    }
}
