//! Weather provider port
//!
//! Defines the interface for retrieving current conditions and the daily
//! forecast for a location.

use async_trait::async_trait;
use domain::{CurrentWeather, Forecast, LocationQuery};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather provider operations
///
/// Implementations perform one outbound call per method and return records
/// already normalized into the domain shapes.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a location
    async fn current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentWeather, ApplicationError>;

    /// Get the aggregated daily forecast for a location
    async fn forecast(&self, query: &LocationQuery) -> Result<Forecast, ApplicationError>;
}
