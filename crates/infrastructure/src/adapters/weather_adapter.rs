//! Weather adapter - Implements WeatherPort using integration_weather

use std::sync::Arc;

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{CurrentWeather, Forecast, LocationQuery};
use integration_weather::{OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError};
use tracing::{debug, instrument};

/// Adapter for the OpenWeather API
pub struct WeatherAdapter {
    client: Arc<dyn WeatherClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter backed by a new OpenWeather client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    /// Create an adapter around an existing client
    #[must_use]
    pub fn with_client(client: Arc<dyn WeatherClient>) -> Self {
        Self { client }
    }

    /// Map integration weather error to application error
    pub fn map_error(err: WeatherError) -> ApplicationError {
        debug!(error = %err, "Mapping weather client error");
        match err {
            WeatherError::NotFound => ApplicationError::LocationNotFound,
            WeatherError::Unauthorized => ApplicationError::ProviderAuthError,
            WeatherError::RateLimitExceeded => ApplicationError::ProviderRateLimited,
            WeatherError::MalformedResponse(reason) => {
                ApplicationError::MalformedProviderResponse(reason)
            },
            WeatherError::ConnectionFailed(reason)
            | WeatherError::RequestFailed(reason)
            | WeatherError::ServiceUnavailable(reason) => {
                ApplicationError::ProviderUnavailable(reason)
            },
        }
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(location = %query))]
    async fn current_weather(
        &self,
        query: &LocationQuery,
    ) -> Result<CurrentWeather, ApplicationError> {
        self.client
            .get_current(query)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self), fields(location = %query))]
    async fn forecast(&self, query: &LocationQuery) -> Result<Forecast, ApplicationError> {
        self.client
            .get_forecast(query)
            .await
            .map_err(Self::map_error)
    }
}
