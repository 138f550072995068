//! OpenWeather client
//!
//! HTTP client for the OpenWeather 2.5 `/weather` and `/forecast` resources.

use async_trait::async_trait;
use chrono::Local;
use domain::{CurrentWeather, Forecast, LocationQuery};
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{CurrentConditionsResponse, ForecastResponse};
use crate::normalize::{normalize_current, normalize_forecast};

/// Weather client errors
///
/// Messages never contain the request URL, which carries the API key.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Could not reach the provider (connect error or timeout)
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request failed or the provider answered with an unexpected status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The provider does not know the requested place
    #[error("Location not found")]
    NotFound,

    /// The provider rejected the API key
    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Provider-side failure (5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Successful status but unusable payload
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

/// OpenWeather client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key, sent as `appid`
    #[serde(skip_serializing, default = "empty_secret")]
    pub api_key: SecretString,

    /// Unit system passed to the provider (default: metric)
    #[serde(default = "default_units")]
    pub units: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn empty_secret() -> SecretString {
    SecretString::from(String::new())
}

fn default_units() -> String {
    "metric".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: empty_secret(),
            units: default_units(),
            timeout_secs: default_timeout(),
        }
    }
}

impl WeatherConfig {
    /// Configuration with the given API key and defaults for everything else
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Self::default()
        }
    }
}

/// Weather client trait for fetching normalized weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a location
    async fn get_current(&self, query: &LocationQuery) -> Result<CurrentWeather, WeatherError>;

    /// Get the daily forecast for a location
    async fn get_forecast(&self, query: &LocationQuery) -> Result<Forecast, WeatherError>;
}

/// OpenWeather HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Query parameters identifying the location
    fn location_params(query: &LocationQuery) -> Vec<(&'static str, String)> {
        match query {
            LocationQuery::City(name) => vec![("q", name.clone())],
            LocationQuery::Coordinates(loc) => vec![
                ("lat", loc.latitude().to_string()),
                ("lon", loc.longitude().to_string()),
            ],
        }
    }

    fn resource_url(&self, resource: &str) -> String {
        format!("{}/{resource}", self.config.base_url.trim_end_matches('/'))
    }

    /// Map a transport-level failure, dropping the URL
    fn transport_error(err: reqwest::Error) -> WeatherError {
        let connect = err.is_connect() || err.is_timeout();
        let err = err.without_url();
        if connect {
            WeatherError::ConnectionFailed(err.to_string())
        } else {
            WeatherError::RequestFailed(err.to_string())
        }
    }

    /// Map a non-success status
    fn status_error(status: StatusCode) -> WeatherError {
        match status {
            StatusCode::NOT_FOUND => WeatherError::NotFound,
            StatusCode::UNAUTHORIZED => WeatherError::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => WeatherError::RateLimitExceeded,
            s if s.is_server_error() => WeatherError::ServiceUnavailable(format!("HTTP {s}")),
            s => WeatherError::RequestFailed(format!("HTTP {s}")),
        }
    }

    /// GET a resource and decode its JSON body
    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &LocationQuery,
    ) -> Result<T, WeatherError> {
        let url = self.resource_url(resource);
        let mut params = Self::location_params(query);
        params.push(("units", self.config.units.clone()));

        debug!(url = %url, location = %query, "Fetching {resource}");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .query(&[("appid", self.config.api_key.expose_secret())])
            .send()
            .await
            .map_err(Self::transport_error)?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "Provider returned an error status");
            return Err(Self::status_error(status));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_decode() {
                WeatherError::MalformedResponse(e.without_url().to_string())
            } else {
                Self::transport_error(e)
            }
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self), fields(location = %query))]
    async fn get_current(&self, query: &LocationQuery) -> Result<CurrentWeather, WeatherError> {
        let payload: CurrentConditionsResponse = self.fetch("weather", query).await?;
        if payload.cod.as_ref().is_some_and(|c| c.is_not_found()) {
            return Err(WeatherError::NotFound);
        }
        normalize_current(&payload, &Local)
    }

    #[instrument(skip(self), fields(location = %query))]
    async fn get_forecast(&self, query: &LocationQuery) -> Result<Forecast, WeatherError> {
        let payload: ForecastResponse = self.fetch("forecast", query).await?;
        if payload.cod.as_ref().is_some_and(|c| c.is_not_found()) {
            return Err(WeatherError::NotFound);
        }
        normalize_forecast(payload)
    }
}
