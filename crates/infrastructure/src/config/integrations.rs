//! Weather provider configuration.

use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// OpenWeather provider configuration
///
/// Fields left out of every source fall back to [`WeatherConfig::default`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenWeatherAppConfig {
    /// API base URL
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    #[serde(skip_serializing)]
    pub api_key: SecretString,

    /// Unit system requested from the provider
    pub units: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for OpenWeatherAppConfig {
    fn default() -> Self {
        let WeatherConfig {
            base_url,
            api_key,
            units,
            timeout_secs,
        } = WeatherConfig::default();
        Self {
            base_url,
            api_key,
            units,
            timeout_secs,
        }
    }
}

impl OpenWeatherAppConfig {
    /// Whether an API key has been supplied
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().trim().is_empty()
    }

    /// Convert to the client configuration
    #[must_use]
    pub fn to_client_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: SecretString::from(self.api_key.expose_secret().to_string()),
            units: self.units.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
