//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `integrations`: OpenWeather provider settings
//!
//! Sources, lowest precedence first: built-in defaults, an optional
//! `config.toml` in the working directory, `WEATHER_APP__*` environment
//! variables (`__` separates nesting, e.g. `WEATHER_APP__SERVER__PORT`), then
//! the conventional `OPENWEATHER_API_KEY` and `PORT` variables.

mod integrations;
mod server;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use integrations::OpenWeatherAppConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix of the namespaced environment variables
const ENV_PREFIX: &str = "WEATHER_APP";

/// Nesting separator of the namespaced environment variables
const ENV_SEPARATOR: &str = "__";

/// Environment variable holding the provider API key
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Environment variable holding the listen port
pub const PORT_VAR: &str = "PORT";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or a value has the wrong type
    #[error("Invalid configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// No provider API key was supplied
    #[error("OpenWeather API key is missing; set {API_KEY_VAR}")]
    MissingApiKey,
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenWeather settings
    #[serde(default)]
    pub openweather: OpenWeatherAppConfig,
}

impl AppConfig {
    /// Load configuration from the process environment and optional file
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::vars().collect())
    }

    /// Load configuration using `vars` in place of the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load_from(vars: config::Map<String, String>) -> Result<Self, ConfigError> {
        let api_key = non_blank(vars.get(API_KEY_VAR));
        let port = non_blank(vars.get(PORT_VAR));

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with namespaced variables (e.g., WEATHER_APP__SERVER__PORT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .source(Some(vars)),
            )
            // Conventional variables win over everything else
            .set_override_option("openweather.api_key", api_key)?
            .set_override_option("server.port", port)?;

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(
            bind = %config.server.bind_address(),
            base_url = %config.openweather.base_url,
            log_format = %config.server.log_format,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check the settings the server cannot start without
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] if no API key is configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.openweather.has_api_key() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use integration_weather::WeatherConfig;
    use secrecy::ExposeSecret;

    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_any_source() {
        let config = AppConfig::load_from(vars(&[])).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 3000);
        let client = WeatherConfig::default();
        assert_eq!(config.openweather.base_url, client.base_url);
        assert_eq!(config.openweather.units, client.units);
        assert_eq!(config.openweather.timeout_secs, client.timeout_secs);
        assert!(!config.openweather.has_api_key());
    }

    #[test]
    fn conventional_variables_are_honoured() {
        let config =
            AppConfig::load_from(vars(&[("OPENWEATHER_API_KEY", "abc123"), ("PORT", "8080")]))
                .unwrap();
        assert_eq!(config.openweather.api_key.expose_secret(), "abc123");
        assert_eq!(config.server.port, 8080);
    }

    #[test]
    fn namespaced_variables_are_honoured() {
        let config = AppConfig::load_from(vars(&[
            ("WEATHER_APP__SERVER__HOST", "127.0.0.1"),
            ("WEATHER_APP__SERVER__LOG_FORMAT", "json"),
            ("WEATHER_APP__SERVER__ALLOWED_ORIGINS", "http://a.test,http://b.test"),
            ("WEATHER_APP__OPENWEATHER__TIMEOUT_SECS", "3"),
        ]))
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(
            config.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert_eq!(config.openweather.timeout_secs, 3);
    }

    #[test]
    fn port_variable_beats_namespaced_port() {
        let config = AppConfig::load_from(vars(&[
            ("WEATHER_APP__SERVER__PORT", "4000"),
            ("PORT", "5000"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn blank_conventional_variables_are_ignored() {
        let config =
            AppConfig::load_from(vars(&[("OPENWEATHER_API_KEY", "  "), ("PORT", "")])).unwrap();
        assert!(!config.openweather.has_api_key());
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        let result = AppConfig::load_from(vars(&[("PORT", "http")]));
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn validate_requires_api_key() {
        let config = AppConfig::default();
        assert!(matches!(config.validate(), Err(ConfigError::MissingApiKey)));

        let config = AppConfig::load_from(vars(&[("OPENWEATHER_API_KEY", "abc123")])).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let config =
            AppConfig::load_from(vars(&[("OPENWEATHER_API_KEY", "very-secret")])).unwrap();
        assert!(!format!("{config:?}").contains("very-secret"));
    }
}
