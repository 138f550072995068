//! Infrastructure layer - Adapters for external systems
//!
//! Implements the ports defined in the application layer and owns the
//! process-level concerns: configuration loading and logging setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::WeatherAdapter;
pub use config::{AppConfig, ConfigError, LogFormat, OpenWeatherAppConfig, ServerConfig};
pub use telemetry::{TelemetryError, init_logging};
