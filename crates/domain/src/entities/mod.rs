//! Domain entities - request-scoped weather records

mod current_weather;
mod forecast;

pub use current_weather::CurrentWeather;
pub use forecast::{DailyForecast, Forecast, MAX_FORECAST_DAYS, RawForecastEntry};
