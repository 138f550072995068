//! Provider payload normalization
//!
//! Pure functions from OpenWeather payloads to domain records. Nothing here
//! touches the network, so every mapping rule is unit-testable on its own.

use std::fmt;

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};
use domain::{CurrentWeather, Forecast, Humidity, RawForecastEntry};

use crate::client::WeatherError;
use crate::models::{
    CityBlock, CurrentConditionsResponse, ForecastItem, ForecastResponse, WeatherBlock,
};

/// Format of sunrise/sunset, e.g. `6:05:09 AM`
const TIME_OF_DAY_FORMAT: &str = "%-I:%M:%S %p";

/// Map a current-conditions payload to a [`CurrentWeather`] record
///
/// Temperatures are rounded to the nearest integer (half away from zero).
/// Sunrise and sunset are rendered as a time of day in `tz`.
///
/// # Errors
///
/// `WeatherError::MalformedResponse` if the place name, country, `main`
/// block, first `weather` entry, wind speed or sun times are missing.
pub fn normalize_current<Tz>(
    payload: &CurrentConditionsResponse,
    tz: &Tz,
) -> Result<CurrentWeather, WeatherError>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let city = payload.name.clone().ok_or_else(|| missing("name"))?;
    let sys = payload.sys.as_ref().ok_or_else(|| missing("sys"))?;
    let country = sys.country.clone().ok_or_else(|| missing("sys.country"))?;
    let main = payload.main.as_ref().ok_or_else(|| missing("main"))?;
    let condition = primary_condition(&payload.weather).ok_or_else(|| missing("weather[0]"))?;
    let wind = payload.wind.as_ref().ok_or_else(|| missing("wind"))?;
    let wind_speed = wind.speed.ok_or_else(|| missing("wind.speed"))?;

    let sunrise = sys
        .sunrise
        .and_then(|ts| format_time_of_day(ts, tz))
        .ok_or_else(|| missing("sys.sunrise"))?;
    let sunset = sys
        .sunset
        .and_then(|ts| format_time_of_day(ts, tz))
        .ok_or_else(|| missing("sys.sunset"))?;

    Ok(CurrentWeather {
        city,
        country,
        temperature: round_temperature(main.temp),
        feels_like: round_temperature(main.feels_like),
        humidity: Humidity::clamped(main.humidity),
        pressure: main.pressure,
        wind_speed,
        wind_direction: wind.deg,
        description: condition.description.clone(),
        icon: condition.icon.clone(),
        sunrise,
        sunset,
    })
}

/// Map a forecast payload to the aggregated daily [`Forecast`]
///
/// Calendar days are taken in the provider's timezone for the city
/// (see [`provider_timezone`]).
///
/// # Errors
///
/// `WeatherError::MalformedResponse` if the timeline is missing, or an
/// entry lacks its `main` block, first `weather` entry or wind speed.
pub fn normalize_forecast(payload: ForecastResponse) -> Result<Forecast, WeatherError> {
    let tz = provider_timezone(payload.city.as_ref());
    let list = payload.list.ok_or_else(|| missing("list"))?;

    let entries = list
        .into_iter()
        .enumerate()
        .map(|(index, item)| raw_entry(index, item))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Forecast::aggregate(entries, &tz))
}

/// The provider's reference timezone for a forecast, UTC if unknown
pub fn provider_timezone(city: Option<&CityBlock>) -> FixedOffset {
    city.and_then(|c| c.timezone)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| Utc.fix())
}

fn raw_entry(index: usize, item: ForecastItem) -> Result<RawForecastEntry, WeatherError> {
    let main = item
        .main
        .ok_or_else(|| missing(&format!("list[{index}].main")))?;
    let condition = item
        .weather
        .into_iter()
        .next()
        .ok_or_else(|| missing(&format!("list[{index}].weather[0]")))?;
    let wind_speed = item
        .wind
        .and_then(|w| w.speed)
        .ok_or_else(|| missing(&format!("list[{index}].wind.speed")))?;
    let timestamp = DateTime::<Utc>::from_timestamp(item.dt, 0)
        .ok_or_else(|| malformed(format!("list[{index}].dt out of range")))?;

    Ok(RawForecastEntry {
        timestamp,
        temp_min: main.temp_min,
        temp_max: main.temp_max,
        humidity: Humidity::clamped(main.humidity),
        description: condition.description,
        icon: condition.icon,
        wind_speed,
    })
}

fn primary_condition(weather: &[WeatherBlock]) -> Option<&WeatherBlock> {
    weather.first()
}

/// Round a temperature to the nearest whole degree
#[allow(clippy::cast_possible_truncation)]
pub fn round_temperature(value: f64) -> i32 {
    // `as` saturates, NaN becomes 0
    value.round() as i32
}

/// Render unix seconds as a time of day in `tz`
pub fn format_time_of_day<Tz>(epoch_secs: i64, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    DateTime::<Utc>::from_timestamp(epoch_secs, 0).map(|utc| {
        utc.with_timezone(tz)
            .format(TIME_OF_DAY_FORMAT)
            .to_string()
    })
}

fn missing(field: &str) -> WeatherError {
    malformed(format!("missing {field}"))
}

fn malformed(reason: String) -> WeatherError {
    WeatherError::MalformedResponse(reason)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn current_payload() -> CurrentConditionsResponse {
        serde_json::from_value(json!({
            "weather": [
                {"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"},
                {"id": 701, "main": "Mist", "description": "mist", "icon": "50d"}
            ],
            "main": {"temp": 12.5, "feels_like": 10.49, "temp_min": 11.0, "temp_max": 14.0, "pressure": 1009, "humidity": 87},
            "wind": {"speed": 5.14, "deg": 250},
            // 2024-01-15 07:15:00 and 16:30:00 UTC
            "sys": {"country": "GB", "sunrise": 1_705_302_900, "sunset": 1_705_336_200},
            "name": "London",
            "cod": 200
        }))
        .unwrap()
    }

    fn forecast_payload(items: serde_json::Value, timezone: i32) -> ForecastResponse {
        serde_json::from_value(json!({
            "cod": "200",
            "list": items,
            "city": {"name": "Berlin", "country": "DE", "timezone": timezone}
        }))
        .unwrap()
    }

    fn item(dt: i64, temp_min: f64, temp_max: f64, description: &str) -> serde_json::Value {
        json!({
            "dt": dt,
            "main": {"temp": temp_min, "feels_like": temp_min, "temp_min": temp_min, "temp_max": temp_max, "pressure": 1010, "humidity": 60},
            "weather": [{"description": description, "icon": "01d"}],
            "wind": {"speed": 2.5, "deg": 90}
        })
    }

    #[test]
    fn current_maps_every_field() {
        let record = normalize_current(&current_payload(), &Utc).unwrap();

        assert_eq!(record.city, "London");
        assert_eq!(record.country, "GB");
        assert_eq!(record.temperature, 13);
        assert_eq!(record.feels_like, 10);
        assert_eq!(record.humidity.value(), 87);
        assert_eq!(record.pressure, 1009);
        assert!((record.wind_speed - 5.14).abs() < f64::EPSILON);
        assert_eq!(record.wind_direction, Some(250));
        assert_eq!(record.description, "light rain");
        assert_eq!(record.icon, "10d");
        assert_eq!(record.sunrise, "7:15:00 AM");
        assert_eq!(record.sunset, "4:30:00 PM");
    }

    #[test]
    fn sun_times_follow_the_given_timezone() {
        let plus_one = FixedOffset::east_opt(3600).unwrap();
        let record = normalize_current(&current_payload(), &plus_one).unwrap();
        assert_eq!(record.sunrise, "8:15:00 AM");
        assert_eq!(record.sunset, "5:30:00 PM");
    }

    #[test]
    fn current_without_wind_direction_is_accepted() {
        let mut payload = current_payload();
        payload.wind = Some(crate::models::WindBlock {
            speed: Some(0.0),
            deg: None,
        });
        let record = normalize_current(&payload, &Utc).unwrap();
        assert_eq!(record.wind_direction, None);
    }

    #[test]
    fn current_requires_name_country_main_and_weather() {
        let mut no_name = current_payload();
        no_name.name = None;
        let mut no_country = current_payload();
        no_country.sys = Some(crate::models::SysBlock {
            country: None,
            ..no_country.sys.clone().unwrap()
        });
        let mut no_main = current_payload();
        no_main.main = None;
        let mut no_weather = current_payload();
        no_weather.weather.clear();

        for (payload, field) in [
            (no_name, "name"),
            (no_country, "sys.country"),
            (no_main, "main"),
            (no_weather, "weather[0]"),
        ] {
            let err = normalize_current(&payload, &Utc).unwrap_err();
            let WeatherError::MalformedResponse(reason) = err else {
                unreachable!("Expected MalformedResponse");
            };
            assert!(reason.contains(field), "{reason} should mention {field}");
        }
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        assert_eq!(round_temperature(2.5), 3);
        assert_eq!(round_temperature(2.49), 2);
        assert_eq!(round_temperature(-2.5), -3);
        assert_eq!(round_temperature(-0.4), 0);
        assert_eq!(round_temperature(f64::NAN), 0);
    }

    #[test]
    fn forecast_aggregates_in_provider_timezone() {
        // 2024-01-15 22:00 UTC is 2024-01-16 at UTC+3
        let payload = forecast_payload(
            json!([
                item(1_705_309_200, 4.0, 5.0, "clear sky"),   // 09:00Z
                item(1_705_356_000, 1.0, 2.0, "snow"),        // 22:00Z
                item(1_705_370_400, 0.0, 6.0, "overcast"),    // 02:00Z +1d
            ]),
            3 * 3600,
        );

        let forecast = normalize_forecast(payload).unwrap();
        let days = forecast.days();

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap());
        assert_eq!(days[1].description, "snow");
        assert!((days[1].temp_min - 0.0).abs() < f64::EPSILON);
        assert!((days[1].temp_max - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn forecast_with_empty_timeline_is_empty() {
        let forecast = normalize_forecast(forecast_payload(json!([]), 0)).unwrap();
        assert!(forecast.is_empty());
    }

    #[test]
    fn forecast_without_list_is_malformed() {
        let payload = ForecastResponse {
            list: None,
            ..ForecastResponse::default()
        };
        assert!(matches!(
            normalize_forecast(payload),
            Err(WeatherError::MalformedResponse(_))
        ));
    }

    #[test]
    fn forecast_entry_without_weather_is_malformed() {
        let payload = forecast_payload(
            json!([{
                "dt": 1_705_309_200,
                "main": {"temp": 1.0, "feels_like": 1.0, "temp_min": 1.0, "temp_max": 1.0, "pressure": 1010, "humidity": 60},
                "weather": [],
                "wind": {"speed": 1.0}
            }]),
            0,
        );
        let err = normalize_forecast(payload).unwrap_err();
        assert!(err.to_string().contains("list[0].weather[0]"));
    }

    #[test]
    fn unknown_timezone_falls_back_to_utc() {
        assert_eq!(provider_timezone(None), Utc.fix());
        let bogus = CityBlock {
            timezone: Some(i32::MAX),
            ..CityBlock::default()
        };
        assert_eq!(provider_timezone(Some(&bogus)), Utc.fix());
        let tokyo = CityBlock {
            timezone: Some(9 * 3600),
            ..CityBlock::default()
        };
        assert_eq!(
            provider_timezone(Some(&tokyo)),
            FixedOffset::east_opt(9 * 3600).unwrap()
        );
    }
}
