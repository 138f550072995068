//! Property-based tests for the domain layer
//!
//! These tests use proptest to verify the forecast aggregation and location
//! parsing invariants across many random inputs.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use domain::{
    DomainError, Forecast, GeoLocation, Humidity, LocationQuery, MAX_FORECAST_DAYS,
    RawForecastEntry,
};
use proptest::prelude::*;

// ============================================================================
// Forecast aggregation
// ============================================================================

mod forecast_aggregation_tests {
    use super::*;

    /// (hours since 2024-01-01T00:00Z, interval min, interval spread)
    fn timeline() -> impl Strategy<Value = Vec<(i64, f64, f64)>> {
        prop::collection::vec((0i64..24 * 14, -40.0f64..45.0, 0.0f64..10.0), 0..60)
    }

    fn build(raw: &[(i64, f64, f64)]) -> Vec<RawForecastEntry> {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        raw.iter()
            .map(|&(hours, low, spread)| RawForecastEntry {
                timestamp: start + Duration::hours(hours),
                temp_min: low,
                temp_max: low + spread,
                humidity: Humidity::clamped(60),
                description: format!("entry {hours}"),
                icon: "01d".to_string(),
                wind_speed: 2.0,
            })
            .collect()
    }

    fn day_of(ts: DateTime<Utc>) -> NaiveDate {
        ts.date_naive()
    }

    proptest! {
        #[test]
        fn never_more_than_cap(raw in timeline()) {
            let forecast = Forecast::aggregate(build(&raw), &Utc);
            prop_assert!(forecast.len() <= MAX_FORECAST_DAYS);
        }

        #[test]
        fn one_entry_per_date(raw in timeline()) {
            let forecast = Forecast::aggregate(build(&raw), &Utc);
            let mut dates: Vec<NaiveDate> = forecast.days().iter().map(|d| d.date).collect();
            let before = dates.len();
            dates.sort();
            dates.dedup();
            prop_assert_eq!(dates.len(), before);
        }

        #[test]
        fn min_never_exceeds_max(raw in timeline()) {
            let forecast = Forecast::aggregate(build(&raw), &Utc);
            for day in forecast.days() {
                prop_assert!(day.temp_min <= day.temp_max);
            }
        }

        #[test]
        fn order_matches_first_occurrence(raw in timeline()) {
            let entries = build(&raw);
            let mut expected: Vec<NaiveDate> = Vec::new();
            for entry in &entries {
                let date = day_of(entry.timestamp);
                if !expected.contains(&date) {
                    expected.push(date);
                }
            }
            expected.truncate(MAX_FORECAST_DAYS);

            let forecast = Forecast::aggregate(entries, &Utc);
            let actual: Vec<NaiveDate> = forecast.days().iter().map(|d| d.date).collect();
            prop_assert_eq!(actual, expected);
        }

        #[test]
        fn extremes_cover_exactly_the_days_entries(raw in timeline()) {
            let entries = build(&raw);
            let forecast = Forecast::aggregate(entries.clone(), &Utc);

            for day in forecast.days() {
                let same_day: Vec<&RawForecastEntry> = entries
                    .iter()
                    .filter(|e| day_of(e.timestamp) == day.date)
                    .collect();
                let min = same_day.iter().map(|e| e.temp_min).fold(f64::INFINITY, f64::min);
                let max = same_day.iter().map(|e| e.temp_max).fold(f64::NEG_INFINITY, f64::max);

                prop_assert!((day.temp_min - min).abs() < f64::EPSILON);
                prop_assert!((day.temp_max - max).abs() < f64::EPSILON);
                // Snapshot fields come from the first entry of the day
                prop_assert_eq!(&day.description, &same_day[0].description);
            }
        }
    }
}

// ============================================================================
// Location query parsing
// ============================================================================

mod location_query_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_are_accepted(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let lat_s = lat.to_string();
            let lon_s = lon.to_string();
            let query = LocationQuery::from_parts(None, Some(&lat_s), Some(&lon_s));
            prop_assert_eq!(query, Ok(LocationQuery::Coordinates(GeoLocation::new(lat, lon).unwrap())));
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![(-1000.0f64..-90.1f64), (90.1f64..1000.0f64)],
            lon in -180.0f64..=180.0f64
        ) {
            let lat_s = lat.to_string();
            let lon_s = lon.to_string();
            let query = LocationQuery::from_parts(None, Some(&lat_s), Some(&lon_s));
            prop_assert_eq!(query, Err(DomainError::InvalidCoordinates));
        }

        #[test]
        fn any_non_blank_city_is_accepted(city in "[A-Za-z][A-Za-z .'-]{0,30}") {
            let query = LocationQuery::from_parts(Some(&city), None, None);
            prop_assert_eq!(query, Ok(LocationQuery::City(city.trim().to_string())));
        }

        #[test]
        fn a_single_coordinate_is_never_enough(value in -90.0f64..=90.0f64) {
            let value_s = value.to_string();
            prop_assert_eq!(
                LocationQuery::from_parts(None, Some(&value_s), None),
                Err(DomainError::MissingLocation)
            );
            prop_assert_eq!(
                LocationQuery::from_parts(None, None, Some(&value_s)),
                Err(DomainError::MissingLocation)
            );
        }
    }
}
