//! Daily forecast aggregation
//!
//! The provider publishes its forecast as a timeline of fine-grained
//! (3-hourly) entries. [`Forecast::aggregate`] folds that timeline into one
//! [`DailyForecast`] per calendar day:
//!
//! - the day of an entry is its timestamp truncated to a date in the
//!   provider's reference timezone
//! - days keep the order in which they first appear in the timeline
//! - `temp_min`/`temp_max` are running extremes over every entry of the day
//! - humidity, description, icon and wind speed come from the first entry of
//!   the day and are not touched by later entries
//! - at most [`MAX_FORECAST_DAYS`] days are emitted; the cap is applied after
//!   every entry has been folded in

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Humidity;

/// Maximum number of days in a [`Forecast`]
pub const MAX_FORECAST_DAYS: usize = 5;

/// One sub-daily data point from the provider's forecast timeline
#[derive(Debug, Clone, PartialEq)]
pub struct RawForecastEntry {
    /// Start of the forecast interval
    pub timestamp: DateTime<Utc>,
    /// Minimum temperature over the interval in °C
    pub temp_min: f64,
    /// Maximum temperature over the interval in °C
    pub temp_max: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Textual condition
    pub description: String,
    /// Provider icon identifier
    pub icon: String,
    /// Wind speed in m/s
    pub wind_speed: f64,
}

/// Summary of one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Calendar day in the provider's timezone, rendered as e.g. `Mon Jan 15 2024`
    #[serde(with = "calendar_date")]
    pub date: NaiveDate,
    /// Lowest temperature seen for the day
    pub temp_min: f64,
    /// Highest temperature seen for the day
    pub temp_max: f64,
    /// Humidity of the first entry of the day
    pub humidity: Humidity,
    /// Condition of the first entry of the day
    pub description: String,
    /// Icon of the first entry of the day
    pub icon: String,
    /// Wind speed of the first entry of the day
    pub wind_speed: f64,
}

impl DailyForecast {
    /// Start a day from its first timeline entry
    fn open(date: NaiveDate, entry: RawForecastEntry) -> Self {
        // min <= max holds even if the provider sends an inverted interval
        Self {
            date,
            temp_min: entry.temp_min.min(entry.temp_max),
            temp_max: entry.temp_max.max(entry.temp_min),
            humidity: entry.humidity,
            description: entry.description,
            icon: entry.icon,
            wind_speed: entry.wind_speed,
        }
    }

    /// Fold a later entry of the same day into the running extremes
    fn absorb(&mut self, entry: &RawForecastEntry) {
        self.temp_min = self.temp_min.min(entry.temp_min);
        self.temp_max = self.temp_max.max(entry.temp_max);
    }
}

/// Daily summaries in first-seen order, never more than [`MAX_FORECAST_DAYS`]
///
/// Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Forecast {
    days: Vec<DailyForecast>,
}

impl Forecast {
    /// Collapse a provider timeline into daily summaries
    ///
    /// `tz` is the provider's reference timezone used to derive each entry's
    /// calendar day. An empty timeline yields an empty forecast.
    pub fn aggregate<Tz, I>(entries: I, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        I: IntoIterator<Item = RawForecastEntry>,
    {
        let mut days: Vec<DailyForecast> = Vec::new();
        let mut by_date: HashMap<NaiveDate, usize> = HashMap::new();

        for entry in entries {
            let date = entry.timestamp.with_timezone(tz).date_naive();
            match by_date.entry(date) {
                Entry::Occupied(slot) => days[*slot.get()].absorb(&entry),
                Entry::Vacant(slot) => {
                    slot.insert(days.len());
                    days.push(DailyForecast::open(date, entry));
                },
            }
        }

        days.truncate(MAX_FORECAST_DAYS);
        Self { days }
    }

    /// The daily summaries
    #[must_use]
    pub fn days(&self) -> &[DailyForecast] {
        &self.days
    }

    /// Number of days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the forecast has no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

mod calendar_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%a %b %d %Y";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
