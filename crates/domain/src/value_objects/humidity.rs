//! Relative humidity reported alongside current and forecast conditions
//!
//! Provider payloads go through [`Humidity::clamped`], so an out-of-range
//! reading never fails a whole request. [`Humidity::new`] is the strict path
//! used when a value is read back from JSON.
//!
//! ```
//! use domain::value_objects::Humidity;
//!
//! assert_eq!(Humidity::clamped(104).value(), 100);
//! assert!(Humidity::new(104).is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// A humidity reading above 100%
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("humidity {0}% is above 100%")]
pub struct HumidityOutOfRange(u8);

/// Relative humidity in whole percent, written to JSON as a plain number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Humidity(u8);

impl Humidity {
    const CEILING: u8 = 100;

    /// Accept `percent` only if it is at most 100
    ///
    /// # Errors
    ///
    /// Returns [`HumidityOutOfRange`] for readings above 100.
    pub const fn new(percent: u8) -> Result<Self, HumidityOutOfRange> {
        if percent > Self::CEILING {
            return Err(HumidityOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    /// Take a provider reading as-is, capping it at 100
    #[must_use]
    pub const fn clamped(percent: u8) -> Self {
        if percent > Self::CEILING {
            Self(Self::CEILING)
        } else {
            Self(percent)
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Humidity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Self::new(u8::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}
