//! Location query value object
//!
//! A caller identifies a place either by name or by a coordinate pair.
//! Raw query parameters are turned into a `LocationQuery` before any
//! outbound provider call is attempted.

use std::fmt;

use super::GeoLocation;
use crate::errors::DomainError;

/// The place a weather lookup is for
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Free-form place name, resolved by the provider
    City(String),
    /// Latitude/longitude pair
    Coordinates(GeoLocation),
}

impl LocationQuery {
    /// Create a query for a named place
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingLocation` if the name is blank.
    pub fn city(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(DomainError::MissingLocation);
        }
        Ok(Self::City(name.to_string()))
    }

    /// Create a query for a coordinate pair
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either value is out of range.
    pub fn coordinates(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        GeoLocation::new(latitude, longitude).map(Self::Coordinates)
    }

    /// Build a query from raw, optional request parameters
    ///
    /// A non-blank `city` takes precedence. Otherwise both `lat` and `lon`
    /// must be present and parse as in-range numbers. Blank values count as
    /// absent.
    ///
    /// # Errors
    ///
    /// - `MissingLocation` when neither a city nor both coordinates are given
    /// - `InvalidCoordinates` when the coordinates are present but unusable
    pub fn from_parts(
        city: Option<&str>,
        lat: Option<&str>,
        lon: Option<&str>,
    ) -> Result<Self, DomainError> {
        if let Some(city) = non_blank(city) {
            return Self::city(city);
        }

        match (non_blank(lat), non_blank(lon)) {
            (Some(lat), Some(lon)) => {
                let latitude = parse_degrees(lat)?;
                let longitude = parse_degrees(lon)?;
                Self::coordinates(latitude, longitude)
            },
            _ => Err(DomainError::MissingLocation),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_degrees(raw: &str) -> Result<f64, DomainError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(DomainError::InvalidCoordinates)
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City(name) => write!(f, "{name}"),
            Self::Coordinates(location) => write!(f, "{location}"),
        }
    }
}
