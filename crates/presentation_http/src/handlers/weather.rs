//! Weather handlers
//!
//! `GET /api/weather` and `GET /api/forecast`, both taking either `city` or
//! `lat` + `lon` as query parameters.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use domain::{CurrentWeather, Forecast, LocationQuery};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{
    error::{ApiError, Resource},
    state::AppState,
};

/// Location parameters as they arrive on the query string
///
/// Kept as raw strings so that numeric validation happens in one place and
/// yields the same error body as a missing parameter.
#[derive(Debug, Default, Deserialize)]
pub struct LocationParams {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl LocationParams {
    fn into_query(self, resource: Resource) -> Result<LocationQuery, ApiError> {
        LocationQuery::from_parts(self.city.as_deref(), self.lat.as_deref(), self.lon.as_deref())
            .map_err(|e| ApiError::from_application(e.into(), resource))
    }
}

fn parse_location(
    params: Result<Query<LocationParams>, QueryRejection>,
    resource: Resource,
) -> Result<LocationQuery, ApiError> {
    let Query(params) = params.map_err(|e| {
        debug!(error = %e, "Unparseable query string");
        ApiError::BadRequest(e.body_text())
    })?;
    params.into_query(resource)
}

/// Current conditions for a city or coordinate pair
#[instrument(skip(state, params))]
pub async fn get_weather(
    State(state): State<AppState>,
    params: Result<Query<LocationParams>, QueryRejection>,
) -> Result<Json<CurrentWeather>, ApiError> {
    let query = parse_location(params, Resource::Weather)?;
    let weather = state
        .weather_service
        .current_weather(&query)
        .await
        .map_err(|e| ApiError::from_application(e, Resource::Weather))?;
    Ok(Json(weather))
}

/// Up to five daily summaries for a city or coordinate pair
#[instrument(skip(state, params))]
pub async fn get_forecast(
    State(state): State<AppState>,
    params: Result<Query<LocationParams>, QueryRejection>,
) -> Result<Json<Forecast>, ApiError> {
    let query = parse_location(params, Resource::Forecast)?;
    let forecast = state
        .weather_service
        .forecast(&query)
        .await
        .map_err(|e| ApiError::from_application(e, Resource::Forecast))?;
    Ok(Json(forecast))
}

#[cfg(test)]
mod tests {
    use domain::GeoLocation;

    use super::*;

    fn params(city: Option<&str>, lat: Option<&str>, lon: Option<&str>) -> LocationParams {
        LocationParams {
            city: city.map(str::to_string),
            lat: lat.map(str::to_string),
            lon: lon.map(str::to_string),
        }
    }

    #[test]
    fn city_query() {
        let query = params(Some("London"), None, None)
            .into_query(Resource::Weather)
            .unwrap();
        assert_eq!(query, LocationQuery::City("London".to_string()));
    }

    #[test]
    fn coordinate_query() {
        let query = params(None, Some("40.7"), Some("-74.0"))
            .into_query(Resource::Forecast)
            .unwrap();
        assert_eq!(
            query,
            LocationQuery::Coordinates(GeoLocation::new(40.7, -74.0).unwrap())
        );
    }

    #[test]
    fn missing_location_is_bad_request() {
        let err = LocationParams::default()
            .into_query(Resource::Weather)
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
        assert_eq!(err.message(), "City name or coordinates are required");
    }

    #[test]
    fn only_latitude_is_bad_request() {
        let err = params(None, Some("40.7"), None)
            .into_query(Resource::Forecast)
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }

    #[test]
    fn out_of_range_coordinates_are_bad_request() {
        let err = params(None, Some("123"), Some("0"))
            .into_query(Resource::Weather)
            .unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
