//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod humidity;
mod location_query;

pub use geo_location::GeoLocation;
pub use humidity::{Humidity, HumidityOutOfRange};
pub use location_query::LocationQuery;
