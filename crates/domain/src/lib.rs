//! Domain layer for the weather relay
//!
//! Contains the location query model, the simplified weather records returned
//! to clients and the forecast aggregation that collapses a provider timeline
//! into daily summaries. This layer knows nothing about HTTP or the provider.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
