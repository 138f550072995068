//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Neither a place name nor a full coordinate pair was supplied
    #[error("City name or coordinates are required")]
    MissingLocation,

    /// Coordinates were supplied but are not usable
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}
