//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Failures of a weather lookup
///
/// Messages may carry provider detail for server-side logs; the HTTP layer
/// decides what a client gets to see.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The caller's location parameters are unusable; nothing was sent out
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] DomainError),

    /// The provider understood the query but knows no such place
    #[error("Location not found")]
    LocationNotFound,

    /// The provider rejected our credentials
    #[error("Provider rejected the API key")]
    ProviderAuthError,

    /// The provider is throttling us
    #[error("Provider rate limit exceeded")]
    ProviderRateLimited,

    /// Network failure, timeout or unexpected provider status
    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The provider answered successfully with a payload we cannot use
    #[error("Malformed provider response: {0}")]
    MalformedProviderResponse(String),
}

impl ApplicationError {
    /// Whether the failure was caused by the caller rather than the provider
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest(_) | Self::LocationNotFound)
    }
}
