//! API error handling
//!
//! Every failure leaves the server as `{"error": "<message>"}`. Messages are
//! fixed per error kind; provider bodies, reasons and the API key stay in the
//! server log.

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// The resource a request was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// `/api/weather`
    Weather,
    /// `/api/forecast`
    Forecast,
}

impl Resource {
    const fn failure_message(self) -> &'static str {
        match self {
            Self::Weather => "Failed to fetch weather data",
            Self::Forecast => "Failed to fetch forecast data",
        }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("City not found")]
    LocationNotFound,

    #[error("Provider rejected the API key")]
    ProviderAuth,

    #[error("Provider rate limit exceeded")]
    RateLimited,

    #[error("Upstream failure for {0:?}")]
    FetchFailed(Resource),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    /// Map an application error for a request on `resource`
    pub fn from_application(err: ApplicationError, resource: Resource) -> Self {
        match err {
            ApplicationError::InvalidRequest(e) => Self::BadRequest(e.to_string()),
            ApplicationError::LocationNotFound => Self::LocationNotFound,
            ApplicationError::ProviderAuthError => Self::ProviderAuth,
            ApplicationError::ProviderRateLimited => Self::RateLimited,
            ApplicationError::ProviderUnavailable(_)
            | ApplicationError::MalformedProviderResponse(_) => Self::FetchFailed(resource),
        }
    }

    /// HTTP status for this error
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::LocationNotFound => StatusCode::NOT_FOUND,
            Self::ProviderAuth | Self::RateLimited | Self::FetchFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        match self {
            Self::BadRequest(msg) => msg.clone(),
            Self::LocationNotFound => "City not found".to_string(),
            Self::ProviderAuth => {
                "Invalid API key. Please check your OpenWeather API key.".to_string()
            },
            Self::RateLimited => "API rate limit exceeded. Please try again later.".to_string(),
            Self::FetchFailed(resource) => resource.failure_message().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
