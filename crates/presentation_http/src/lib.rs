//! Weather relay HTTP presentation layer
//!
//! Axum router exposing current conditions and the daily forecast to browser
//! clients, plus a health probe.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use error::{ApiError, Resource};
pub use middleware::{REQUEST_ID_HEADER, RequestId, RequestIdLayer};
pub use routes::create_router;
pub use state::AppState;
