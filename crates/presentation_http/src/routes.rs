//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, middleware::RequestIdLayer, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Weather API
        .route("/api/weather", get(handlers::weather::get_weather))
        .route("/api/forecast", get(handlers::weather::get_forecast))
        .layer(RequestIdLayer::new())
        .with_state(state)
}
