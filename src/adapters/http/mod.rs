//! HTTP adapters - REST API implementations.
//!
//! Assembles the assessment endpoints with request tracing and timeouts.

pub mod assessment;

// Re-export key types for convenience
pub use assessment::{assessment_routes, AssessmentAppState};

use std::time::Duration;

use axum::routing::get;
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Creates the full application router.
pub fn app_router(state: AssessmentAppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/health", get(assessment::handlers::health))
        .merge(assessment_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
}
