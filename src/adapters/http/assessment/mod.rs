//! Assessment HTTP adapter module.
//!
//! Provides REST API endpoints for rating, reporting and history.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{AssessmentApiError, AssessmentAppState};
pub use routes::assessment_routes;
