//! HTTP routes for assessment endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    assess, export_history, get_questionnaire, list_history, radar_chart, report_pdf,
    save_history, AssessmentAppState,
};

/// Creates the assessment router with all routes.
pub fn assessment_routes(state: AssessmentAppState) -> Router {
    Router::new()
        // GET /api/questionnaire
        .route("/api/questionnaire", get(get_questionnaire))
        // POST /api/assessment
        .route("/api/assessment", post(assess))
        // POST /api/assessment/radar.svg
        .route("/api/assessment/radar.svg", post(radar_chart))
        // POST /api/assessment/report.pdf
        .route("/api/assessment/report.pdf", post(report_pdf))
        // GET, POST /api/history
        .route("/api/history", get(list_history).post(save_history))
        // GET /api/history.csv
        .route("/api/history.csv", get(export_history))
        .with_state(state)
}
