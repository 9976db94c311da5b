//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.
//! Every request carries the full rating state and triggers a complete
//! recomputation.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use tracing::warn;

use crate::application::handlers::assessment::{
    AssessRatingsCommand, AssessRatingsHandler, ExportHistoryHandler, ExportReportHandler,
    ListHistoryHandler, RenderRadarHandler, SaveHistoryCommand, SaveHistoryHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::questionnaire::Questionnaire;
use crate::domain::report::ReportFormatter;
use crate::domain::scoring::Assessment;
use crate::ports::{ChartRenderer, ExportedDocument, HistoryStore, ReportExporter};

use super::dto::{
    AssessmentRequest, AssessmentResponse, ErrorResponse, HistoryRecordResponse,
    QuestionnaireResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Assessment API error that implements IntoResponse.
#[derive(Debug)]
pub enum AssessmentApiError {
    BadRequest(DomainError),
    NotFound(DomainError),
    Internal(DomainError),
}

impl IntoResponse for AssessmentApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AssessmentApiError::BadRequest(err) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::from(&err))
            }
            AssessmentApiError::NotFound(err) => (StatusCode::NOT_FOUND, ErrorResponse::from(&err)),
            AssessmentApiError::Internal(err) => {
                warn!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::from(&err))
            }
        };
        (status, Json(error)).into_response()
    }
}

impl From<DomainError> for AssessmentApiError {
    fn from(error: DomainError) -> Self {
        match error.code {
            ErrorCode::NotFound => AssessmentApiError::NotFound(error),
            code if code.is_client_error() => AssessmentApiError::BadRequest(error),
            _ => AssessmentApiError::Internal(error),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing assessment dependencies.
#[derive(Clone)]
pub struct AssessmentAppState {
    pub questionnaire: Arc<Questionnaire>,
    pub history_store: Arc<dyn HistoryStore>,
    pub report_exporter: Arc<dyn ReportExporter>,
    pub chart_renderer: Arc<dyn ChartRenderer>,
}

impl AssessmentAppState {
    pub fn assess_handler(&self) -> AssessRatingsHandler {
        AssessRatingsHandler::new(self.questionnaire.clone())
    }

    pub fn export_report_handler(&self) -> ExportReportHandler {
        ExportReportHandler::new(self.report_exporter.clone())
    }

    pub fn render_radar_handler(&self) -> RenderRadarHandler {
        RenderRadarHandler::new(self.chart_renderer.clone())
    }

    pub fn save_history_handler(&self) -> SaveHistoryHandler {
        SaveHistoryHandler::new(self.history_store.clone())
    }

    pub fn list_history_handler(&self) -> ListHistoryHandler {
        ListHistoryHandler::new(self.history_store.clone())
    }

    pub fn export_history_handler(&self) -> ExportHistoryHandler {
        ExportHistoryHandler::new(self.history_store.clone())
    }

    fn assess(&self, request: &AssessmentRequest) -> Result<Assessment, DomainError> {
        self.assess_handler()
            .handle(AssessRatingsCommand::new(request.ratings.clone()))
    }
}

/// Builds a download response with content type and file name headers.
fn download(document: ExportedDocument) -> Response {
    let disposition = document.content_disposition();
    (
        [
            (header::CONTENT_TYPE, document.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.content,
    )
        .into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/questionnaire
///
/// Returns the maturity scale and the dimensions with their questions.
pub async fn get_questionnaire(
    State(state): State<AssessmentAppState>,
) -> Json<QuestionnaireResponse> {
    Json(QuestionnaireResponse::from(state.questionnaire.as_ref()))
}

/// POST /api/assessment
///
/// Returns the summary table and overall score for the submitted ratings.
pub async fn assess(
    State(state): State<AssessmentAppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<AssessmentResponse>, AssessmentApiError> {
    let assessment = state.assess(&request)?;
    let summary = ReportFormatter::build_summary_table(&assessment.dimensions);
    Ok(Json(AssessmentResponse::new(&assessment, &summary)))
}

/// POST /api/assessment/radar.svg
pub async fn radar_chart(
    State(state): State<AssessmentAppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Response, AssessmentApiError> {
    let assessment = state.assess(&request)?;
    let document = state.render_radar_handler().handle(&assessment)?;
    Ok(download(document))
}

/// POST /api/assessment/report.pdf
pub async fn report_pdf(
    State(state): State<AssessmentAppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Response, AssessmentApiError> {
    let assessment = state.assess(&request)?;
    let document = state.export_report_handler().handle(&assessment)?;
    Ok(download(document))
}

/// POST /api/history
///
/// Appends the assessment to the history log and returns the saved record.
pub async fn save_history(
    State(state): State<AssessmentAppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<(StatusCode, Json<HistoryRecordResponse>), AssessmentApiError> {
    let assessment = state.assess(&request)?;
    let record = state
        .save_history_handler()
        .handle(SaveHistoryCommand {
            assessment,
            user: request.user,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(HistoryRecordResponse::from(&record))))
}

/// GET /api/history
pub async fn list_history(
    State(state): State<AssessmentAppState>,
) -> Result<Json<Vec<HistoryRecordResponse>>, AssessmentApiError> {
    let records = state.list_history_handler().handle().await?;
    Ok(Json(records.iter().map(HistoryRecordResponse::from).collect()))
}

/// GET /api/history.csv
///
/// Downloads the full history file; 404 when nothing has been saved.
pub async fn export_history(
    State(state): State<AssessmentAppState>,
) -> Result<Response, AssessmentApiError> {
    let document = state.export_history_handler().handle().await?;
    Ok(download(document))
}
