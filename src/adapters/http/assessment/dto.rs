//! HTTP DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{DomainError, MaturityLevel};
use crate::domain::questionnaire::Questionnaire;
use crate::domain::report::{HistoryRecord, SummaryRow};
use crate::domain::scoring::{Assessment, Score};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// The complete form state of one interaction.
///
/// Dimensions left out of `ratings` keep the default level.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentRequest {
    /// Levels per dimension, one per question in question order.
    #[serde(default)]
    pub ratings: BTreeMap<String, Vec<i32>>,

    /// Free-text identifier recorded with saved assessments.
    #[serde(default)]
    pub user: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ScaleLevelResponse {
    pub level: u8,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionResponse {
    pub name: String,
    pub questions: Vec<String>,
}

/// Everything a client needs to render the rating form.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub scale: Vec<ScaleLevelResponse>,
    pub default_level: u8,
    pub dimensions: Vec<DimensionResponse>,
}

impl From<&Questionnaire> for QuestionnaireResponse {
    fn from(questionnaire: &Questionnaire) -> Self {
        Self {
            scale: MaturityLevel::all()
                .iter()
                .map(|level| ScaleLevelResponse {
                    level: level.value(),
                    label: level.label().to_string(),
                })
                .collect(),
            default_level: MaturityLevel::default().value(),
            dimensions: questionnaire
                .dimensions()
                .iter()
                .map(|d| DimensionResponse {
                    name: d.name().to_string(),
                    questions: d.questions().to_vec(),
                })
                .collect(),
        }
    }
}

/// One row of the summary table.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRowResponse {
    pub dimension: String,
    pub average_score: f64,
    /// Maturity label, e.g. "Advanced".
    pub maturity_level: String,
}

impl From<&SummaryRow> for SummaryRowResponse {
    fn from(row: &SummaryRow) -> Self {
        Self {
            dimension: row.dimension.clone(),
            average_score: row.average_score.value(),
            maturity_level: row.maturity_level.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub average_score: f64,
    pub maturity_level: u8,
    pub label: String,
}

impl From<&Score> for ScoreResponse {
    fn from(score: &Score) -> Self {
        Self {
            average_score: score.average.value(),
            maturity_level: score.maturity.value(),
            label: score.label().to_string(),
        }
    }
}

/// Summary table plus overall score.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentResponse {
    pub summary: Vec<SummaryRowResponse>,
    pub overall: ScoreResponse,
}

impl AssessmentResponse {
    pub fn new(assessment: &Assessment, summary: &[SummaryRow]) -> Self {
        Self {
            summary: summary.iter().map(SummaryRowResponse::from).collect(),
            overall: ScoreResponse::from(&assessment.overall),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordedScoreResponse {
    pub dimension: String,
    pub score: f64,
}

/// One saved assessment.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRecordResponse {
    /// `%Y-%m-%d %H:%M:%S`, UTC.
    pub timestamp: String,
    pub user: String,
    pub dimension_scores: Vec<RecordedScoreResponse>,
    pub overall_score: f64,
}

impl From<&HistoryRecord> for HistoryRecordResponse {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            timestamp: record.timestamp().to_history_string(),
            user: record.user().to_string(),
            dimension_scores: record
                .dimension_scores()
                .iter()
                .map(|s| RecordedScoreResponse {
                    dimension: s.dimension.clone(),
                    score: s.score.value(),
                })
                .collect(),
            overall_score: record.overall_score().value(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(error: &DomainError) -> Self {
        let details = if error.details.is_empty() {
            None
        } else {
            let sorted: BTreeMap<_, _> = error.details.iter().collect();
            serde_json::to_value(sorted).ok()
        };
        Self {
            code: error.code.to_string(),
            message: error.message.clone(),
            details,
        }
    }
}
