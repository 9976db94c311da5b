//! Summary table and report document shaping.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AverageScore, MaturityLevel};
use crate::domain::scoring::{Assessment, DimensionScore, Score};

/// Title printed at the top of the exported report.
pub const REPORT_TITLE: &str = "Digital Maturity Assessment Report";

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub dimension: String,
    pub average_score: AverageScore,
    pub maturity_level: MaturityLevel,
}

impl From<&DimensionScore> for SummaryRow {
    fn from(score: &DimensionScore) -> Self {
        Self {
            dimension: score.dimension.clone(),
            average_score: score.score.average,
            maturity_level: score.score.maturity,
        }
    }
}

/// Everything the report exporter needs to lay out one report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportDocument {
    pub title: String,
    pub rows: Vec<SummaryRow>,
    pub overall: Score,
}

impl ReportDocument {
    /// The closing line of the report, e.g. `Overall Score: 4.3 (Advanced)`.
    pub fn overall_line(&self) -> String {
        format!("Overall Score: {}", self.overall)
    }
}

/// Builds the summary table, one row per dimension in the given order.
pub fn build_summary_table(dimension_scores: &[DimensionScore]) -> Vec<SummaryRow> {
    dimension_scores.iter().map(SummaryRow::from).collect()
}

/// Builds the report document for an assessment.
pub fn build_report_document(assessment: &Assessment) -> ReportDocument {
    ReportDocument {
        title: REPORT_TITLE.to_string(),
        rows: build_summary_table(&assessment.dimensions),
        overall: assessment.overall,
    }
}
