//! Report Module - Shapes scores into the artifacts handed to adapters.
//!
//! Nothing here performs I/O; exporters, renderers and the history store
//! serialize these plain structures.
//!
//! - Summary table and report document (PDF export)
//! - History record (history log)
//! - Radar chart geometry (chart rendering)

mod history_record;
mod radar_chart;
mod summary_table;

pub use history_record::{
    build_history_record, normalize_user, score_column, HistoryRecord, RecordedScore,
    ANONYMOUS_USER, OVERALL_SCORE_COLUMN, TIMESTAMP_COLUMN, USER_COLUMN,
};
pub use radar_chart::{
    build_radar_chart, RadarAxis, RadarChart, RadarPoint, RADAR_SCALE_MAX, RADAR_TITLE,
};
pub use summary_table::{
    build_report_document, build_summary_table, ReportDocument, SummaryRow, REPORT_TITLE,
};

use crate::domain::foundation::Timestamp;
use crate::domain::scoring::{Assessment, DimensionScore, Score};

/// Facade over the report shaping functions.
pub struct ReportFormatter;

impl ReportFormatter {
    pub fn build_summary_table(dimension_scores: &[DimensionScore]) -> Vec<SummaryRow> {
        build_summary_table(dimension_scores)
    }

    pub fn build_history_record(
        timestamp: Timestamp,
        user: Option<&str>,
        dimension_scores: &[DimensionScore],
        overall: &Score,
    ) -> HistoryRecord {
        build_history_record(timestamp, user, dimension_scores, overall)
    }

    pub fn build_report_document(assessment: &Assessment) -> ReportDocument {
        build_report_document(assessment)
    }

    pub fn build_radar_chart(dimension_scores: &[DimensionScore]) -> RadarChart {
        build_radar_chart(dimension_scores)
    }
}
