//! ExportReportHandler - Produces the downloadable assessment report.

use std::sync::Arc;

use tracing::{error, info};

use crate::domain::foundation::DomainError;
use crate::domain::report::ReportFormatter;
use crate::domain::scoring::Assessment;
use crate::ports::{ExportedDocument, ReportExporter, REPORT_FILE_STEM};

/// Handler rendering an assessment through the report exporter.
pub struct ExportReportHandler {
    exporter: Arc<dyn ReportExporter>,
}

impl ExportReportHandler {
    pub fn new(exporter: Arc<dyn ReportExporter>) -> Self {
        Self { exporter }
    }

    pub fn handle(&self, assessment: &Assessment) -> Result<ExportedDocument, DomainError> {
        let document = ReportFormatter::build_report_document(assessment);
        let content = self.exporter.export(&document).map_err(|e| {
            error!(error = %e, "Report export failed");
            DomainError::from(e)
        })?;

        let exported = ExportedDocument::new(content, self.exporter.format(), REPORT_FILE_STEM);
        info!(
            filename = %exported.filename,
            bytes = exported.content.len(),
            "Exported assessment report"
        );
        Ok(exported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AverageScore, ErrorCode};
    use crate::domain::report::ReportDocument;
    use crate::domain::scoring::{DimensionScore, Score};
    use crate::ports::{ExportError, ExportFormat};
    use std::sync::Mutex;

    // ─────────────────────────────────────────────────────────────────────
    // Mock Implementation
    // ─────────────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct MockExporter {
        should_fail: bool,
        received: Mutex<Vec<ReportDocument>>,
    }

    impl MockExporter {
        fn failing() -> Self {
            Self {
                should_fail: true,
                ..Default::default()
            }
        }
    }

    impl ReportExporter for MockExporter {
        fn format(&self) -> ExportFormat {
            ExportFormat::Pdf
        }

        fn export(&self, document: &ReportDocument) -> Result<Vec<u8>, ExportError> {
            if self.should_fail {
                return Err(ExportError::render_failed("Simulated failure"));
            }
            self.received.lock().unwrap().push(document.clone());
            Ok(b"%PDF-mock".to_vec())
        }
    }

    fn test_assessment() -> Assessment {
        let score = Score::from_average(AverageScore::from_tenths(43).unwrap());
        Assessment {
            dimensions: vec![DimensionScore::new("People", score)],
            overall: score,
        }
    }

    #[test]
    fn exports_with_report_filename() {
        let exporter = Arc::new(MockExporter::default());
        let handler = ExportReportHandler::new(exporter.clone());

        let exported = handler.handle(&test_assessment()).unwrap();

        assert_eq!(exported.filename, "digital_maturity_assessment_report.pdf");
        assert_eq!(exported.content_type, "application/pdf");
        assert_eq!(exported.content, b"%PDF-mock".to_vec());

        let received = exporter.received.lock().unwrap();
        assert_eq!(received[0].overall_line(), "Overall Score: 4.3 (Advanced)");
    }

    #[test]
    fn exporter_failure_becomes_export_error() {
        let handler = ExportReportHandler::new(Arc::new(MockExporter::failing()));

        let err = handler.handle(&test_assessment()).unwrap_err();

        assert_eq!(err.code, ErrorCode::ExportError);
    }
}
