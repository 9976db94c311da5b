//! Report Exporter Port - Downloadable artifact generation.
//!
//! This port defines the contract for turning a shaped report into bytes a
//! user can download. The application layer depends on this trait, while
//! adapters (like `PdfReportExporter`) provide the implementation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::ReportDocument;

/// Base name of the downloadable assessment report.
pub const REPORT_FILE_STEM: &str = "digital_maturity_assessment_report";

/// Base name of the downloadable history log.
pub const HISTORY_FILE_STEM: &str = "digital_maturity_history";

/// Base name of the downloadable radar chart.
pub const RADAR_FILE_STEM: &str = "digital_maturity_radar";

/// Port for exporting a report document.
///
/// # Contract
///
/// Implementations must render:
/// - the document title
/// - one row per summary entry (dimension, average, label), in order
/// - the trailing overall-score line
///
/// Byte-exact layout is up to the implementation.
pub trait ReportExporter: Send + Sync {
    /// The format this exporter produces.
    fn format(&self) -> ExportFormat;

    /// Renders the report document.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if rendering fails.
    fn export(&self, document: &ReportDocument) -> Result<Vec<u8>, ExportError>;
}

/// Formats of downloadable artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// PDF document.
    Pdf,
    /// Comma-separated values.
    Csv,
    /// SVG image.
    Svg,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Csv => "text/csv; charset=utf-8",
            ExportFormat::Svg => "image/svg+xml",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Csv => "csv",
            ExportFormat::Svg => "svg",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Exported artifact with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create a new exported document.
    pub fn new(content: Vec<u8>, format: ExportFormat, base_filename: &str) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: format!("{}.{}", base_filename, format.extension()),
            format,
        }
    }

    /// Value for a `Content-Disposition` header offering the file as a download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Errors that can occur during export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    #[error("Report has nothing to export: {0}")]
    EmptyDocument(String),

    #[error("Rendering failed: {0}")]
    RenderFailed(String),
}

impl ExportError {
    pub fn render_failed(message: impl Into<String>) -> Self {
        ExportError::RenderFailed(message.into())
    }
}

impl From<ExportError> for DomainError {
    fn from(err: ExportError) -> Self {
        DomainError::new(ErrorCode::ExportError, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_report_file_name_and_type() {
        let doc = ExportedDocument::new(vec![1, 2, 3], ExportFormat::Pdf, REPORT_FILE_STEM);

        assert_eq!(doc.filename, "digital_maturity_assessment_report.pdf");
        assert_eq!(doc.content_type, "application/pdf");
        assert_eq!(
            doc.content_disposition(),
            "attachment; filename=\"digital_maturity_assessment_report.pdf\""
        );
    }

    #[test]
    fn csv_history_file_name() {
        let doc = ExportedDocument::new(Vec::new(), ExportFormat::Csv, HISTORY_FILE_STEM);
        assert_eq!(doc.filename, "digital_maturity_history.csv");
        assert!(doc.content_type.starts_with("text/csv"));
    }

    #[test]
    fn export_format_displays_extension() {
        assert_eq!(ExportFormat::Svg.to_string(), "svg");
    }

    #[test]
    fn export_error_messages() {
        let err = ExportError::render_failed("font missing");
        assert_eq!(err.to_string(), "Rendering failed: font missing");
    }
}
