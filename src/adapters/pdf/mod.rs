//! PDF report export adapter.
//!
//! Implements the `ReportExporter` port with pdf-writer.

mod pdf_report_exporter;

pub use pdf_report_exporter::{PdfLayout, PdfReportExporter};
