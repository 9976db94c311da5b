//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `HistoryStore` - append-only log of saved assessments
//! - `ReportExporter` - downloadable report generation
//! - `ChartRenderer` - radar chart drawing

mod chart_renderer;
mod history_store;
mod report_exporter;

pub use chart_renderer::{ChartError, ChartRenderer, RenderedChart};
pub use history_store::{HistoryStore, HistoryStoreError};
pub use report_exporter::{
    ExportError, ExportFormat, ExportedDocument, ReportExporter, HISTORY_FILE_STEM,
    RADAR_FILE_STEM, REPORT_FILE_STEM,
};
