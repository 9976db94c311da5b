//! Assessment command and query handlers.

mod assess_ratings;
mod export_report;
mod list_history;
mod render_radar;
mod save_history;

pub use assess_ratings::{AssessRatingsCommand, AssessRatingsHandler, AssessRatingsResult};
pub use export_report::ExportReportHandler;
pub use list_history::{ExportHistoryHandler, ListHistoryHandler};
pub use render_radar::RenderRadarHandler;
pub use save_history::{SaveHistoryCommand, SaveHistoryHandler, SaveHistoryResult};
