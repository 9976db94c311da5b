//! RenderRadarHandler - Draws the radar chart for an assessment.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::foundation::DomainError;
use crate::domain::report::ReportFormatter;
use crate::domain::scoring::Assessment;
use crate::ports::{ChartRenderer, ExportedDocument, RADAR_FILE_STEM};

pub struct RenderRadarHandler {
    renderer: Arc<dyn ChartRenderer>,
}

impl RenderRadarHandler {
    pub fn new(renderer: Arc<dyn ChartRenderer>) -> Self {
        Self { renderer }
    }

    pub fn handle(&self, assessment: &Assessment) -> Result<ExportedDocument, DomainError> {
        let chart = ReportFormatter::build_radar_chart(&assessment.dimensions);
        let rendered = self.renderer.render(&chart).map_err(|e| {
            warn!(error = %e, "Radar chart rendering failed");
            DomainError::from(e)
        })?;

        debug!(axes = chart.axes.len(), "Rendered radar chart");
        Ok(ExportedDocument::new(
            rendered.content,
            rendered.format,
            RADAR_FILE_STEM,
        ))
    }
}
