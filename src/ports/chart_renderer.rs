//! Chart Renderer Port - Drawing radar charts.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::report::RadarChart;

use super::ExportFormat;

/// A rendered chart ready to be served.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub content: Vec<u8>,
    pub format: ExportFormat,
}

/// Errors that can occur while rendering a chart.
#[derive(Debug, Clone, Error)]
pub enum ChartError {
    #[error("Chart has no axes to draw")]
    NoAxes,

    #[error("Chart rendering failed: {0}")]
    RenderFailed(String),
}

impl From<ChartError> for DomainError {
    fn from(err: ChartError) -> Self {
        DomainError::new(ErrorCode::ExportError, err.to_string())
    }
}

/// Port for rendering radar chart geometry.
///
/// Implementations draw the closed polygon on a radial axis from 0 to
/// `chart.radial_max` with one circular gridline per entry of
/// `chart.gridlines`, one spoke per axis in the given order.
pub trait ChartRenderer: Send + Sync {
    fn render(&self, chart: &RadarChart) -> Result<RenderedChart, ChartError>;
}
