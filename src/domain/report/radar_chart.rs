//! Radar chart geometry for dimension scores.

use serde::Serialize;
use std::f64::consts::PI;

use crate::domain::foundation::MaturityLevel;
use crate::domain::scoring::DimensionScore;

pub const RADAR_TITLE: &str = "Digital Maturity Assessment Radar";

/// Outer edge of the radial axis.
pub const RADAR_SCALE_MAX: f64 = MaturityLevel::MAX as f64;

/// One spoke of the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarAxis {
    pub label: String,
    /// Radians, counter-clockwise from the positive x axis.
    pub angle: f64,
}

/// A polygon vertex in polar coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarPoint {
    pub angle: f64,
    pub radius: f64,
}

impl RadarPoint {
    /// Cartesian position with y pointing up.
    pub fn to_cartesian(&self) -> (f64, f64) {
        (self.radius * self.angle.cos(), self.radius * self.angle.sin())
    }
}

/// Renderer-independent description of a radar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub title: String,
    pub axes: Vec<RadarAxis>,
    /// Closed polygon: the last vertex repeats the first.
    pub polygon: Vec<RadarPoint>,
    pub radial_max: f64,
    /// Radii of the circular gridlines.
    pub gridlines: Vec<u8>,
}

/// Lays out one spoke per dimension, evenly spaced in the given order.
///
/// With no dimensions the chart has no axes and an empty polygon.
pub fn build_radar_chart(dimension_scores: &[DimensionScore]) -> RadarChart {
    let count = dimension_scores.len();
    let axes: Vec<RadarAxis> = dimension_scores
        .iter()
        .enumerate()
        .map(|(i, d)| RadarAxis {
            label: d.dimension.clone(),
            angle: 2.0 * PI * i as f64 / count as f64,
        })
        .collect();

    let mut polygon: Vec<RadarPoint> = axes
        .iter()
        .zip(dimension_scores)
        .map(|(axis, d)| RadarPoint {
            angle: axis.angle,
            radius: d.score.average.value(),
        })
        .collect();
    if let Some(first) = polygon.first().copied() {
        polygon.push(first);
    }

    RadarChart {
        title: RADAR_TITLE.to_string(),
        axes,
        polygon,
        radial_max: RADAR_SCALE_MAX,
        gridlines: (MaturityLevel::MIN..=MaturityLevel::MAX).collect(),
    }
}
