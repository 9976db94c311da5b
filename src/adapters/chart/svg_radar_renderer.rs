//! SVG radar chart renderer built on the `svg` crate.

use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path, Text};
use svg::Document;

use crate::domain::report::{RadarChart, RadarPoint};
use crate::ports::{ChartError, ChartRenderer, ExportFormat, RenderedChart};

const POLYGON_COLOR: &str = "#1f77b4";
const GRID_COLOR: &str = "#cccccc";

/// Renders radar charts as standalone SVG documents.
#[derive(Debug, Clone)]
pub struct SvgRadarRenderer {
    /// Width and height of the square canvas in pixels.
    size: f64,
}

impl Default for SvgRadarRenderer {
    fn default() -> Self {
        Self { size: 480.0 }
    }
}

impl SvgRadarRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    fn center(&self) -> f64 {
        self.size / 2.0
    }

    /// Pixels per score unit; leaves room for the title and labels.
    fn scale(&self, radial_max: f64) -> f64 {
        self.size * 0.34 / radial_max
    }

    /// Canvas position with y pointing down.
    fn project(&self, point: RadarPoint, scale: f64) -> (f64, f64) {
        let (x, y) = point.to_cartesian();
        (self.center() + x * scale, self.center() - y * scale)
    }
}

impl ChartRenderer for SvgRadarRenderer {
    fn render(&self, chart: &RadarChart) -> Result<RenderedChart, ChartError> {
        if chart.axes.is_empty() {
            return Err(ChartError::NoAxes);
        }
        if chart.radial_max.is_nan() || chart.radial_max <= 0.0 {
            return Err(ChartError::RenderFailed(format!(
                "invalid radial maximum {}",
                chart.radial_max
            )));
        }

        let center = self.center();
        let scale = self.scale(chart.radial_max);
        let mut document = Document::new()
            .set("viewBox", (0.0, 0.0, self.size, self.size))
            .set("width", self.size)
            .set("height", self.size)
            .set("font-family", "sans-serif");

        document = document.add(
            Text::new(chart.title.clone())
                .set("x", center)
                .set("y", self.size * 0.06)
                .set("text-anchor", "middle")
                .set("font-size", 16),
        );

        for ring in &chart.gridlines {
            document = document.add(
                Circle::new()
                    .set("cx", center)
                    .set("cy", center)
                    .set("r", f64::from(*ring) * scale)
                    .set("fill", "none")
                    .set("stroke", GRID_COLOR)
                    .set("stroke-width", 1),
            );
        }

        for axis in &chart.axes {
            let edge = RadarPoint {
                angle: axis.angle,
                radius: chart.radial_max,
            };
            let (x, y) = self.project(edge, scale);
            document = document.add(
                Line::new()
                    .set("x1", center)
                    .set("y1", center)
                    .set("x2", x)
                    .set("y2", y)
                    .set("stroke", GRID_COLOR)
                    .set("stroke-width", 1),
            );

            let label_at = RadarPoint {
                angle: axis.angle,
                radius: chart.radial_max * 1.15,
            };
            let (lx, ly) = self.project(label_at, scale);
            let anchor = match axis.angle.cos() {
                c if c > 0.1 => "start",
                c if c < -0.1 => "end",
                _ => "middle",
            };
            document = document.add(
                Text::new(axis.label.clone())
                    .set("x", lx)
                    .set("y", ly)
                    .set("text-anchor", anchor)
                    .set("dominant-baseline", "middle")
                    .set("font-size", 12),
            );
        }

        // The polygon already repeats its first vertex.
        let mut vertices = chart.polygon.iter().map(|p| {
            let (x, y) = self.project(*p, scale);
            (x as f32, y as f32)
        });
        if let Some(start) = vertices.next() {
            let data = vertices.fold(Data::new().move_to(start), |data, v| data.line_to(v));
            document = document.add(
                Path::new()
                    .set("d", data.close())
                    .set("fill", POLYGON_COLOR)
                    .set("fill-opacity", 0.25)
                    .set("stroke", POLYGON_COLOR)
                    .set("stroke-width", 2),
            );
        }

        let vertex_count = chart.polygon.len().saturating_sub(1);
        for point in chart.polygon.iter().take(vertex_count) {
            let (x, y) = self.project(*point, scale);
            document = document.add(
                Circle::new()
                    .set("cx", x)
                    .set("cy", y)
                    .set("r", 3)
                    .set("fill", POLYGON_COLOR),
            );
        }

        Ok(RenderedChart {
            content: document.to_string().into_bytes(),
            format: ExportFormat::Svg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::AverageScore;
    use crate::domain::report::build_radar_chart;
    use crate::domain::scoring::{DimensionScore, Score};

    fn dimension(name: &str, tenths: u16) -> DimensionScore {
        DimensionScore::new(
            name,
            Score::from_average(AverageScore::from_tenths(tenths).unwrap()),
        )
    }

    fn render(scores: &[DimensionScore]) -> String {
        let rendered = SvgRadarRenderer::new()
            .render(&build_radar_chart(scores))
            .unwrap();
        assert_eq!(rendered.format, ExportFormat::Svg);
        String::from_utf8(rendered.content).unwrap()
    }

    #[test]
    fn renders_gridlines_spokes_and_polygon() {
        let svg = render(&[
            dimension("People", 30),
            dimension("Process", 35),
            dimension("Technology", 42),
            dimension("Data", 18),
        ]);

        assert!(svg.contains("<svg"));
        assert_eq!(svg.matches("<path").count(), 1);
        assert_eq!(svg.matches("<line").count(), 4);
        // Five gridlines plus one marker per dimension.
        assert_eq!(svg.matches("<circle").count(), 9);
    }

    #[test]
    fn renders_title_and_labels() {
        let svg = render(&[dimension("People", 30), dimension("Data", 50)]);

        assert!(svg.contains("Digital Maturity Assessment Radar"));
        assert!(svg.contains("People"));
        assert!(svg.contains("Data"));
    }

    #[test]
    fn first_spoke_points_east() {
        let renderer = SvgRadarRenderer::new().with_size(200.0);
        let (x, y) = renderer.project(RadarPoint { angle: 0.0, radius: 5.0 }, renderer.scale(5.0));

        assert!(x > renderer.center());
        assert!((y - renderer.center()).abs() < 1e-9);
    }

    #[test]
    fn rejects_chart_without_axes() {
        let result = SvgRadarRenderer::new().render(&build_radar_chart(&[]));
        assert!(matches!(result, Err(ChartError::NoAxes)));
    }
}
