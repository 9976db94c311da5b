//! Chart rendering adapters.

mod svg_radar_renderer;

pub use svg_radar_renderer::SvgRadarRenderer;
