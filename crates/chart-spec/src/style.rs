// File: crates/chart-spec/src/style.rs
// Summary: Line styling presets for measured series vs. target reference lines.

use crate::series::SeriesRole;

/// Stroke/point styling applied to one dataset in the resolved spec.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    pub border_width: u32,
    /// Dash pattern in pixels; `None` renders a solid stroke.
    pub border_dash: Option<Vec<u32>>,
    pub tension: f64,
    /// Draw across gaps instead of breaking the line between neighbours of
    /// a missing point. The gap itself still has no point marker.
    pub span_gaps: bool,
    pub point_radius: u32,
    pub point_hit_radius: u32,
}

impl LineStyle {
    /// Measured data: solid stroke with visible points.
    pub fn actual() -> Self {
        Self {
            border_width: 2,
            border_dash: None,
            tension: 0.35,
            span_gaps: true,
            point_radius: 2,
            point_hit_radius: 8,
        }
    }

    /// Target/threshold line: dashed, no point markers, so it reads as a
    /// reference line rather than measured data.
    pub fn target() -> Self {
        Self {
            border_dash: Some(vec![6, 6]),
            point_radius: 0,
            ..Self::actual()
        }
    }

    pub fn for_role(role: SeriesRole) -> Self {
        match role {
            SeriesRole::Actual => Self::actual(),
            SeriesRole::Target => Self::target(),
        }
    }
}
