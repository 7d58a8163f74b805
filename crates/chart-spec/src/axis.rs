// File: crates/chart-spec/src/axis.rs
// Summary: Axis (scale) model with titles, tick options, and named constructors.

use serde::Serialize;

use crate::layout::LayoutParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    Left,
    Right,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
}

impl AxisTitle {
    pub fn new(text: impl Into<String>, display: bool) -> Self {
        Self { display, text: text.into() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontSpec {
    pub size: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridOptions {
    /// Suppressed on the secondary axis so two grids never overlap.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_on_chart_area: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draw_border: Option<bool>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickOptions {
    /// Decimal places; 0 forces integer-only labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<FontSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_skip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_rotation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_rotation: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ticks_limit: Option<u32>,
}

/// One resolved scale in the chart configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<AxisTitle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<AxisPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub begin_at_zero: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticks: Option<TickOptions>,
}

impl AxisSpec {
    /// Primary (left) hours axis of the goal trend chart.
    pub fn hours_left() -> Self {
        Self {
            title: Some(AxisTitle::new("Hours", true)),
            begin_at_zero: Some(true),
            ..Self::default()
        }
    }

    /// Secondary (right) lessons axis: grid suppressed, integer ticks only
    /// since lesson counts are discrete.
    pub fn lessons_right() -> Self {
        Self {
            title: Some(AxisTitle::new("Lessons", true)),
            begin_at_zero: Some(true),
            position: Some(AxisPosition::Right),
            grid: Some(GridOptions { draw_on_chart_area: Some(false), ..GridOptions::default() }),
            ticks: Some(TickOptions { precision: Some(0), ..TickOptions::default() }),
            ..Self::default()
        }
    }

    /// Goal trend X axis: skip crowded labels, never rotate them.
    pub fn weeks_bottom() -> Self {
        Self {
            ticks: Some(TickOptions {
                auto_skip: Some(true),
                max_rotation: Some(0),
                ..TickOptions::default()
            }),
            ..Self::default()
        }
    }

    /// Monthly trend X axis, tick density and rotation from the layout table.
    pub fn months_bottom(params: &LayoutParams) -> Self {
        Self {
            title: Some(AxisTitle::new("Month", params.show_axis_titles)),
            ticks: Some(TickOptions {
                font: Some(FontSpec { size: params.ticks_font_size }),
                max_rotation: Some(params.x_max_rotation),
                min_rotation: Some(0),
                max_ticks_limit: Some(params.x_max_ticks),
                ..TickOptions::default()
            }),
            ..Self::default()
        }
    }

    /// Monthly trend hours axis: whole-hour steps, no axis border stroke.
    pub fn monthly_hours_left(params: &LayoutParams) -> Self {
        Self {
            title: Some(AxisTitle::new("Hours", params.show_axis_titles)),
            begin_at_zero: Some(true),
            grid: Some(GridOptions { draw_border: Some(false), ..GridOptions::default() }),
            ticks: Some(TickOptions {
                step_size: Some(1),
                font: Some(FontSpec { size: params.ticks_font_size }),
                ..TickOptions::default()
            }),
            ..Self::default()
        }
    }
}
