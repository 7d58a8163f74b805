// File: crates/chart-spec/src/spec.rs
// Summary: Fully resolved chart configuration and the two trend-chart builders.
// Notes:
// - Serializes to the camelCase JSON schema the charting front end consumes;
//   optional knobs are omitted rather than written as null.
// - Builders only accept `ValidSeriesGroup`, so every dataset here is named
//   and index-aligned with the label axis by construction.

use serde::Serialize;

use crate::axis::AxisSpec;
use crate::error::SpecError;
use crate::layout::LayoutParams;
use crate::series::{AxisId, SeriesDef, ValidSeriesGroup};
use crate::style::LineStyle;

/// One styled dataset in the resolved configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetSpec {
    pub label: String,
    pub data: Vec<Option<f64>>,
    pub border_width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_dash: Option<Vec<u32>>,
    pub tension: f64,
    pub span_gaps: bool,
    pub point_radius: u32,
    #[serde(rename = "yAxisID", skip_serializing_if = "Option::is_none")]
    pub y_axis_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl DatasetSpec {
    /// Resolve a series definition against its role preset; wire hints win
    /// over the preset where present.
    pub fn from_def(def: &SeriesDef) -> Self {
        let style = LineStyle::for_role(def.role);
        Self {
            label: def.series.name.clone(),
            data: def.series.values.clone(),
            border_width: def.hints.border_width.unwrap_or(style.border_width),
            border_dash: style.border_dash,
            tension: def.hints.tension.unwrap_or(style.tension),
            span_gaps: style.span_gaps,
            point_radius: def.hints.point_radius.unwrap_or(style.point_radius),
            y_axis_id: match def.axis {
                AxisId::Primary => None,
                AxisId::Secondary => Some(AxisId::Secondary.scale_key().to_string()),
            },
            border_color: def.hints.border_color.clone(),
            background_color: def.hints.background_color.clone(),
            fill: def.hints.fill,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<DatasetSpec>,
}

/// The scale set. `y2` is only present on dual-axis charts; a dataset may
/// reference an axis only if it exists here.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scales {
    pub x: AxisSpec,
    pub y: AxisSpec,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y2: Option<AxisSpec>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct InteractionOptions {
    pub mode: &'static str,
    pub intersect: bool,
}

impl InteractionOptions {
    /// Index-based tooltip lookup with non-intersecting hover.
    pub fn index_hover() -> Self {
        Self { mode: "index", intersect: false }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLabelOptions {
    pub box_width: u32,
    pub font: crate::axis::FontSpec,
    pub padding: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LegendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<LegendLabelOptions>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TooltipOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
    pub tooltip: TooltipOptions,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LayoutOptions {
    pub padding: Padding,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointElementOptions {
    pub hit_radius: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ElementOptions {
    pub point: PointElementOptions,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub interaction: InteractionOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutOptions>,
    pub scales: Scales,
    pub plugins: PluginOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elements: Option<ElementOptions>,
}

/// Renderer-ready line chart configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartSpec {
    /// Dual-axis goal trend chart: hours on the left axis, lessons on the
    /// right, targets dashed. Both axes are always defined, so any axis tag
    /// in the group resolves.
    pub fn goal_trend(group: ValidSeriesGroup) -> Self {
        let (labels, series) = group.retain_meaningful().into_parts();
        let datasets = series.iter().map(DatasetSpec::from_def).collect();
        Self {
            chart_type: "line",
            data: ChartData { labels, datasets },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                interaction: InteractionOptions::index_hover(),
                layout: None,
                scales: Scales {
                    x: AxisSpec::weeks_bottom(),
                    y: AxisSpec::hours_left(),
                    y2: Some(AxisSpec::lessons_right()),
                },
                plugins: PluginOptions {
                    legend: LegendOptions { display: Some(true), ..LegendOptions::default() },
                    tooltip: TooltipOptions::default(),
                },
                elements: Some(ElementOptions {
                    point: PointElementOptions {
                        hit_radius: LineStyle::actual().point_hit_radius,
                    },
                }),
            },
        }
    }

    /// Single-axis monthly trend chart with layout sized for the given
    /// viewport class. Rejects series tagged for a secondary axis since this
    /// chart defines none.
    pub fn monthly_trend(
        group: ValidSeriesGroup,
        params: &LayoutParams,
    ) -> Result<Self, SpecError> {
        let (labels, series) = group.retain_meaningful().into_parts();
        if let Some(def) = series.iter().find(|d| d.axis == AxisId::Secondary) {
            return Err(SpecError::UnknownAxis {
                series: def.series.name.clone(),
                axis: AxisId::Secondary.scale_key().to_string(),
            });
        }
        let datasets = series.iter().map(DatasetSpec::from_def).collect();
        Ok(Self {
            chart_type: "line",
            data: ChartData { labels, datasets },
            options: ChartOptions {
                responsive: true,
                maintain_aspect_ratio: false,
                interaction: InteractionOptions::index_hover(),
                layout: Some(LayoutOptions {
                    padding: Padding {
                        top: 8,
                        right: 4,
                        bottom: params.padding_bottom,
                        left: 0,
                    },
                }),
                scales: Scales {
                    x: AxisSpec::months_bottom(params),
                    y: AxisSpec::monthly_hours_left(params),
                    y2: None,
                },
                plugins: PluginOptions {
                    legend: LegendOptions {
                        display: None,
                        position: Some("bottom"),
                        labels: Some(LegendLabelOptions {
                            box_width: params.legend_box_width,
                            font: crate::axis::FontSpec { size: params.legend_font_size },
                            padding: params.legend_padding,
                        }),
                    },
                    tooltip: TooltipOptions { enabled: Some(true) },
                },
                elements: None,
            },
        })
    }
}
