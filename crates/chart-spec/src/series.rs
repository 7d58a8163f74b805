// File: crates/chart-spec/src/series.rs
// Summary: Series model for labelled value sequences with gaps, axis tags, and roles.
// Notes:
// - A `None` value is a gap (missing measurement), never zero. Gaps survive
//   decoding, validation, and spec construction untouched.
// - Validation is an explicit step producing `ValidSeriesGroup`; downstream
//   builders only accept the validated form.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Which Y axis a series is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisId {
    Primary,
    Secondary,
}

impl AxisId {
    /// Scale key used in the resolved chart configuration.
    pub fn scale_key(self) -> &'static str {
        match self {
            AxisId::Primary => "y",
            AxisId::Secondary => "y2",
        }
    }

    /// Parse a wire-form axis id ("y" / "y2").
    pub fn from_scale_key(series: &str, key: &str) -> Result<Self, SpecError> {
        match key {
            "y" => Ok(AxisId::Primary),
            "y2" => Ok(AxisId::Secondary),
            other => Err(SpecError::UnknownAxis {
                series: series.to_string(),
                axis: other.to_string(),
            }),
        }
    }
}

/// Visual role of a series: measured data vs. a reference line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesRole {
    Actual,
    Target,
}

/// One named sequence of values aligned to a shared label axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl TimeSeries {
    pub fn new(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self { name: name.into(), values }
    }

    /// True when the series carries no meaningful data point at all.
    pub fn is_all_gaps(&self) -> bool {
        self.values.iter().all(|v| v.is_none())
    }
}

/// Optional per-series styling carried on the wire; absent fields fall back
/// to the role preset when the spec is built.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleHints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_radius: Option<u32>,
}

impl StyleHints {
    pub fn is_empty(&self) -> bool {
        *self == StyleHints::default()
    }
}

/// A series tagged with its target axis and visual role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesDef {
    #[serde(flatten)]
    pub series: TimeSeries,
    pub axis: AxisId,
    pub role: SeriesRole,
    // Each hint field skips itself when absent, so empty hints add no keys.
    #[serde(flatten)]
    pub hints: StyleHints,
}

impl SeriesDef {
    pub fn new(series: TimeSeries, axis: AxisId, role: SeriesRole) -> Self {
        Self { series, axis, role, hints: StyleHints::default() }
    }

    pub fn with_hints(mut self, hints: StyleHints) -> Self {
        self.hints = hints;
        self
    }
}

/// Named collection of series sharing one label axis. This is the wire form;
/// call `validate` before building a chart spec from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesGroup {
    pub labels: Vec<String>,
    pub series: Vec<SeriesDef>,
}

impl SeriesGroup {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels, series: Vec::new() }
    }

    pub fn push(&mut self, def: SeriesDef) {
        self.series.push(def);
    }

    /// Check group invariants: every series is named and index-aligned with
    /// the label axis. An empty label axis with empty series is valid (a
    /// chart with no data points is not an error).
    pub fn validate(self) -> Result<ValidSeriesGroup, SpecError> {
        for (index, def) in self.series.iter().enumerate() {
            if def.series.name.is_empty() {
                return Err(SpecError::UnnamedSeries { index });
            }
            if def.series.values.len() != self.labels.len() {
                return Err(SpecError::LengthMismatch {
                    series: def.series.name.clone(),
                    expected: self.labels.len(),
                    actual: def.series.values.len(),
                });
            }
        }
        Ok(ValidSeriesGroup { labels: self.labels, series: self.series })
    }
}

/// A `SeriesGroup` whose invariants have been checked.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidSeriesGroup {
    labels: Vec<String>,
    series: Vec<SeriesDef>,
}

impl ValidSeriesGroup {
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn series(&self) -> &[SeriesDef] {
        &self.series
    }

    /// Drop series with zero meaningful data points, keeping order. An
    /// all-gap series must never reach a legend or an axis.
    pub fn retain_meaningful(mut self) -> Self {
        self.series.retain(|def| !def.series.is_all_gaps());
        self
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<SeriesDef>) {
        (self.labels, self.series)
    }
}
