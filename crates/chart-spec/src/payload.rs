// File: crates/chart-spec/src/payload.rs
// Summary: Decoding of serialized page payloads into typed arrays.
// Notes:
// - Empty or whitespace-only text is the explicit empty-array fallback the
//   page contract allows; anything else must be valid JSON of the expected
//   shape or decoding fails loudly with the offending key.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::SpecError;
use crate::series::{AxisId, SeriesDef, SeriesRole, StyleHints, TimeSeries};

fn parse<T: DeserializeOwned>(key: &str, text: &str) -> Result<T, SpecError> {
    serde_json::from_str(text).map_err(|source| SpecError::MalformedPayload {
        key: key.to_string(),
        source,
    })
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Decode a label-axis payload.
pub fn decode_labels(key: &str, text: &str) -> Result<Vec<String>, SpecError> {
    if is_blank(text) {
        return Ok(Vec::new());
    }
    parse(key, text)
}

/// Decode one series' values; JSON `null` entries become gaps.
pub fn decode_values(key: &str, text: &str) -> Result<Vec<Option<f64>>, SpecError> {
    if is_blank(text) {
        return Ok(Vec::new());
    }
    parse(key, text)
}

/// A pre-built dataset object as the monthly page serializes it: a name,
/// values, an optional target-axis tag, and optional styling hints.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireDataset {
    pub label: String,
    #[serde(default)]
    pub data: Vec<Option<f64>>,
    #[serde(rename = "yAxisID", default)]
    pub y_axis_id: Option<String>,
    #[serde(flatten)]
    pub hints: StyleHints,
}

impl WireDataset {
    /// Resolve the wire form into the series model. An absent axis tag means
    /// the primary axis; an unrecognized tag is a typed failure.
    pub fn into_series_def(self) -> Result<SeriesDef, SpecError> {
        let axis = match self.y_axis_id.as_deref() {
            None => AxisId::Primary,
            Some(key) => AxisId::from_scale_key(&self.label, key)?,
        };
        Ok(SeriesDef::new(TimeSeries::new(self.label, self.data), axis, SeriesRole::Actual)
            .with_hints(self.hints))
    }
}

/// Decode the monthly datasets payload.
pub fn decode_datasets(key: &str, text: &str) -> Result<Vec<WireDataset>, SpecError> {
    if is_blank(text) {
        return Ok(Vec::new());
    }
    parse(key, text)
}
