// File: crates/chart-spec/src/error.rs
// Summary: Enumerated failures for payload decoding, group validation, and rendering.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecError {
    /// Payload text under `key` is not valid JSON of the expected shape.
    #[error("malformed payload '{key}': {source}")]
    MalformedPayload {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Series length disagrees with the shared label axis.
    #[error("series '{series}' has {actual} values but the label axis has {expected}")]
    LengthMismatch {
        series: String,
        expected: usize,
        actual: usize,
    },

    /// A series arrived without a name; it could not appear in a legend.
    #[error("series at index {index} has an empty name")]
    UnnamedSeries { index: usize },

    /// A series references a Y axis the chart does not define.
    #[error("series '{series}' references unknown axis '{axis}'")]
    UnknownAxis { series: String, axis: String },

    /// The charting engine behind the render target is not available.
    #[error("charting engine unavailable")]
    EngineUnavailable,
}
