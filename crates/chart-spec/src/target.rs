// File: crates/chart-spec/src/target.rs
// Summary: Render-target capability abstracting the page surface, plus an
// in-memory implementation for tests and demos.

use std::collections::HashMap;

use crate::error::SpecError;
use crate::spec::ChartSpec;

/// The page surface a chart is mounted on. Offers reads of serialized
/// payloads keyed by element id or data attribute, and the two writes the
/// pipeline performs: handing off the resolved spec and forcing a minimum
/// container height.
pub trait RenderTarget {
    /// Serialized payload text for `key`, or `None` when the source element
    /// is absent from the page.
    fn payload(&self, key: &str) -> Option<String>;

    /// Hand the resolved configuration to the charting engine. Called at
    /// most once per pipeline run.
    fn render(&mut self, spec: &ChartSpec) -> Result<(), SpecError>;

    /// Force a minimum height on the chart's container so the layout does
    /// not collapse around a chart with few data points.
    fn set_min_height(&mut self, px: u32);
}

/// In-memory render target: payloads come from a map, writes are recorded.
#[derive(Debug, Default)]
pub struct MemoryTarget {
    payloads: HashMap<String, String>,
    engine_missing: bool,
    rendered: Option<ChartSpec>,
    min_height: Option<u32>,
}

impl MemoryTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.payloads.insert(key.into(), text.into());
        self
    }

    /// Simulate a page where the charting engine failed to load.
    pub fn without_engine(mut self) -> Self {
        self.engine_missing = true;
        self
    }

    pub fn rendered(&self) -> Option<&ChartSpec> {
        self.rendered.as_ref()
    }

    pub fn min_height(&self) -> Option<u32> {
        self.min_height
    }
}

impl RenderTarget for MemoryTarget {
    fn payload(&self, key: &str) -> Option<String> {
        self.payloads.get(key).cloned()
    }

    fn render(&mut self, spec: &ChartSpec) -> Result<(), SpecError> {
        if self.engine_missing {
            return Err(SpecError::EngineUnavailable);
        }
        self.rendered = Some(spec.clone());
        Ok(())
    }

    fn set_min_height(&mut self, px: u32) {
        self.min_height = Some(px);
    }
}
