// File: crates/chart-spec/src/lib.rs
// Summary: Library entry point; exports the series model, chart-spec builders, and adapters.

pub mod adapter;
pub mod axis;
pub mod error;
pub mod layout;
pub mod payload;
pub mod series;
pub mod spec;
pub mod style;
pub mod target;

pub use adapter::{render_goal_trend, render_monthly_trend, GoalTrendAdapter, MonthlyTrendAdapter, Outcome};
pub use axis::AxisSpec;
pub use error::SpecError;
pub use layout::{LayoutParams, ViewportClass};
pub use series::{AxisId, SeriesDef, SeriesGroup, SeriesRole, TimeSeries, ValidSeriesGroup};
pub use spec::{ChartSpec, DatasetSpec};
pub use style::LineStyle;
pub use target::{MemoryTarget, RenderTarget};
