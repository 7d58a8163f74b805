// File: crates/chart-spec/src/adapter.rs
// Summary: One-shot page-load pipelines for the goal trend and monthly trend charts.
// Notes:
// - Both adapters follow the same policy: a missing source element is a
//   silent skip, any decode/validation/engine failure is a typed error, and
//   the `render_*` entry points degrade every failure to "chart omitted".

use tracing::{debug, warn};

use crate::error::SpecError;
use crate::layout::{LayoutParams, ViewportClass, MIN_CONTAINER_HEIGHT};
use crate::payload::{decode_datasets, decode_labels, decode_values};
use crate::series::{AxisId, SeriesDef, SeriesGroup, SeriesRole, TimeSeries};
use crate::spec::ChartSpec;
use crate::target::RenderTarget;

/// Fixed payload identifiers from the page contract.
pub mod keys {
    pub const GOAL_LABELS: &str = "chart-labels";
    pub const GOAL_HOURS_COMPLETED: &str = "chart-hours-completed";
    pub const GOAL_HOURS_TARGET: &str = "chart-hours-target";
    pub const GOAL_LESSONS_COMPLETED: &str = "chart-lessons-completed";
    pub const GOAL_LESSONS_TARGET: &str = "chart-lessons-target";

    pub const MONTHLY_LABELS: &str = "labels";
    pub const MONTHLY_DATASETS: &str = "datasets";
}

/// What a pipeline run did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Rendered,
    /// Nothing to do: the chart is intentionally not present on this page.
    Skipped,
}

/// Dual-axis weekly trend chart for one goal: hours and lessons, each with a
/// completed series and a dashed target line.
pub struct GoalTrendAdapter;

impl GoalTrendAdapter {
    pub fn run(target: &mut dyn RenderTarget) -> Result<Outcome, SpecError> {
        let Some(labels_text) = target.payload(keys::GOAL_LABELS) else {
            debug!("goal trend: label payload absent, skipping");
            return Ok(Outcome::Skipped);
        };
        let sources = [
            (keys::GOAL_HOURS_COMPLETED, "Hours completed", AxisId::Primary, SeriesRole::Actual),
            (keys::GOAL_HOURS_TARGET, "Hours target", AxisId::Primary, SeriesRole::Target),
            (keys::GOAL_LESSONS_COMPLETED, "Lessons completed", AxisId::Secondary, SeriesRole::Actual),
            (keys::GOAL_LESSONS_TARGET, "Lessons target", AxisId::Secondary, SeriesRole::Target),
        ];

        let labels = decode_labels(keys::GOAL_LABELS, &labels_text)?;
        let mut group = SeriesGroup::new(labels);
        for (key, name, axis, role) in sources {
            let Some(text) = target.payload(key) else {
                debug!(key, "goal trend: series payload absent, skipping");
                return Ok(Outcome::Skipped);
            };
            let values = decode_values(key, &text)?;
            group.push(SeriesDef::new(TimeSeries::new(name, values), axis, role));
        }

        let spec = ChartSpec::goal_trend(group.validate()?);
        target.render(&spec)?;
        target.set_min_height(MIN_CONTAINER_HEIGHT);
        Ok(Outcome::Rendered)
    }
}

/// Single-axis chart of per-goal hours across the past 12 months, laid out
/// for the viewport class observed at render time.
pub struct MonthlyTrendAdapter;

impl MonthlyTrendAdapter {
    pub fn run(target: &mut dyn RenderTarget, viewport_width: u32) -> Result<Outcome, SpecError> {
        // Absent data attributes fall back to empty arrays; an empty chart
        // is still rendered.
        let labels_text = target.payload(keys::MONTHLY_LABELS).unwrap_or_default();
        let datasets_text = target.payload(keys::MONTHLY_DATASETS).unwrap_or_default();

        let labels = decode_labels(keys::MONTHLY_LABELS, &labels_text)?;
        let wire = decode_datasets(keys::MONTHLY_DATASETS, &datasets_text)?;

        let mut group = SeriesGroup::new(labels);
        for dataset in wire {
            group.push(dataset.into_series_def()?);
        }

        let params = LayoutParams::for_viewport(ViewportClass::classify(viewport_width));
        let spec = ChartSpec::monthly_trend(group.validate()?, &params)?;
        target.render(&spec)?;
        Ok(Outcome::Rendered)
    }
}

/// Page-load entry point for the goal trend chart. `None` means the chart's
/// element is not on this page. Failures are logged and degrade to an
/// omitted chart; this never panics and touches no state on failure paths.
pub fn render_goal_trend(target: Option<&mut dyn RenderTarget>) -> Outcome {
    let Some(target) = target else {
        debug!("goal trend: target element absent");
        return Outcome::Skipped;
    };
    match GoalTrendAdapter::run(target) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(error = %err, "goal trend: chart omitted");
            Outcome::Skipped
        }
    }
}

/// Page-load entry point for the monthly trend chart.
pub fn render_monthly_trend(target: Option<&mut dyn RenderTarget>, viewport_width: u32) -> Outcome {
    let Some(target) = target else {
        debug!("monthly trend: target element absent");
        return Outcome::Skipped;
    };
    match MonthlyTrendAdapter::run(target, viewport_width) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(error = %err, "monthly trend: chart omitted");
            Outcome::Skipped
        }
    }
}
