// File: crates/chart-spec/tests/goal_trend.rs
// Purpose: End-to-end goal trend pipeline over an in-memory render target.

use chart_spec::adapter::keys;
use chart_spec::{render_goal_trend, GoalTrendAdapter, MemoryTarget, Outcome, RenderTarget, SpecError};

fn goal_target() -> MemoryTarget {
    MemoryTarget::new()
        .with_payload(keys::GOAL_LABELS, r#"["2025-06-02", "2025-06-09", "2025-06-16"]"#)
        .with_payload(keys::GOAL_HOURS_COMPLETED, "[1, null, 3]")
        .with_payload(keys::GOAL_HOURS_TARGET, "[2, 2, 2]")
        .with_payload(keys::GOAL_LESSONS_COMPLETED, "[4, 5, null]")
        .with_payload(keys::GOAL_LESSONS_TARGET, "[5, 5, 5]")
}

#[test]
fn renders_dual_axis_spec() {
    let mut target = goal_target();
    let outcome = GoalTrendAdapter::run(&mut target).expect("pipeline should succeed");
    assert_eq!(outcome, Outcome::Rendered);

    let spec = target.rendered().expect("spec handed to engine");
    assert_eq!(spec.chart_type, "line");
    assert_eq!(spec.data.labels.len(), 3);
    assert_eq!(spec.data.datasets.len(), 4);

    // Secondary axis exists, grid suppressed, integer ticks.
    let y2 = spec.options.scales.y2.as_ref().expect("secondary axis");
    assert_eq!(y2.grid.unwrap().draw_on_chart_area, Some(false));
    assert_eq!(y2.ticks.unwrap().precision, Some(0));

    // Lessons series are mapped to the secondary axis.
    let lessons = &spec.data.datasets[2];
    assert_eq!(lessons.label, "Lessons completed");
    assert_eq!(lessons.y_axis_id.as_deref(), Some("y2"));

    // Container min-height applied after the render.
    assert_eq!(target.min_height(), Some(320));
}

#[test]
fn preserves_gap_and_dashes_targets() {
    let mut target = goal_target();
    GoalTrendAdapter::run(&mut target).unwrap();
    let spec = target.rendered().unwrap();

    let hours = &spec.data.datasets[0];
    assert_eq!(hours.label, "Hours completed");
    // The missing week stays a gap, not a zero.
    assert_eq!(hours.data, vec![Some(1.0), None, Some(3.0)]);
    assert_eq!(hours.border_dash, None);
    assert_eq!(hours.point_radius, 2);

    let hours_target = &spec.data.datasets[1];
    assert_eq!(hours_target.label, "Hours target");
    assert_eq!(hours_target.border_dash, Some(vec![6, 6]));
    assert_eq!(hours_target.point_radius, 0);
}

#[test]
fn drops_all_gap_series() {
    let mut target = goal_target()
        .with_payload(keys::GOAL_LESSONS_COMPLETED, "[null, null, null]")
        .with_payload(keys::GOAL_LESSONS_TARGET, "[null, null, null]");
    GoalTrendAdapter::run(&mut target).unwrap();

    let spec = target.rendered().unwrap();
    assert_eq!(spec.data.datasets.len(), 2);
    assert!(spec.data.datasets.iter().all(|d| !d.label.starts_with("Lessons")));
}

#[test]
fn missing_labels_payload_skips_without_side_effects() {
    let mut target = MemoryTarget::new()
        .with_payload(keys::GOAL_HOURS_COMPLETED, "[1, 2]");
    let outcome = GoalTrendAdapter::run(&mut target).unwrap();
    assert_eq!(outcome, Outcome::Skipped);
    assert!(target.rendered().is_none());
    assert_eq!(target.min_height(), None);
}

#[test]
fn absent_target_element_is_a_noop() {
    assert_eq!(render_goal_trend(None), Outcome::Skipped);
}

#[test]
fn malformed_payload_is_a_typed_error() {
    let mut target = goal_target().with_payload(keys::GOAL_HOURS_COMPLETED, "[1, oops]");
    let err = GoalTrendAdapter::run(&mut target).unwrap_err();
    match err {
        SpecError::MalformedPayload { key, .. } => assert_eq!(key, keys::GOAL_HOURS_COMPLETED),
        other => panic!("unexpected error: {other}"),
    }
    assert!(target.rendered().is_none());
    assert_eq!(target.min_height(), None);
}

#[test]
fn entry_point_degrades_failures_to_omitted_chart() {
    let mut target = goal_target().with_payload(keys::GOAL_HOURS_TARGET, "{not json");
    let outcome = render_goal_trend(Some(&mut target as &mut dyn RenderTarget));
    assert_eq!(outcome, Outcome::Skipped);
    assert!(target.rendered().is_none());

    // Engine missing degrades the same way instead of crashing the page.
    let mut target = goal_target().without_engine();
    let outcome = render_goal_trend(Some(&mut target as &mut dyn RenderTarget));
    assert_eq!(outcome, Outcome::Skipped);
    assert_eq!(target.min_height(), None);
}
