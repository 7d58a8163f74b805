// File: crates/chart-spec/tests/validation.rs
// Purpose: Group validation errors, wire round-trips, and viewport classification.

use chart_spec::series::StyleHints;
use chart_spec::{
    AxisId, ChartSpec, LayoutParams, SeriesDef, SeriesGroup, SeriesRole, SpecError, TimeSeries,
    ViewportClass,
};

fn sample_group() -> SeriesGroup {
    let mut group = SeriesGroup::new(vec!["Jan".into(), "Feb".into(), "Mar".into()]);
    group.push(SeriesDef::new(
        TimeSeries::new("Hours completed", vec![Some(1.0), None, Some(3.25)]),
        AxisId::Primary,
        SeriesRole::Actual,
    ));
    group.push(
        SeriesDef::new(
            TimeSeries::new("Hours target", vec![Some(2.0), Some(2.0), Some(2.0)]),
            AxisId::Secondary,
            SeriesRole::Target,
        )
        .with_hints(StyleHints {
            border_color: Some("hsl(12, 70%, 55%)".into()),
            ..StyleHints::default()
        }),
    );
    group
}

#[test]
fn series_group_round_trips_exactly() {
    let group = sample_group();
    let json = serde_json::to_string(&group).unwrap();
    let back: SeriesGroup = serde_json::from_str(&json).unwrap();
    // Label order, gap positions, values, tags, and hints all survive.
    assert_eq!(back, group);
}

#[test]
fn length_mismatch_is_enumerated() {
    let mut group = SeriesGroup::new(vec!["Jan".into(), "Feb".into()]);
    group.push(SeriesDef::new(
        TimeSeries::new("Short", vec![Some(1.0)]),
        AxisId::Primary,
        SeriesRole::Actual,
    ));
    match group.validate().unwrap_err() {
        SpecError::LengthMismatch { series, expected, actual } => {
            assert_eq!(series, "Short");
            assert_eq!(expected, 2);
            assert_eq!(actual, 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unnamed_series_is_enumerated() {
    let mut group = SeriesGroup::new(vec!["Jan".into()]);
    group.push(SeriesDef::new(
        TimeSeries::new("", vec![Some(1.0)]),
        AxisId::Primary,
        SeriesRole::Actual,
    ));
    match group.validate().unwrap_err() {
        SpecError::UnnamedSeries { index } => assert_eq!(index, 0),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn empty_group_is_valid() {
    let valid = SeriesGroup::new(Vec::new()).validate().unwrap();
    assert!(valid.labels().is_empty());
    assert!(valid.series().is_empty());
}

#[test]
fn retain_meaningful_keeps_order() {
    let mut group = SeriesGroup::new(vec!["Jan".into()]);
    for (name, value) in [("a", Some(1.0)), ("b", None), ("c", Some(2.0))] {
        group.push(SeriesDef::new(
            TimeSeries::new(name, vec![value]),
            AxisId::Primary,
            SeriesRole::Actual,
        ));
    }
    let kept = group.validate().unwrap().retain_meaningful();
    let names: Vec<&str> = kept.series().iter().map(|d| d.series.name.as_str()).collect();
    assert_eq!(names, ["a", "c"]);
}

#[test]
fn viewport_boundary_is_inclusive() {
    assert_eq!(ViewportClass::classify(576), ViewportClass::Mobile);
    assert_eq!(ViewportClass::classify(577), ViewportClass::Desktop);
    assert_eq!(ViewportClass::classify(0), ViewportClass::Mobile);
    assert_eq!(LayoutParams::for_viewport(ViewportClass::Mobile), LayoutParams::MOBILE);
    assert_eq!(LayoutParams::for_viewport(ViewportClass::Desktop), LayoutParams::DESKTOP);
}

#[test]
fn resolved_spec_uses_front_end_field_names() {
    let spec = ChartSpec::goal_trend(sample_group().validate().unwrap());
    let value = serde_json::to_value(&spec).unwrap();

    assert_eq!(value["type"], "line");
    assert_eq!(value["options"]["maintainAspectRatio"], false);
    assert_eq!(value["options"]["interaction"]["mode"], "index");
    assert_eq!(value["options"]["scales"]["y2"]["grid"]["drawOnChartArea"], false);
    assert_eq!(value["options"]["elements"]["point"]["hitRadius"], 8);

    let target = &value["data"]["datasets"][1];
    assert_eq!(target["borderDash"], serde_json::json!([6, 6]));
    assert_eq!(target["pointRadius"], 0);
    assert_eq!(target["spanGaps"], true);
    assert_eq!(target["yAxisID"], "y2");
    // A gap is serialized as null, never zero.
    assert_eq!(value["data"]["datasets"][0]["data"][1], serde_json::Value::Null);
}
