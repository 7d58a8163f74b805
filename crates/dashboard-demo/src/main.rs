// File: crates/dashboard-demo/src/main.rs
// Summary: Demo feeds sample page payloads through both adapters and prints the resolved specs.

use anyhow::{Context, Result};
use chart_spec::adapter::keys;
use chart_spec::{render_goal_trend, render_monthly_trend, MemoryTarget, Outcome, RenderTarget};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    // Viewport width from CLI, desktop by default.
    let viewport_width: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().context("viewport width must be an integer"))
        .transpose()?
        .unwrap_or(1280);

    // 1) Goal trend: six weeks of hours/lessons with one missing week.
    let mut goal = MemoryTarget::new()
        .with_payload(
            keys::GOAL_LABELS,
            r#"["2025-05-05","2025-05-12","2025-05-19","2025-05-26","2025-06-02","2025-06-09"]"#,
        )
        .with_payload(keys::GOAL_HOURS_COMPLETED, "[4.5, 6.0, null, 5.25, 7.0, 6.5]")
        .with_payload(keys::GOAL_HOURS_TARGET, "[6, 6, 6, 6, 6, 6]")
        .with_payload(keys::GOAL_LESSONS_COMPLETED, "[2, 3, null, 2, 4, 3]")
        .with_payload(keys::GOAL_LESSONS_TARGET, "[3, 3, 3, 3, 3, 3]");

    let outcome = render_goal_trend(Some(&mut goal as &mut dyn RenderTarget));
    println!("goal trend: {outcome:?}");
    print_spec(&goal)?;

    // 2) Monthly trend: two goals across twelve months.
    let mut monthly = MemoryTarget::new()
        .with_payload(
            keys::MONTHLY_LABELS,
            r#"["Jan","Feb","Mar","Apr","May","Jun","Jul","Aug","Sep","Oct","Nov","Dec"]"#,
        )
        .with_payload(
            keys::MONTHLY_DATASETS,
            r#"[
              {"label": "Rust in practice", "data": [8, 10, 9, 12, 7, 11, 10, 9, 13, 12, 8, 10],
               "borderColor": "hsl(210, 70%, 55%)", "backgroundColor": "hsl(210, 70%, 55%)",
               "tension": 0.4, "borderWidth": 2, "fill": false, "pointRadius": 3},
              {"label": "Linear algebra", "data": [3, 4, 5, 2, 6, 4, 3, 5, 4, 6, 5, 4],
               "borderColor": "hsl(120, 70%, 55%)", "backgroundColor": "hsl(120, 70%, 55%)",
               "tension": 0.4, "borderWidth": 2, "fill": false, "pointRadius": 3}
            ]"#,
        );

    let outcome = render_monthly_trend(Some(&mut monthly as &mut dyn RenderTarget), viewport_width);
    println!("monthly trend ({viewport_width}px): {outcome:?}");
    print_spec(&monthly)?;

    // 3) A page without the chart elements degrades to a clean skip.
    let outcome = render_goal_trend(None);
    assert_eq!(outcome, Outcome::Skipped);
    println!("page without charts: {outcome:?}");

    Ok(())
}

fn print_spec(target: &MemoryTarget) -> Result<()> {
    let spec = target
        .rendered()
        .context("adapter reported success but handed no spec to the engine")?;
    let json = serde_json::to_string_pretty(spec).context("serialize resolved spec")?;
    println!("{json}");
    if let Some(px) = target.min_height() {
        println!("container min-height: {px}px");
    }
    Ok(())
}
