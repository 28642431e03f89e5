//! Plain-text rendering of the active dashboard view
//!
//! Stateless consumers of the derived collections; nothing here computes,
//! only formats.

use aq_core::{format_parsed, ActiveView, AqiBand, SeriesKind};
use aq_view::DashboardState;
use std::fmt::Write;

fn view_title(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Prediction => "Air Quality Prediction",
        ActiveView::Components => "Pollution Component Analysis",
        ActiveView::Monthly => "Monthly AQI Trends",
        ActiveView::Patterns => "Daily AQI Patterns",
        ActiveView::Health => "Health Risk Assessment",
        ActiveView::Heatmap => "AQI Heatmap Visualization",
        ActiveView::Correlations => "Pollutant Correlations",
    }
}

fn opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}

/// Render the state's active view as a text block.
pub fn render(state: &DashboardState) -> String {
    let mut out = String::new();
    let selection = &state.selection;

    let _ = writeln!(out, "=== {} ===", view_title(selection.view));
    let _ = writeln!(out, "City: {}  Month: {}", selection.city, selection.month);

    if let Some(error) = &state.error {
        let _ = writeln!(out, "! {error}");
    }
    if state.loading {
        let _ = writeln!(out, "(loading...)");
    }
    let _ = writeln!(out);

    match selection.view {
        ActiveView::Prediction => render_prediction(state, &mut out),
        ActiveView::Components => render_components(state, &mut out),
        ActiveView::Monthly => render_monthly(state, &mut out),
        ActiveView::Patterns => render_patterns(state, &mut out),
        ActiveView::Health => render_health(state, &mut out),
        ActiveView::Heatmap => render_heatmap(state, &mut out),
        ActiveView::Correlations => render_correlations(state, &mut out),
    }

    out
}

fn render_prediction(state: &DashboardState, out: &mut String) {
    let metrics = &state.metrics;
    let _ = writeln!(
        out,
        "Average AQI: {:.1} ({})",
        metrics.average_aqi,
        AqiBand::from_aqi(metrics.average_aqi).label()
    );
    let _ = writeln!(out, "Primary pollutant: {}", metrics.primary_pollutant);
    let _ = writeln!(out, "Trend: {}", metrics.trend);
    let _ = writeln!(out, "Days analyzed: {}", state.derived.unique_days);
    let _ = writeln!(out);

    let _ = writeln!(out, "{:<14} {:>6}  {}", "Date", "AQI", "Series");
    for point in &state.derived.chart_series {
        let series = match point.kind {
            SeriesKind::Historical => "observed",
            SeriesKind::Prediction => "forecast",
        };
        let _ = writeln!(
            out,
            "{:<14} {:>6.2}  {}",
            format_parsed(point.datetime),
            point.aqi,
            series
        );
    }
}

fn render_components(state: &DashboardState, out: &mut String) {
    let _ = writeln!(out, "{:<10} {:>10}", "Pollutant", "Avg ug/m3");
    for pollutant in &state.pollutants {
        let _ = writeln!(out, "{:<10} {:>10.2}", pollutant.name, pollutant.value);
    }
}

fn render_monthly(state: &DashboardState, out: &mut String) {
    let _ = writeln!(out, "{:<6} {:>8}", "Month", "Avg AQI");
    for average in &state.derived.monthly_averages {
        let _ = writeln!(out, "{:<6} {:>8.2}", average.month, average.aqi);
    }
}

fn render_patterns(state: &DashboardState, out: &mut String) {
    let _ = writeln!(out, "{:<6} {:>8}", "Hour", "Avg AQI");
    for pattern in &state.derived.hourly_patterns {
        let _ = writeln!(out, "{:<6} {:>8.2}", pattern.hour, pattern.aqi);
    }
}

fn render_health(state: &DashboardState, out: &mut String) {
    let risk = &state.health_risk;
    let _ = writeln!(out, "Level: {} [{}]", risk.level, risk.css_class);
    let _ = writeln!(out, "{}", risk.description);
}

fn render_heatmap(state: &DashboardState, out: &mut String) {
    if state.heatmap.is_empty() {
        let _ = writeln!(out, "(no heatmap data)");
        return;
    }
    let _ = writeln!(
        out,
        "{:<20} {:>9} {:>9} {:>8} {:>7}",
        "City", "Lat", "Lon", "Avg AQI", "Points"
    );
    for point in &state.heatmap {
        let _ = writeln!(
            out,
            "{:<20} {:>9.4} {:>9.4} {:>8.2} {:>7}",
            point.city_name, point.lat, point.lon, point.avg_aqi, point.data_points
        );
    }
}

fn render_correlations(state: &DashboardState, out: &mut String) {
    let _ = writeln!(
        out,
        "{:<14} {:>8} {:>8} {:>8} {:>6}",
        "Date", "PM2.5", "PM10", "O3", "AQI"
    );
    for point in &state.derived.correlation {
        let _ = writeln!(
            out,
            "{:<14} {:>8} {:>8} {:>8} {:>6.2}",
            point.display_date,
            opt(point.pm25),
            opt(point.pm10),
            opt(point.o3),
            point.aqi
        );
    }
}
