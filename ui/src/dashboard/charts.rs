use std::f64::consts::PI;
use std::fmt::Write as _;

use dioxus::prelude::*;

use crate::{
    components::{use_language, Spinner},
    core::loader::{ChartData, LoadError, SharedChartSource},
    dashboard::DashboardServices,
    t,
};

const BAR_W: f64 = 420.0;
const BAR_H: f64 = 220.0;
const BAR_AXIS_LEFT: f64 = 44.0;
const BAR_AXIS_BOTTOM: f64 = 24.0;
const BAR_TOP: f64 = 8.0;

const RING_SIZE: f64 = 200.0;
const RING_OUTER: f64 = 92.0;
const RING_INNER: f64 = 56.0;

/// State-wise coverage bars.
#[component]
pub fn CoverageBarChart() -> Element {
    let _lang = use_language();
    let services = use_context::<DashboardServices>();
    rsx! {
        ChartCard {
            title: t!("chart-coverage-title"),
            source: SourceHandle(services.coverage.clone()),
            kind: ChartKind::Bar,
        }
    }
}

/// Share of doses per vaccine.
#[component]
pub fn VaccineDoughnut() -> Element {
    let _lang = use_language();
    let services = use_context::<DashboardServices>();
    rsx! {
        ChartCard {
            title: t!("chart-distribution-title"),
            source: SourceHandle(services.distribution.clone()),
            kind: ChartKind::Doughnut,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum ChartKind {
    Bar,
    Doughnut,
}

/// Props wrapper; two handles are equal when they point at the same source.
#[derive(Clone)]
struct SourceHandle(SharedChartSource);

impl PartialEq for SourceHandle {
    fn eq(&self, other: &Self) -> bool {
        std::rc::Rc::ptr_eq(&self.0, &other.0)
    }
}

#[component]
fn ChartCard(title: String, source: SourceHandle, kind: ChartKind) -> Element {
    let _lang = use_language();
    let loader = source.0.clone();
    let mut data = use_resource(move || {
        let loader = loader.clone();
        async move {
            let result: Result<ChartData, LoadError> = loader.load().await;
            if let Err(err) = &result {
                tracing::warn!(%err, "chart load failed");
            }
            result
        }
    });

    let pending = matches!(*data.state().read(), UseResourceState::Pending);

    let body = match (&*data.read_unchecked(), pending) {
        (None, _) | (_, true) => rsx! { Spinner {} },
        (Some(Err(_)), false) => rsx! {
            p { class: "chart-card__placeholder", {t!("chart-error")} }
        },
        (Some(Ok(chart)), false) => match kind {
            ChartKind::Bar => render_bars(chart),
            ChartKind::Doughnut => render_doughnut(chart),
        },
    };

    rsx! {
        section { class: "chart-card",
            div { class: "chart-card__header",
                h3 { "{title}" }
                button {
                    r#type: "button",
                    class: "button button--ghost chart-card__refresh",
                    title: t!("chart-refresh"),
                    aria_label: t!("chart-refresh"),
                    disabled: pending,
                    onclick: move |_| data.restart(),
                    "⟳"
                }
            }
            div { class: "chart-card__body", {body} }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BarGeom {
    label: String,
    value: f64,
    color: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    label_x: f64,
}

/// Lay bars out left-to-right over the plot area, scaled to the largest value.
fn bar_layout(chart: &ChartData, width: f64, height: f64) -> Vec<BarGeom> {
    let points = chart.points();
    if points.is_empty() {
        return Vec::new();
    }
    let plot_w = width - BAR_AXIS_LEFT;
    let plot_h = height - BAR_AXIS_BOTTOM - BAR_TOP;
    let max = chart.max_value();
    let slot = plot_w / points.len() as f64;
    let bar_w = (slot * 0.6).min(30.0);

    points
        .into_iter()
        .enumerate()
        .map(|(idx, (label, value, color))| {
            let bar_h = if max > 0.0 {
                (value.max(0.0) / max) * plot_h
            } else {
                0.0
            };
            let x = BAR_AXIS_LEFT + slot * idx as f64 + (slot - bar_w) / 2.0;
            BarGeom {
                label,
                value,
                color,
                x,
                y: BAR_TOP + plot_h - bar_h,
                width: bar_w,
                height: bar_h,
                label_x: x + bar_w / 2.0,
            }
        })
        .collect()
}

fn render_bars(chart: &ChartData) -> Element {
    let bars = bar_layout(chart, BAR_W, BAR_H);
    let axis_y = BAR_H - BAR_AXIS_BOTTOM;
    let label_y = axis_y + 16.0;
    let tick_x = BAR_AXIS_LEFT - 6.0;
    let top_tick_y = BAR_TOP + 4.0;
    let mid_y = BAR_H / 2.0;
    let axis_title_transform = format!("rotate(-90 12 {mid_y})");
    let max = chart.max_value();
    let series = chart.series_label.clone();

    rsx! {
        svg { class: "chart chart--bar", view_box: "0 0 {BAR_W} {BAR_H}",
            text { class: "chart__axis-title", x: "12", y: "{mid_y}",
                transform: "{axis_title_transform}", "{series}" }
            text { class: "chart__tick", x: "{tick_x}", y: "{top_tick_y}", "{max}" }
            text { class: "chart__tick", x: "{tick_x}", y: "{axis_y}", "0" }
            line { class: "chart__axis", x1: "{BAR_AXIS_LEFT}", y1: "{axis_y}", x2: "{BAR_W}", y2: "{axis_y}" }
            for bar in bars {
                g { key: "{bar.label}",
                    rect {
                        x: "{bar.x}", y: "{bar.y}", width: "{bar.width}", height: "{bar.height}",
                        rx: "6", fill: "{bar.color}", stroke: "#ffffff", stroke_width: "2",
                    }
                    text { class: "chart__label", x: "{bar.label_x}", y: "{label_y}", "{bar.label}" }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Segment {
    label: String,
    value: f64,
    color: String,
    d: String,
}

/// Annular sectors for each positive value, clockwise from 12 o'clock.
fn doughnut_segments(chart: &ChartData, center: f64, outer: f64, inner: f64) -> Vec<Segment> {
    let total = chart.total();
    if total <= 0.0 {
        return Vec::new();
    }
    let mut start = -PI / 2.0;
    chart
        .points()
        .into_iter()
        .filter(|(_, value, _)| *value > 0.0)
        .map(|(label, value, color)| {
            // A full circle cannot be drawn as one arc; stop just short of it.
            let sweep = (value / total * 2.0 * PI).min(2.0 * PI - 1e-4);
            let end = start + sweep;
            let large = if sweep > PI { 1 } else { 0 };
            let point = |radius: f64, angle: f64| {
                (center + radius * angle.cos(), center + radius * angle.sin())
            };
            let (ox1, oy1) = point(outer, start);
            let (ox2, oy2) = point(outer, end);
            let (ix2, iy2) = point(inner, end);
            let (ix1, iy1) = point(inner, start);

            let mut d = String::new();
            let _ = write!(
                d,
                "M{ox1:.2},{oy1:.2}A{outer},{outer} 0 {large} 1 {ox2:.2},{oy2:.2}\
                 L{ix2:.2},{iy2:.2}A{inner},{inner} 0 {large} 0 {ix1:.2},{iy1:.2}Z"
            );
            start = end;
            Segment {
                label,
                value,
                color,
                d,
            }
        })
        .collect()
}

fn render_doughnut(chart: &ChartData) -> Element {
    let segments = doughnut_segments(chart, RING_SIZE / 2.0, RING_OUTER, RING_INNER);
    let legend: Vec<(String, String, f64)> = segments
        .iter()
        .map(|s| (s.label.clone(), s.color.clone(), s.value))
        .collect();

    rsx! {
        div { class: "chart chart--doughnut",
            svg { view_box: "0 0 {RING_SIZE} {RING_SIZE}",
                for segment in segments {
                    path { key: "{segment.label}", d: "{segment.d}", fill: "{segment.color}",
                        stroke: "#ffffff", stroke_width: "1",
                    }
                }
            }
            ul { class: "chart__legend",
                for (label, color, value) in legend {
                    li { key: "{label}",
                        span { class: "chart__swatch", style: "background:{color}" }
                        "{label} ({value})"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_bar_fills_plot() {
        let bars = bar_layout(&ChartData::state_coverage(), BAR_W, BAR_H);
        assert_eq!(bars.len(), 7);
        let tallest = bars.iter().find(|b| b.label == "UP").unwrap();
        assert!((tallest.y - BAR_TOP).abs() < 1e-9);
        assert!(bars.iter().all(|b| b.y + b.height <= BAR_H - BAR_AXIS_BOTTOM + 1e-9));
        assert!(bars.windows(2).all(|w| w[0].x < w[1].x));
    }

    #[test]
    fn zero_values_have_flat_bars() {
        let chart = ChartData {
            series_label: String::new(),
            labels: vec!["a".into()],
            values: vec![0.0],
            colors: vec![],
        };
        assert_eq!(bar_layout(&chart, BAR_W, BAR_H)[0].height, 0.0);
    }

    #[test]
    fn doughnut_has_one_segment_per_positive_value() {
        let mut chart = ChartData::vaccine_distribution();
        chart.values[2] = 0.0;
        let segments = doughnut_segments(&chart, 100.0, 90.0, 50.0);
        let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Covishield", "Covaxin", "Others"]);
        assert!(segments.iter().all(|s| s.d.starts_with('M') && s.d.ends_with('Z')));
        // 55% of the ring takes the long way round.
        assert!(segments[0].d.contains(" 0 1 1 "));
        assert!(segments[1].d.contains(" 0 0 1 "));
    }

    #[test]
    fn single_value_still_draws() {
        let chart = ChartData {
            series_label: String::new(),
            labels: vec!["all".into()],
            values: vec![3.0],
            colors: vec!["#000".into()],
        };
        assert_eq!(doughnut_segments(&chart, 100.0, 90.0, 50.0).len(), 1);
    }

    #[test]
    fn empty_total_draws_nothing() {
        let chart = ChartData {
            series_label: String::new(),
            labels: vec!["a".into()],
            values: vec![0.0],
            colors: vec![],
        };
        assert!(doughnut_segments(&chart, 100.0, 90.0, 50.0).is_empty());
    }
}
