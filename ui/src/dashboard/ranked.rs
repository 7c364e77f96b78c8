use dioxus::prelude::*;

use crate::{
    components::use_language,
    core::{
        format::format_rate,
        pipeline::{DashboardModel, Headline},
        ranking::RankedBar,
    },
    dashboard::DashboardServices,
    t,
};

/// Ranked coverage bars: the top states while idle, the hovered state otherwise.
#[component]
pub fn RangeBars(model: Signal<DashboardModel>) -> Element {
    let _lang = use_language();
    let services = use_context::<DashboardServices>();
    let config = services.config.clone();

    // Bars start collapsed and grow once mounted.
    let mut grown = use_signal(|| false);
    use_effect(move || grown.set(true));

    let snapshot = model.read();
    let (title, subtitle) = match snapshot.headline() {
        Headline::Welcome => (t!("welcome-title"), t!("welcome-subtitle")),
        Headline::Focused { name, rate } => {
            let rate_label = rate.map(format_rate).unwrap_or_else(|| t!("focus-no-data"));
            (
                t!("focus-title", name = name),
                t!("focus-subtitle", rate = rate_label),
            )
        }
    };
    let bars = snapshot.ranked_bars();
    drop(snapshot);

    let is_grown = grown();
    let rows: Vec<BarRow> = bars
        .into_iter()
        .enumerate()
        .map(|(idx, bar)| BarRow::new(idx, bar, config.bar_color(idx), is_grown, config.bar_animation_ms))
        .collect();

    rsx! {
        section { class: "ranked",
            h1 { class: "ranked__title", "{title}" }
            p { class: "ranked__subtitle", "{subtitle}" }

            ul { class: "ranked__bars",
                for row in rows {
                    {render_row(row)}
                }
            }
        }
    }
}

struct BarRow {
    key: String,
    name: String,
    rate_label: String,
    tooltip: String,
    fill_style: String,
}

impl BarRow {
    fn new(idx: usize, bar: RankedBar, color: &str, grown: bool, animation_ms: u64) -> Self {
        let rate_label = bar
            .rate
            .map(format_rate)
            .unwrap_or_else(|| t!("focus-no-data"));
        let width = if grown { bar.percent.round() } else { 0.0 };
        Self {
            key: format!("{idx}-{}", bar.name),
            tooltip: t!("bar-vaccinated-tooltip", rate = rate_label.clone()),
            fill_style: format!(
                "width:{width}%;background-color:{color};transition-duration:{animation_ms}ms"
            ),
            name: bar.name,
            rate_label,
        }
    }
}

fn render_row(row: BarRow) -> Element {
    let BarRow {
        key,
        name,
        rate_label,
        tooltip,
        fill_style,
    } = row;

    rsx! {
        li { key: "{key}", class: "ranked__row",
            span { class: "ranked__name", "{name}" }
            div { class: "ranked__track", title: "{tooltip}",
                div { class: "ranked__fill", style: "{fill_style}" }
            }
            span { class: "ranked__value", "{rate_label}" }
        }
    }
}
