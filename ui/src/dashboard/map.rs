use dioxus::prelude::*;

use crate::{
    components::{use_language, Spinner},
    core::{
        format::{format_count, format_rate, or_na},
        geo::{GeoCollection, GeoError, ShapePath},
        hover::Focus,
        pipeline::DashboardModel,
    },
    dashboard::DashboardServices,
    t,
};

const VIEW_W: f64 = 600.0;
const VIEW_H: f64 = 680.0;
const VIEW_PAD: f64 = 12.0;

/// Choropleth of vaccinated counts. The only writer of the hover focus.
#[component]
pub fn ChoroplethMap(model: Signal<DashboardModel>) -> Element {
    let _lang = use_language();
    let services = use_context::<DashboardServices>();
    let source = services.geo.clone();
    let config = services.config.clone();

    let mut boundaries = use_resource(move || {
        let source = source.clone();
        async move {
            let result: Result<GeoCollection, GeoError> = source.fetch().await;
            match &result {
                Ok(geo) => tracing::info!(shapes = geo.shapes.len(), "geography loaded"),
                Err(err) => tracing::warn!(%err, "geography failed to load"),
            }
            result
        }
    });

    let tooltip_pos = use_signal(|| (0.0_f64, 0.0_f64));

    let body = match &*boundaries.read_unchecked() {
        None => rsx! {
            div { class: "map-card__state",
                Spinner {}
                span { class: "visually-hidden", {t!("map-loading")} }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "map-card__state map-card__state--error",
                p { {t!("map-error")} }
                p { class: "map-card__detail", "{err}" }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| boundaries.restart(),
                    {t!("map-retry")}
                }
            }
        },
        Some(Ok(geo)) => {
            let paths = geo.fit_paths(VIEW_W, VIEW_H, VIEW_PAD);
            let snapshot = model.read();
            let scale = snapshot.color_scale(&config);
            let shapes: Vec<(ShapePath, String)> = paths
                .into_iter()
                .map(|path| {
                    let fill = snapshot.fill_for(&path.name, &scale);
                    (path, fill)
                })
                .collect();
            drop(snapshot);

            rsx! {
                svg {
                    class: "map-card__svg",
                    view_box: "0 0 {VIEW_W} {VIEW_H}",
                    for (path, fill) in shapes {
                        {render_shape(path, fill, model, tooltip_pos)}
                    }
                }
                {render_tooltip(model, tooltip_pos)}
            }
        }
    };

    rsx! {
        section { class: "map-card",
            h2 { class: "map-card__title", {t!("map-title")} }
            div { class: "map-card__body", {body} }
        }
    }
}

fn render_shape(
    path: ShapePath,
    fill: String,
    mut model: Signal<DashboardModel>,
    mut tooltip_pos: Signal<(f64, f64)>,
) -> Element {
    let ShapePath { name, d } = path;
    let key = name.clone();

    rsx! {
        path {
            key: "{key}",
            class: "map-card__shape",
            d: "{d}",
            fill: "{fill}",
            stroke: "#000",
            stroke_width: "0.6",
            onmouseenter: move |evt: MouseEvent| {
                let p = evt.client_coordinates();
                tooltip_pos.set((p.x, p.y));
                model.write().hover_enter(&name);
            },
            onmousemove: move |evt: MouseEvent| {
                let p = evt.client_coordinates();
                tooltip_pos.set((p.x, p.y));
            },
            onmouseleave: move |_| model.write().hover_leave(),
        }
    }
}

fn render_tooltip(model: Signal<DashboardModel>, tooltip_pos: Signal<(f64, f64)>) -> Element {
    let snapshot = model.read();
    let Some(focus) = snapshot.focus() else {
        return rsx! {};
    };

    let (name, vaccinated, rate, top_vaccine, region) = match focus {
        Focus::Known(record) => (
            record.name.clone(),
            format_count(record.vaccinated),
            format_rate(record.rate),
            or_na(record.top_vaccine.as_deref()),
            or_na(record.region.as_deref()),
        ),
        Focus::Unknown { name } => (
            name.clone(),
            t!("focus-no-data"),
            or_na(None),
            or_na(None),
            or_na(None),
        ),
    };
    let (x, y) = tooltip_pos();
    let style = format!("top:{:.0}px;left:{:.0}px", y + 10.0, x + 10.0);

    rsx! {
        div { class: "map-tooltip", style: "{style}",
            strong { "{name}" }
            dl {
                dt { {t!("tooltip-vaccinated")} }
                dd { "{vaccinated}" }
                dt { {t!("tooltip-rate")} }
                dd { "{rate}" }
                dt { {t!("tooltip-top-vaccine")} }
                dd { "{top_vaccine}" }
                dt { {t!("tooltip-region")} }
                dd { "{region}" }
            }
        }
    }
}
