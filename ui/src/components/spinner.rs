use dioxus::prelude::*;

/// Small ring spinner used inside cards while data loads.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner", role: "status" }
        }
    }
}

/// Rotating ring of pulsing dots shown while the whole dashboard warms up.
#[component]
pub fn GeoLoader(#[props(default = 120.0)] size: f64, label: Option<String>) -> Element {
    let radius = size / 2.0 - 10.0;
    let dots: Vec<(usize, String)> = (0..12)
        .map(|i| {
            let angle = (i as f64 * 30.0).to_radians();
            let (x, y) = (radius * angle.cos(), radius * angle.sin());
            let style = format!(
                "transform:translate({x:.1}px, {y:.1}px);animation-delay:{}ms",
                i * 100
            );
            (i, style)
        })
        .collect();
    let frame = format!("width:{size}px;height:{size}px");

    rsx! {
        div {
            class: "geo-loader",
            style: frame,
            role: "status",
            aria_label: label.unwrap_or_default(),
            for (i, style) in dots {
                span { key: "{i}", class: "geo-loader__dot", style: "{style}" }
            }
        }
    }
}
