use dioxus::prelude::*;

use crate::components::{use_language, AppSidebar, GeoLoader};
use crate::core::timing;
use crate::dashboard::DashboardServices;
use crate::t;

/// Sidebar + content frame. Shows a full-screen loader for the configured
/// intro delay before the first page appears.
#[component]
pub fn AppShell(children: Element) -> Element {
    let _lang = use_language();
    let services = use_context::<DashboardServices>();
    let delay_ms = services.config.intro_delay_ms;

    let mut ready = use_signal(|| delay_ms == 0);
    // Dropped with the shell, so a pending timer never touches unmounted state.
    use_future(move || async move {
        if delay_ms > 0 {
            timing::sleep_ms(delay_ms).await;
        }
        ready.set(true);
    });

    if !ready() {
        return rsx! {
            div { class: "intro-loader",
                GeoLoader { size: 150.0, label: t!("loading-label") }
            }
        };
    }

    rsx! {
        div { class: "shell",
            AppSidebar {}
            main { class: "shell__content", {children} }
        }
    }
}
