#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::{register_nav, AppShell, NavBuilder};
use ui::core::config::DashboardConfig;
use ui::dashboard::DashboardServices;
use ui::views::{Dashboard, VaccinationData};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopShell)]
    #[route("/")]
    Dashboard {},
    #[route("/data")]
    VaccinationData {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme from ui/assets/theme/main.css, embedded so desktop needs no /assets copy.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Vaxatlas – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", to: Route::Dashboard {}, "{label}" })
}
fn nav_data(label: &str) -> Element {
    rsx!(Link { class: "sidebar__link", to: Route::VaccinationData {}, "{label}" })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global language code; the sidebar updates it on locale change.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // No HTTP origin on desktop, so boundaries come from the binary.
    use_context_provider(|| {
        tracing::info!("starting desktop dashboard with embedded boundaries");
        DashboardServices::embedded(DashboardConfig::default())
    });

    register_nav(NavBuilder {
        dashboard: nav_dashboard,
        data: nav_data,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        // Components subscribe to `lang_code` themselves; the router is never
        // remounted, so the intro loader and hover state survive a switch.
        Router::<Route> { }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../ui/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Desktop layout wrapping every route in the shared `AppShell`.
#[component]
fn DesktopShell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}
