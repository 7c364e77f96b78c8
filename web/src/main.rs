use dioxus::prelude::*;

use ui::components::{register_nav, AppShell, NavBuilder};
use ui::core::config::DashboardConfig;
use ui::dashboard::{DashboardServices, INDIA_GEOJSON};
use ui::views::{Dashboard, VaccinationData};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebShell)]
    #[route("/")]
    Dashboard {},
    #[route("/data")]
    VaccinationData {},
}

fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_data(label: &str) -> Element {
    rsx!(Link {
        class: "sidebar__link",
        to: Route::VaccinationData {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        register_nav(NavBuilder {
            dashboard: nav_dashboard,
            data: nav_data,
        });
    }

    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // Boundaries are served next to the bundle and fetched at runtime.
    use_context_provider(|| {
        let config = DashboardConfig::default().with_geo_url(INDIA_GEOJSON.to_string());
        tracing::info!(geo_url = %config.geo_url, "starting web dashboard");
        DashboardServices::over_http(config)
    });

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        Router::<Route> {}
    }
}

/// Web layout wrapping every route in the shared `AppShell`.
#[component]
fn WebShell() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}
