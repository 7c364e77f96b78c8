use crate::components::use_language;
use crate::i18n::{self};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

// Sidebar stylesheet (inlined as well for release native builds)
const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");
const SIDEBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/sidebar.css"
));

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements so `ui` never needs to know each platform's `Route` enum.
///
/// Each function receives the localized label and returns a link that
/// already contains it:
/// ```ignore
/// register_nav(NavBuilder {
///     dashboard: |label| rsx!( Link { class: "sidebar__link", to: Route::Dashboard {}, "{label}" } ),
///     data: |label| rsx!( Link { class: "sidebar__link", to: Route::VaccinationData {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder the sidebar renders whatever `children` it was
/// given.
pub struct NavBuilder {
    pub dashboard: fn(label: &str) -> Element,
    pub data: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Collapsible sidebar: narrow by default, expanded while hovered.
#[component]
pub fn AppSidebar(children: Element) -> Element {
    i18n::init();

    let _lang = use_language();
    let mut open = use_signal(|| false);
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Global language code signal, when the platform provides one.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => tracing::warn!(%err, "language switch failed"),
        }
    };

    let internal_nav: Option<Element> = NAV_BUILDER.get().map(|b| {
        let dashboard = (b.dashboard)(&t!("nav-dashboard"));
        let data = (b.data)(&t!("nav-data"));

        rsx! {
            nav { class: "sidebar__links",
                {dashboard}
                {data}
            }
        }
    });

    let is_open = open();
    let sidebar_class = if is_open {
        "sidebar sidebar--open"
    } else {
        "sidebar"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SIDEBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{SIDEBAR_CSS_INLINE}" }
        }

        aside {
            id: "sidebar",
            class: sidebar_class,
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),

            div { class: "sidebar__brand",
                span { class: "sidebar__brand-mark", {t!("brand-short")} }
                if is_open {
                    span { class: "sidebar__brand-name", {t!("brand-full")} }
                }
            }

            if let Some(nav) = internal_nav {
                {nav}
            } else {
                nav { class: "sidebar__links", {children} }
            }

            if show_switcher && is_open {
                div { class: "sidebar__locale",
                    label {
                        class: "visually-hidden",
                        r#for: "locale-select",
                        {t!("nav-language-label")}
                    }
                    select {
                        id: "locale-select",
                        value: "{current_lang()}",
                        oninput: on_change,
                        { langs().iter().map(|code| {
                            let c = code.clone();
                            rsx!{
                                option { key: "{c}", value: "{c}", "{c}" }
                            }
                        })}
                    }
                }
            }

            p { class: "sidebar__tagline", title: t!("tagline"), {t!("tagline")} }
        }
    }
}
