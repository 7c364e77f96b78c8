//! Shared UI crate for Vaxatlas. The derived-metrics pipeline, views and
//! components live here; platform crates only add routing and a launcher.

use dioxus::prelude::*;

pub mod core;
pub mod dashboard;
pub mod i18n;
pub mod views;

pub mod components {
    // Collapsible, localized sidebar (components/app_sidebar.rs)
    pub mod app_sidebar;
    pub use app_sidebar::register_nav;
    pub use app_sidebar::AppSidebar;
    pub use app_sidebar::NavBuilder;

    mod language;
    pub use language::use_language;

    mod app_shell;
    pub use app_shell::AppShell;

    mod spinner;
    pub use spinner::{GeoLoader, Spinner};
}

/// Shared theme stylesheet (web loads it as an asset, desktop inlines it).
pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");
