use dioxus::prelude::*;

use crate::components::use_language;
use crate::core::pipeline::DashboardModel;
use crate::dashboard::{
    ChoroplethMap, CoverageBarChart, DashboardServices, RangeBars, VaccineDoughnut,
};

#[component]
pub fn Dashboard() -> Element {
    let lang = use_language();
    let services = use_context::<DashboardServices>();
    // Owned pipeline state; the map writes hover focus, everything else reads.
    let model = use_signal(|| {
        DashboardModel::new(services.dataset.clone(), services.config.top_n)
    });

    rsx! {
        section { class: "page page-dashboard", lang: "{lang}",
            div { class: "page-dashboard__main",
                RangeBars { model }
                div { class: "page-dashboard__charts",
                    CoverageBarChart {}
                    VaccineDoughnut {}
                }
            }
            div { class: "page-dashboard__map",
                ChoroplethMap { model }
            }
        }
    }
}
