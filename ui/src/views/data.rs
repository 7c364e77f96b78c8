use dioxus::prelude::*;

use crate::components::use_language;
use crate::dashboard::{DashboardServices, VaccinationTable};

#[component]
pub fn VaccinationData() -> Element {
    let lang = use_language();

    let services = use_context::<DashboardServices>();
    let records = services.dataset.records().to_vec();

    rsx! {
        section { class: "page page-data", lang: "{lang}",
            h1 { {crate::t!("page-data-title")} }
            p { {crate::t!("page-data-intro")} }
            VaccinationTable { records }
        }
    }
}
