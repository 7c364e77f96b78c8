use dioxus::prelude::*;

use crate::{
    components::use_language,
    core::{
        dataset::RegionRecord,
        format::{format_count, format_rate, or_na},
    },
    t,
};

/// Splits records at the midpoint (first half gets the extra row).
pub(crate) fn split_halves(records: &[RegionRecord]) -> (&[RegionRecord], &[RegionRecord]) {
    records.split_at(records.len().div_ceil(2))
}

#[component]
pub fn VaccinationTable(records: Vec<RegionRecord>) -> Element {
    let _lang = use_language();
    if records.is_empty() {
        return rsx! {
            p { class: "data-table__empty", {t!("table-empty")} }
        };
    }

    let (overview, additional) = split_halves(&records);
    let overview_rows: Vec<(String, String, String, String)> = overview
        .iter()
        .map(|r| {
            (
                r.name.clone(),
                format_count(r.vaccinated),
                format_count(r.population),
                format_rate(r.rate),
            )
        })
        .collect();
    let additional_rows: Vec<(String, String, String, String)> = additional
        .iter()
        .map(|r| {
            (
                r.name.clone(),
                or_na(r.top_vaccine.as_deref()),
                or_na(r.last_updated.as_deref()),
                or_na(r.region.as_deref()),
            )
        })
        .collect();

    rsx! {
        div { class: "data-table",
            div { class: "data-table__panel",
                h2 { {t!("table-overview-title")} }
                table {
                    thead {
                        tr {
                            th { {t!("table-state")} }
                            th { {t!("table-vaccinated")} }
                            th { {t!("table-population")} }
                            th { {t!("table-rate")} }
                        }
                    }
                    tbody {
                        for (idx, (name, vaccinated, population, rate)) in overview_rows.into_iter().enumerate() {
                            tr { key: "{idx}",
                                td { "{name}" }
                                td { "{vaccinated}" }
                                td { "{population}" }
                                td { "{rate}" }
                            }
                        }
                    }
                }
            }

            div { class: "data-table__panel",
                h2 { {t!("table-additional-title")} }
                table {
                    thead {
                        tr {
                            th { {t!("table-state")} }
                            th { {t!("table-top-vaccine")} }
                            th { {t!("table-last-updated")} }
                            th { {t!("table-region")} }
                        }
                    }
                    tbody {
                        for (idx, (name, vaccine, updated, region)) in additional_rows.into_iter().enumerate() {
                            tr { key: "{idx}",
                                td { "{name}" }
                                td { "{vaccine}" }
                                td { "{updated}" }
                                td { "{region}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<RegionRecord> {
        (0..n)
            .map(|i| RegionRecord::from_counts(format!("R{i}"), 1, 2))
            .collect()
    }

    #[test]
    fn odd_lengths_favor_first_half() {
        let recs = records(5);
        let (a, b) = split_halves(&recs);
        assert_eq!((a.len(), b.len()), (3, 2));
        assert_eq!(b[0].name, "R3");
    }

    #[test]
    fn single_record_has_empty_second_half() {
        let recs = records(1);
        let (a, b) = split_halves(&recs);
        assert_eq!((a.len(), b.len()), (1, 0));
    }
}
