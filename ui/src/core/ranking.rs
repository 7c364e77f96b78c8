//! Top-N selection and the focused-view projection feeding the ranked bars.

use serde::Serialize;

use super::dataset::RegionRecord;
use super::hover::{Focus, HoverState};

/// One row of the ranked-bar view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBar {
    pub name: String,
    /// Normalized rate, or `None` for a hovered shape with no matching record.
    pub rate: Option<f64>,
    /// Bar length as a share of the dataset-wide maximum rate, `0..=100`.
    pub percent: f64,
}

impl RankedBar {
    fn scaled(record: &RegionRecord, domain_max: f64) -> Self {
        Self {
            name: record.name.clone(),
            rate: Some(record.rate),
            percent: scale(record.rate, domain_max),
        }
    }

    fn unknown(name: &str) -> Self {
        Self {
            name: name.to_string(),
            rate: None,
            percent: 0.0,
        }
    }
}

/// The `n` records with the highest rate, descending. Ties keep input order.
pub fn top_n(records: &[RegionRecord], n: usize) -> Vec<RegionRecord> {
    let mut ranked: Vec<&RegionRecord> = records.iter().collect();
    // `sort_by` is stable; `total_cmp` keeps NaN-free rates well ordered.
    ranked.sort_by(|a, b| b.rate.total_cmp(&a.rate));
    ranked.into_iter().take(n).cloned().collect()
}

/// Bars to show for the current hover state.
///
/// `domain_max` is the highest rate across the whole dataset, so a focused
/// region outside the ranking is scaled like every other bar.
pub fn project(ranking: &[RegionRecord], hover: &HoverState, domain_max: f64) -> Vec<RankedBar> {
    match hover {
        HoverState::Focused(Focus::Known(record)) => vec![RankedBar::scaled(record, domain_max)],
        HoverState::Focused(Focus::Unknown { name }) => vec![RankedBar::unknown(name)],
        HoverState::Idle => ranking
            .iter()
            .map(|record| RankedBar::scaled(record, domain_max))
            .collect(),
    }
}

fn scale(rate: f64, domain_max: f64) -> f64 {
    if domain_max > 0.0 && domain_max.is_finite() {
        (rate / domain_max * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, rate: f64) -> RegionRecord {
        RegionRecord::from_counts(name, 0, 100).with_rate(rate)
    }

    fn names(records: &[RegionRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn selects_highest_rates_descending() {
        let records = vec![rec("A", 40.0), rec("B", 90.0), rec("C", 65.0), rec("D", 10.0)];
        assert_eq!(names(&top_n(&records, 2)), vec!["B", "C"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![rec("first", 50.0), rec("top", 70.0), rec("second", 50.0)];
        assert_eq!(names(&top_n(&records, 3)), vec!["top", "first", "second"]);
    }

    #[test]
    fn short_input_returns_everything() {
        let records = vec![rec("A", 1.0)];
        assert_eq!(top_n(&records, 4).len(), 1);
        assert!(top_n(&[], 4).is_empty());
        assert!(top_n(&records, 0).is_empty());
    }

    #[test]
    fn input_is_untouched() {
        let records = vec![rec("A", 1.0), rec("B", 2.0)];
        let before = records.clone();
        let _ = top_n(&records, 1);
        assert_eq!(records, before);
    }

    #[test]
    fn focused_region_outside_ranking_uses_dataset_max() {
        let records = vec![rec("A", 80.0), rec("B", 60.0), rec("C", 20.0)];
        let ranking = top_n(&records, 2);
        let hover = HoverState::Focused(Focus::Known(records[2].clone()));

        let bars = project(&ranking, &hover, 80.0);
        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].name, "C");
        assert_eq!(bars[0].percent, 25.0);
    }

    #[test]
    fn idle_projects_whole_ranking() {
        let records = vec![rec("A", 80.0), rec("B", 40.0)];
        let bars = project(&records, &HoverState::Idle, 80.0);
        let percents: Vec<f64> = bars.iter().map(|b| b.percent).collect();
        assert_eq!(percents, vec![100.0, 50.0]);
    }

    #[test]
    fn unknown_focus_has_no_rate() {
        let hover = HoverState::Focused(Focus::Unknown {
            name: "Nowhere".into(),
        });
        let bars = project(&[rec("A", 80.0)], &hover, 80.0);
        assert_eq!(bars, vec![RankedBar::unknown("Nowhere")]);
    }

    #[test]
    fn zero_domain_does_not_divide() {
        let bars = project(&[rec("A", 0.0)], &HoverState::Idle, 0.0);
        assert_eq!(bars[0].percent, 0.0);
    }
}
