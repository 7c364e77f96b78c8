//! The derived-metrics pipeline as one owned value.
//!
//! `DashboardModel` holds the dataset, the memoized ranking and the current
//! hover focus. The map writes hover events into it; the ranked bars, headline
//! and tooltip read their inputs from it.

use std::rc::Rc;

use super::color::ColorScale;
use super::config::DashboardConfig;
use super::dataset::{Dataset, RegionRecord};
use super::geo::join;
use super::hover::{Focus, HoverState};
use super::ranking::{project, top_n, RankedBar};

/// Fill for shapes without a dataset record.
pub const NEUTRAL_FILL: &str = "#eee";

/// What the ranked-bar header should say.
#[derive(Debug, Clone, PartialEq)]
pub enum Headline {
    Welcome,
    Focused { name: String, rate: Option<f64> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    dataset: Rc<Dataset>,
    ranking: Vec<RegionRecord>,
    max_rate: f64,
    hover: HoverState,
}

impl DashboardModel {
    pub fn new(dataset: Rc<Dataset>, top: usize) -> Self {
        let ranking = top_n(dataset.records(), top);
        let max_rate = dataset.max_rate();
        Self {
            dataset,
            ranking,
            max_rate,
            hover: HoverState::Idle,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn ranking(&self) -> &[RegionRecord] {
        &self.ranking
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn hover_enter(&mut self, shape_name: &str) {
        self.hover.enter(shape_name, self.dataset.records());
    }

    pub fn hover_leave(&mut self) {
        self.hover.leave();
    }

    pub fn ranked_bars(&self) -> Vec<RankedBar> {
        project(&self.ranking, &self.hover, self.max_rate)
    }

    pub fn headline(&self) -> Headline {
        match self.hover.focus() {
            None => Headline::Welcome,
            Some(focus) => Headline::Focused {
                name: focus.name().to_string(),
                rate: focus.record().map(|r| r.rate),
            },
        }
    }

    pub fn focus(&self) -> Option<&Focus> {
        self.hover.focus()
    }

    /// Choropleth scale over `[0, max vaccinated]`.
    pub fn color_scale(&self, config: &DashboardConfig) -> ColorScale {
        config.color_scale_or_default(self.dataset.max_vaccinated() as f64)
    }

    pub fn fill_for(&self, shape_name: &str, scale: &ColorScale) -> String {
        match join(shape_name, self.dataset.records()) {
            Some(record) => scale.css_at(record.vaccinated as f64),
            None => NEUTRAL_FILL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> DashboardModel {
        let dataset = Dataset::new(vec![
            RegionRecord::from_counts("A", 80, 100).with_rate("80%"),
            RegionRecord::from_counts("B", 20, 100).with_rate("20%"),
        ]);
        DashboardModel::new(Rc::new(dataset), 1)
    }

    #[test]
    fn headline_follows_hover() {
        let mut model = model();
        assert_eq!(model.headline(), Headline::Welcome);

        model.hover_enter("b");
        assert_eq!(
            model.headline(),
            Headline::Focused {
                name: "B".into(),
                rate: Some(20.0)
            }
        );

        model.hover_enter("Atlantis");
        assert_eq!(
            model.headline(),
            Headline::Focused {
                name: "Atlantis".into(),
                rate: None
            }
        );
    }

    #[test]
    fn fills_use_vaccinated_domain() {
        let model = model();
        let scale = model.color_scale(&DashboardConfig::default());
        assert_eq!(model.fill_for("A", &scale), "#034a21");
        assert_eq!(model.fill_for("Nowhere", &scale), NEUTRAL_FILL);
    }

    #[test]
    fn empty_dataset_never_divides() {
        let model = DashboardModel::new(Rc::new(Dataset::default()), 4);
        assert!(model.ranked_bars().is_empty());
        let scale = model.color_scale(&DashboardConfig::default());
        assert_eq!(scale.css_at(10.0), "#d0f1c9");
    }
}
