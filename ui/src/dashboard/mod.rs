mod map;
pub use map::ChoroplethMap;

mod ranked;
pub use ranked::RangeBars;

mod charts;
pub use charts::{CoverageBarChart, VaccineDoughnut};

mod table;
pub use table::VaccinationTable;

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{
    config::DashboardConfig,
    dataset::Dataset,
    geo::{EmbeddedGeoSource, GeoSource, HttpGeoSource},
    loader::{ChartData, SharedChartSource, SimulatedChartSource},
};

/// Boundary file served alongside the web bundle.
pub const INDIA_GEOJSON: Asset = asset!("/assets/geo/india-states.geojson");
/// The same boundaries compiled in, for builds without an HTTP origin.
pub const INDIA_GEOJSON_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/geo/india-states.geojson"
));

/// Everything the dashboard views read but never mutate. Built once by the
/// platform crate and provided through context.
#[derive(Clone)]
pub struct DashboardServices {
    pub config: Rc<DashboardConfig>,
    pub dataset: Rc<Dataset>,
    pub geo: Rc<dyn GeoSource>,
    pub coverage: SharedChartSource,
    pub distribution: SharedChartSource,
}

impl DashboardServices {
    pub fn new(config: DashboardConfig, dataset: Dataset, geo: Rc<dyn GeoSource>) -> Self {
        let delay = config.chart_delay_ms;
        Self {
            coverage: Rc::new(SimulatedChartSource::new(ChartData::state_coverage(), delay)),
            distribution: Rc::new(SimulatedChartSource::new(
                ChartData::vaccine_distribution(),
                delay,
            )),
            config: Rc::new(config),
            dataset: Rc::new(dataset),
            geo,
        }
    }

    /// Boundaries fetched from `config.geo_url`.
    pub fn over_http(config: DashboardConfig) -> Self {
        let geo = Rc::new(HttpGeoSource::new(config.geo_url.clone()));
        Self::new(config, Dataset::embedded(), geo)
    }

    /// Boundaries compiled into the binary.
    pub fn embedded(config: DashboardConfig) -> Self {
        let geo = Rc::new(EmbeddedGeoSource::new(INDIA_GEOJSON_INLINE));
        Self::new(config, Dataset::embedded(), geo)
    }
}
