//! Async data loading for the small dashboard charts.
//!
//! Views only see [`ChartSource`]; the built-in sources replay fixed figures
//! after a delay, and a real backend can be swapped in without touching them.

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::timing;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("chart data unavailable: {0}")]
    Unavailable(String),
}

/// One labelled series, ready for a bar or doughnut chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<String>,
}

impl ChartData {
    pub fn max_value(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }

    pub fn total(&self) -> f64 {
        self.values.iter().copied().filter(|v| *v > 0.0).sum()
    }

    /// `(label, value, color)` triples; colors cycle when fewer than labels.
    pub fn points(&self) -> Vec<(String, f64, String)> {
        self.labels
            .iter()
            .zip(self.values.iter())
            .enumerate()
            .map(|(idx, (label, value))| {
                let color = if self.colors.is_empty() {
                    "#6c757d".to_string()
                } else {
                    self.colors[idx % self.colors.len()].clone()
                };
                (label.clone(), *value, color)
            })
            .collect()
    }

    /// Vaccinations per state, in millions.
    pub fn state_coverage() -> Self {
        Self {
            series_label: "Vaccinations (in millions)".to_string(),
            labels: ["MH", "KA", "TN", "UP", "GJ", "WB", "KL"].map(String::from).to_vec(),
            values: vec![185.0, 162.0, 150.0, 210.0, 140.0, 130.0, 120.0],
            colors: [
                "#007bff", "#28a745", "#ffc107", "#dc3545", "#17a2b8", "#6f42c1", "#fd7e14",
            ]
            .map(String::from)
            .to_vec(),
        }
    }

    /// Share of doses per vaccine brand, in percent.
    pub fn vaccine_distribution() -> Self {
        Self {
            series_label: "Vaccine Distribution".to_string(),
            labels: ["Covishield", "Covaxin", "Sputnik", "Others"].map(String::from).to_vec(),
            values: vec![55.0, 30.0, 10.0, 5.0],
            colors: ["#007bff", "#28a745", "#ffc107", "#6c757d"].map(String::from).to_vec(),
        }
    }
}

pub trait ChartSource {
    fn load(&self) -> LocalBoxFuture<'static, Result<ChartData, LoadError>>;
}

/// Replays fixed data after `delay_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedChartSource {
    data: ChartData,
    delay_ms: u64,
}

impl SimulatedChartSource {
    pub fn new(data: ChartData, delay_ms: u64) -> Self {
        Self { data, delay_ms }
    }
}

impl ChartSource for SimulatedChartSource {
    fn load(&self) -> LocalBoxFuture<'static, Result<ChartData, LoadError>> {
        let data = self.data.clone();
        let delay_ms = self.delay_ms;
        async move {
            timing::sleep_ms(delay_ms).await;
            Ok(data)
        }
        .boxed_local()
    }
}

/// Shared handle stored in context.
pub type SharedChartSource = Rc<dyn ChartSource>;
