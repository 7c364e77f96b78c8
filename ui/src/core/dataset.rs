//! Region records and the embedded vaccination dataset.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use super::rate::{derive_rate, normalize_rate, RateValue};

/// Bundled per-state statistics, compiled into every build.
const EMBEDDED_DATASET: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/data/india_vaccination.json"
));

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One administrative region's vaccination status, with its rate already
/// normalized to a plain percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionRecord {
    pub name: String,
    pub vaccinated: u64,
    pub population: u64,
    /// Percentage in `[0, 100]`.
    pub rate: f64,
    pub top_vaccine: Option<String>,
    pub last_updated: Option<String>,
    pub region: Option<String>,
}

impl RegionRecord {
    /// Record with a rate derived from its counts and no metadata.
    pub fn from_counts(name: impl Into<String>, vaccinated: u64, population: u64) -> Self {
        Self {
            name: name.into(),
            vaccinated,
            population,
            rate: derive_rate(vaccinated, population),
            top_vaccine: None,
            last_updated: None,
            region: None,
        }
    }

    pub fn with_rate(mut self, raw: impl Into<RateValue>) -> Self {
        self.rate = normalize_rate(Some(&raw.into()));
        self
    }
}

/// Shape of a record in the source JSON.
#[derive(Debug, Deserialize)]
struct RawRecord {
    state: String,
    #[serde(default, deserialize_with = "count")]
    vaccinated: u64,
    #[serde(default, deserialize_with = "count")]
    population: u64,
    #[serde(default)]
    vaccination_rate: Option<RateValue>,
    #[serde(default)]
    top_vaccine: Option<String>,
    #[serde(default)]
    last_updated: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

/// Counts may be written as integers or floats (`20` or `20.0`). Negative,
/// non-finite and `null` counts read as 0.
fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round() as u64,
        _ => 0,
    })
}

impl From<RawRecord> for RegionRecord {
    fn from(raw: RawRecord) -> Self {
        // The supplied rate wins; counts are only a fallback when it is absent.
        let rate = match raw.vaccination_rate.as_ref() {
            Some(value) => normalize_rate(Some(value)),
            None => derive_rate(raw.vaccinated, raw.population),
        };
        Self {
            name: raw.state,
            vaccinated: raw.vaccinated,
            population: raw.population,
            rate,
            top_vaccine: raw.top_vaccine,
            last_updated: raw.last_updated,
            region: raw.region,
        }
    }
}

/// Immutable, ordered collection of region records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<RegionRecord>,
}

impl Dataset {
    pub fn new(records: Vec<RegionRecord>) -> Self {
        Self { records }
    }

    /// Decodes a JSON array of records. Only a document that is not an array
    /// fails; an individual malformed record is logged and skipped.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let entries: Vec<serde_json::Value> = serde_json::from_str(raw)?;
        let mut records = Vec::with_capacity(entries.len());
        for (idx, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<RawRecord>(entry) {
                Ok(raw) => records.push(RegionRecord::from(raw)),
                Err(err) => tracing::warn!(index = idx, %err, "skipping malformed dataset record"),
            }
        }
        Ok(Self::new(records))
    }

    /// The dataset shipped with the application. A corrupt bundle degrades to
    /// an empty dataset rather than taking the dashboard down.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_DATASET) {
            Ok(dataset) => {
                tracing::debug!(records = dataset.len(), "loaded embedded dataset");
                dataset
            }
            Err(err) => {
                tracing::warn!(%err, "embedded dataset failed to load; continuing empty");
                Self::default()
            }
        }
    }

    pub fn records(&self) -> &[RegionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest normalized rate in the whole dataset (0 when empty).
    pub fn max_rate(&self) -> f64 {
        self.records.iter().map(|r| r.rate).fold(0.0, f64::max)
    }

    /// Highest vaccinated count in the whole dataset (0 when empty).
    pub fn max_vaccinated(&self) -> u64 {
        self.records.iter().map(|r| r.vaccinated).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_rate_representations_are_normalized() {
        let raw = r#"[
            {"state": "Kerala", "vaccinated": 30000000, "population": 35000000, "vaccination_rate": "85.7%"},
            {"state": "Goa", "vaccinated": 1400000, "population": 1500000, "vaccination_rate": 93.3},
            {"state": "Sikkim", "vaccinated": 600000, "population": 690000, "vaccination_rate": "unknown"}
        ]"#;
        let dataset = Dataset::from_json(raw).unwrap();
        let rates: Vec<f64> = dataset.records().iter().map(|r| r.rate).collect();
        assert_eq!(rates, vec![85.7, 93.3, 0.0]);
    }

    #[test]
    fn absent_rate_is_derived_from_counts() {
        let raw = r#"[{"state": "A", "vaccinated": 80, "population": 100}]"#;
        let dataset = Dataset::from_json(raw).unwrap();
        assert_eq!(dataset.records()[0].rate, 80.0);
    }

    #[test]
    fn metadata_passes_through() {
        let raw = r#"[{
            "state": "Punjab", "vaccinated": 1, "population": 2,
            "top_vaccine": "Covishield", "last_updated": "2023-01-05", "region": "North"
        }]"#;
        let dataset = Dataset::from_json(raw).unwrap();
        let record = &dataset.records()[0];
        assert_eq!(record.top_vaccine.as_deref(), Some("Covishield"));
        assert_eq!(record.last_updated.as_deref(), Some("2023-01-05"));
        assert_eq!(record.region.as_deref(), Some("North"));
    }

    #[test]
    fn maxima_cover_entire_dataset() {
        let dataset = Dataset::new(vec![
            RegionRecord::from_counts("A", 10, 100),
            RegionRecord::from_counts("B", 70, 100),
            RegionRecord::from_counts("C", 40, 100),
        ]);
        assert_eq!(dataset.max_rate(), 70.0);
        assert_eq!(dataset.max_vaccinated(), 70);
        assert_eq!(Dataset::default().max_rate(), 0.0);
    }

    #[test]
    fn embedded_dataset_is_populated() {
        let dataset = Dataset::embedded();
        assert!(dataset.len() > 20);
        assert!(dataset.records().iter().all(|r| (0.0..=100.0).contains(&r.rate)));
    }

    #[test]
    fn float_counts_are_accepted() {
        let raw = r#"[
            {"state": "A", "vaccinated": 80, "population": 100, "vaccination_rate": "80%"},
            {"state": "B", "vaccinated": 20.0, "population": 100.4, "vaccination_rate": "20%"},
            {"state": "C", "vaccinated": -5, "population": null}
        ]"#;
        let dataset = Dataset::from_json(raw).unwrap();
        assert_eq!(dataset.len(), 3);
        let b = &dataset.records()[1];
        assert_eq!((b.vaccinated, b.population), (20, 100));
        let c = &dataset.records()[2];
        assert_eq!((c.vaccinated, c.population, c.rate), (0, 0, 0.0));
    }

    #[test]
    fn malformed_record_is_skipped_not_fatal() {
        let raw = r#"[
            {"state": "A", "vaccinated": 80, "population": 100},
            {"vaccinated": 1, "population": 2},
            {"state": "B", "vaccinated": "lots", "population": 100},
            {"state": "C", "vaccinated": 30, "population": 100}
        ]"#;
        let dataset = Dataset::from_json(raw).unwrap();
        let names: Vec<&str> = dataset.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Dataset::from_json("{not json"),
            Err(DatasetError::Decode(_))
        ));
        assert!(matches!(
            Dataset::from_json(r#"{"state": "A"}"#),
            Err(DatasetError::Decode(_))
        ));
    }
}
