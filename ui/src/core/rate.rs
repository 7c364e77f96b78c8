//! Vaccination rate normalization.
//!
//! Source data mixes plain numbers (`73.2`) and percentage strings (`"73.2%"`).
//! Everything is folded into a single `f64` percentage in `[0, 100]` at the
//! ingestion boundary so downstream code never parses rates again.

use serde::{Deserialize, Serialize};

/// A rate exactly as it appears in the source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RateValue {
    Number(f64),
    Text(String),
}

impl From<f64> for RateValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RateValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Convert a raw rate into a percentage in `[0, 100]`.
///
/// Absent, empty, non-finite or unparseable input yields `0.0`.
pub fn normalize_rate(raw: Option<&RateValue>) -> f64 {
    let value = match raw {
        None => return 0.0,
        Some(RateValue::Number(n)) => *n,
        Some(RateValue::Text(text)) => match parse_percent(text) {
            Some(n) => n,
            None => return 0.0,
        },
    };
    clamp_percent(value)
}

/// Derive a percentage from counts. A zero population gives `0.0`.
pub fn derive_rate(vaccinated: u64, population: u64) -> f64 {
    if population == 0 {
        return 0.0;
    }
    clamp_percent(vaccinated as f64 / population as f64 * 100.0)
}

fn parse_percent(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let numeric = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    if numeric.is_empty() {
        return None;
    }
    numeric.parse::<f64>().ok()
}

fn clamp_percent(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_strings_are_parsed() {
        assert_eq!(normalize_rate(Some(&"73.2%".into())), 73.2);
        assert_eq!(normalize_rate(Some(&" 41 % ".into())), 41.0);
        assert_eq!(normalize_rate(Some(&"58.9".into())), 58.9);
    }

    #[test]
    fn missing_or_garbage_is_zero() {
        assert_eq!(normalize_rate(None), 0.0);
        assert_eq!(normalize_rate(Some(&"".into())), 0.0);
        assert_eq!(normalize_rate(Some(&"%".into())), 0.0);
        assert_eq!(normalize_rate(Some(&"n/a".into())), 0.0);
        assert_eq!(normalize_rate(Some(&f64::NAN.into())), 0.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(normalize_rate(Some(&140.0.into())), 100.0);
        assert_eq!(normalize_rate(Some(&"-3%".into())), 0.0);
    }

    #[test]
    fn normalization_is_idempotent() {
        for raw in [
            RateValue::from(12.5),
            RateValue::from("99.9%"),
            RateValue::from("bogus"),
            RateValue::from(250.0),
        ] {
            let once = normalize_rate(Some(&raw));
            let twice = normalize_rate(Some(&RateValue::Number(once)));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn derived_rate_handles_zero_population() {
        assert_eq!(derive_rate(80, 100), 80.0);
        assert_eq!(derive_rate(5, 0), 0.0);
    }
}
