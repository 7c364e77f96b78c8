//! Dashboard configuration.
//!
//! Launchers build a [`DashboardConfig`] (usually `Default`, optionally from
//! JSON) and provide it through context. Every field has a default so partial
//! JSON documents are accepted.

use serde::Deserialize;

use super::color::{ColorError, ColorScale, Rgba};

pub const DEFAULT_COLOR_RANGE: [&str; 2] = ["#d0f1c9", "#034a21"];
pub const DEFAULT_BAR_PALETTE: [&str; 4] = ["#34d399", "#3b82f6", "#f97316", "#f43f5e"];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Where the map fetches boundaries from (web builds).
    pub geo_url: String,
    /// `[low, high]` fill colors for the choropleth.
    pub color_range: [String; 2],
    /// Size of the ranking shown while nothing is hovered.
    pub top_n: usize,
    /// Colors cycled across ranked bars.
    pub bar_palette: Vec<String>,
    /// Full-screen loader shown before the dashboard appears.
    pub intro_delay_ms: u64,
    /// Simulated latency of the two small charts.
    pub chart_delay_ms: u64,
    /// Duration of the ranked-bar grow animation.
    pub bar_animation_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            geo_url: "/assets/india-states.geojson".to_string(),
            color_range: DEFAULT_COLOR_RANGE.map(String::from),
            top_n: 4,
            bar_palette: DEFAULT_BAR_PALETTE.iter().map(|c| c.to_string()).collect(),
            intro_delay_ms: 1500,
            chart_delay_ms: 1000,
            bar_animation_ms: 1200,
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn with_geo_url(mut self, url: impl Into<String>) -> Self {
        self.geo_url = url.into();
        self
    }

    /// Color scale over `[0, domain_max]` using the configured range.
    pub fn color_scale(&self, domain_max: f64) -> Result<ColorScale, ColorError> {
        let [low, high] = &self.color_range;
        ColorScale::parse(domain_max, low, high)
    }

    /// Like [`Self::color_scale`], falling back to the default range when the
    /// configured colors do not parse.
    pub fn color_scale_or_default(&self, domain_max: f64) -> ColorScale {
        self.color_scale(domain_max).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid map color range; using defaults");
            let [low, high] = DEFAULT_COLOR_RANGE.map(|c| c.parse::<Rgba>().unwrap_or(Rgba::WHITE));
            ColorScale::new(domain_max, low, high)
        })
    }

    /// Bar color for position `idx` in the ranking.
    pub fn bar_color(&self, idx: usize) -> &str {
        if self.bar_palette.is_empty() {
            DEFAULT_BAR_PALETTE[idx % DEFAULT_BAR_PALETTE.len()]
        } else {
            &self.bar_palette[idx % self.bar_palette.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_layout() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.top_n, 4);
        assert_eq!(cfg.intro_delay_ms, 1500);
        assert_eq!(cfg.chart_delay_ms, 1000);
        assert_eq!(cfg.bar_palette.len(), 4);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = DashboardConfig::from_json(r#"{"top_n": 6, "geo_url": "https://example.org/in.json"}"#)
            .unwrap();
        assert_eq!(cfg.top_n, 6);
        assert_eq!(cfg.geo_url, "https://example.org/in.json");
        assert_eq!(cfg.color_range, DEFAULT_COLOR_RANGE.map(String::from));
    }

    #[test]
    fn bad_colors_fall_back() {
        let cfg = DashboardConfig {
            color_range: ["teal-ish".into(), "#000".into()],
            ..DashboardConfig::default()
        };
        assert!(cfg.color_scale(10.0).is_err());
        let scale = cfg.color_scale_or_default(10.0);
        assert_eq!(scale.css_at(0.0), "#d0f1c9");
        assert_eq!(scale.css_at(10.0), "#034a21");
    }

    #[test]
    fn bar_colors_cycle() {
        let cfg = DashboardConfig::default();
        assert_eq!(cfg.bar_color(0), cfg.bar_color(4));
        let empty = DashboardConfig {
            bar_palette: Vec::new(),
            ..DashboardConfig::default()
        };
        assert_eq!(empty.bar_color(1), DEFAULT_BAR_PALETTE[1]);
    }
}
