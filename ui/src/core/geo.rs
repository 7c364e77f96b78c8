//! Geography: GeoJSON boundaries, the name join against the dataset, and the
//! sources the map view loads boundaries from.
//!
//! Shapes are fitted into an SVG view box with a plain linear bounding-box
//! transform (y flipped). No cartographic projection is attempted.

use std::fmt::Write as _;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde::Deserialize;
use thiserror::Error;

use super::dataset::RegionRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    #[error("request failed: {0}")]
    Http(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("boundary file is not valid GeoJSON: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for GeoError {
    fn from(err: serde_json::Error) -> Self {
        GeoError::Decode(err.to_string())
    }
}

/// Join key: lowercase, all whitespace and periods removed.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .flat_map(char::to_lowercase)
        .collect()
}

/// First record whose normalized name equals the shape's normalized name.
pub fn join<'a>(shape_name: &str, records: &'a [RegionRecord]) -> Option<&'a RegionRecord> {
    let key = normalize_name(shape_name);
    records.iter().find(|record| normalize_name(&record.name) == key)
}

/// A named region boundary. Each ring is a closed list of `[lon, lat]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoShape {
    pub name: String,
    pub rings: Vec<Vec<[f64; 2]>>,
}

/// A shape fitted into view-box coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePath {
    pub name: String,
    /// SVG path data.
    pub d: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoCollection {
    pub shapes: Vec<GeoShape>,
}

impl GeoCollection {
    /// Parse a GeoJSON `FeatureCollection`. Features without a region name or
    /// without polygonal geometry are dropped.
    pub fn from_geojson(raw: &str) -> Result<Self, GeoError> {
        let parsed: RawCollection = serde_json::from_str(raw)?;
        let shapes = parsed
            .features
            .into_iter()
            .filter_map(RawFeature::into_shape)
            .collect();
        Ok(Self { shapes })
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    fn bounds(&self) -> Option<Bounds> {
        let mut points = self
            .shapes
            .iter()
            .flat_map(|shape| shape.rings.iter())
            .flat_map(|ring| ring.iter());
        let first = points.next()?;
        let mut bounds = Bounds {
            min: *first,
            max: *first,
        };
        for [x, y] in points {
            bounds.min[0] = bounds.min[0].min(*x);
            bounds.min[1] = bounds.min[1].min(*y);
            bounds.max[0] = bounds.max[0].max(*x);
            bounds.max[1] = bounds.max[1].max(*y);
        }
        Some(bounds)
    }

    /// Fit every shape into a `width` × `height` box, keeping the aspect ratio
    /// and leaving `padding` on each side.
    pub fn fit_paths(&self, width: f64, height: f64, padding: f64) -> Vec<ShapePath> {
        let Some(bounds) = self.bounds() else {
            return Vec::new();
        };

        let span_x = (bounds.max[0] - bounds.min[0]).max(f64::EPSILON);
        let span_y = (bounds.max[1] - bounds.min[1]).max(f64::EPSILON);
        let inner_w = (width - 2.0 * padding).max(1.0);
        let inner_h = (height - 2.0 * padding).max(1.0);
        let scale = (inner_w / span_x).min(inner_h / span_y);
        let offset_x = padding + (inner_w - span_x * scale) / 2.0;
        let offset_y = padding + (inner_h - span_y * scale) / 2.0;

        let project = |[lon, lat]: [f64; 2]| -> (f64, f64) {
            (
                offset_x + (lon - bounds.min[0]) * scale,
                offset_y + (bounds.max[1] - lat) * scale,
            )
        };

        self.shapes
            .iter()
            .map(|shape| {
                let mut d = String::new();
                for ring in shape.rings.iter().filter(|ring| ring.len() >= 3) {
                    for (idx, point) in ring.iter().enumerate() {
                        let (x, y) = project(*point);
                        let cmd = if idx == 0 { 'M' } else { 'L' };
                        let _ = write!(d, "{cmd}{x:.2},{y:.2}");
                    }
                    d.push('Z');
                }
                ShapePath {
                    name: shape.name.clone(),
                    d,
                }
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    min: [f64; 2],
    max: [f64; 2],
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    #[serde(default)]
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    #[serde(default)]
    properties: Option<RawProperties>,
    #[serde(default)]
    geometry: Option<RawGeometry>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    #[serde(rename = "ST_NM", default)]
    st_nm: Option<String>,
    #[serde(rename = "NAME_1", default)]
    name_1: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum RawGeometry {
    Polygon {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },
    #[serde(other)]
    Unsupported,
}

impl RawFeature {
    fn into_shape(self) -> Option<GeoShape> {
        let props = self.properties.unwrap_or_default();
        let name = props
            .st_nm
            .or(props.name_1)
            .filter(|name| !name.trim().is_empty())?;

        let rings: Vec<Vec<[f64; 2]>> = match self.geometry? {
            RawGeometry::Polygon { coordinates } => coordinates.into_iter().map(to_ring).collect(),
            RawGeometry::MultiPolygon { coordinates } => coordinates
                .into_iter()
                .flatten()
                .map(to_ring)
                .collect(),
            RawGeometry::Unsupported => return None,
        };

        if rings.is_empty() {
            return None;
        }
        Some(GeoShape { name, rings })
    }
}

/// Keep `[lon, lat]`; positions may carry extra coordinates (altitude).
fn to_ring(positions: Vec<Vec<f64>>) -> Vec<[f64; 2]> {
    positions
        .into_iter()
        .filter_map(|pos| match pos.as_slice() {
            [lon, lat, ..] if lon.is_finite() && lat.is_finite() => Some([*lon, *lat]),
            _ => None,
        })
        .collect()
}

/// Somewhere the map view can load boundaries from.
pub trait GeoSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<GeoCollection, GeoError>>;
}

/// Boundaries served over HTTP(S).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGeoSource {
    pub url: String,
}

impl HttpGeoSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl GeoSource for HttpGeoSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<GeoCollection, GeoError>> {
        let url = self.url.clone();
        async move {
            tracing::debug!(%url, "fetching geography");
            let body = fetch_text(&url).await?;
            GeoCollection::from_geojson(&body)
        }
        .boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, GeoError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|err| GeoError::Http(err.to_string()))?;
    if !response.ok() {
        return Err(GeoError::Status(response.status()));
    }
    response
        .text()
        .await
        .map_err(|err| GeoError::Http(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(url: &str) -> Result<String, GeoError> {
    let response = reqwest::get(url)
        .await
        .map_err(|err| GeoError::Http(err.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(GeoError::Status(status.as_u16()));
    }
    response
        .text()
        .await
        .map_err(|err| GeoError::Http(err.to_string()))
}

/// Boundaries compiled into the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedGeoSource {
    geojson: &'static str,
}

impl EmbeddedGeoSource {
    pub const fn new(geojson: &'static str) -> Self {
        Self { geojson }
    }
}

impl GeoSource for EmbeddedGeoSource {
    fn fetch(&self) -> LocalBoxFuture<'static, Result<GeoCollection, GeoError>> {
        let raw = self.geojson;
        async move { GeoCollection::from_geojson(raw) }.boxed_local()
    }
}
