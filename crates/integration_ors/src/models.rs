//! OpenRouteService response models

use serde::Deserialize;

/// GeoJSON feature collection returned by the geocoding endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeatureCollection {
    /// Matched features, best first
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One geocoding match
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Point geometry
    pub geometry: Option<Geometry>,
    /// Feature properties (label, layer, confidence, ...)
    #[serde(default)]
    pub properties: serde_json::Value,
}

/// GeoJSON geometry; only the coordinate array is used
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude]`
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

impl Feature {
    /// `(longitude, latitude)` of a point feature
    #[must_use]
    pub fn lon_lat(&self) -> Option<(f64, f64)> {
        match self.geometry.as_ref()?.coordinates.as_slice() {
            [lon, lat, ..] => Some((*lon, *lat)),
            _ => None,
        }
    }

    /// Display label
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.properties.get("label").and_then(serde_json::Value::as_str)
    }

    /// Source layer
    #[must_use]
    pub fn layer(&self) -> Option<&str> {
        self.properties.get("layer").and_then(serde_json::Value::as_str)
    }
}

/// Distance/duration summary of one route
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct RouteSummary {
    /// Length in meters
    pub distance: Option<f64>,
    /// Travel time in seconds
    pub duration: Option<f64>,
}

/// A route in the JSON response shape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Route {
    /// Route summary; absent for degenerate routes
    #[serde(default)]
    pub summary: Option<RouteSummary>,
}

/// A route in the GeoJSON response shape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteFeature {
    /// Feature properties
    #[serde(default)]
    pub properties: RouteFeatureProperties,
}

/// Properties of a GeoJSON route feature
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteFeatureProperties {
    /// Route summary
    #[serde(default)]
    pub summary: Option<RouteSummary>,
}

/// Directions response in either of the shapes the API produces
///
/// `POST /v2/directions/{profile}` answers `{"routes": [...]}`; the GET
/// variant may answer a GeoJSON `{"features": [...]}` collection instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DirectionsResponse {
    /// `routes[].summary`
    Json {
        /// Routes, best first
        routes: Vec<Route>,
    },
    /// `features[].properties.summary`
    GeoJson {
        /// Route features, best first
        features: Vec<RouteFeature>,
    },
}

impl DirectionsResponse {
    /// Route summaries in response order; routes without one yield a default
    #[must_use]
    pub fn summaries(&self) -> Vec<RouteSummary> {
        match self {
            Self::Json { routes } => routes
                .iter()
                .map(|r| r.summary.unwrap_or_default())
                .collect(),
            Self::GeoJson { features } => features
                .iter()
                .map(|f| f.properties.summary.unwrap_or_default())
                .collect(),
        }
    }
}
