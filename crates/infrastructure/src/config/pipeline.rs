//! Geocoding, routing, emission and batch settings

use application::ports::AlternativeRoutes;
use application::services::{DEFAULT_CANDIDATE_BATCH_SIZE, GeocoderSettings, RoutingSettings};
use domain::text::DEFAULT_KNOWN_CITIES;
use domain::value_objects::{Coordinate, TravelProfile};
use domain::{EmissionFactorOverrides, EmissionModel};
use serde::{Deserialize, Serialize};

// ==============================
// Geocoding Configuration
// ==============================

/// Geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingAppConfig {
    /// ISO country code restricting results (empty = worldwide)
    #[serde(default = "default_country_bias")]
    pub country_bias: String,

    /// City hint used when no known city appears in a row (empty = none)
    #[serde(default)]
    pub city_hint: String,

    /// City keywords detected in row text
    #[serde(default = "default_known_cities")]
    pub known_cities: Vec<String>,

    /// Candidates requested per cascade stage (default: 5)
    #[serde(default = "default_candidate_batch_size")]
    pub candidate_batch_size: u8,

    /// Point used to bias results and choose the nearest candidate
    #[serde(default)]
    pub focus_point: Option<GeoLocationConfig>,
}

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `Coordinate` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.longitude, self.latitude).ok()
    }
}

fn default_country_bias() -> String {
    "IN".to_string()
}

fn default_known_cities() -> Vec<String> {
    DEFAULT_KNOWN_CITIES.iter().map(ToString::to_string).collect()
}

const fn default_candidate_batch_size() -> u8 {
    DEFAULT_CANDIDATE_BATCH_SIZE
}

impl Default for GeocodingAppConfig {
    fn default() -> Self {
        Self {
            country_bias: default_country_bias(),
            city_hint: String::new(),
            known_cities: default_known_cities(),
            candidate_batch_size: default_candidate_batch_size(),
            focus_point: None,
        }
    }
}

impl GeocodingAppConfig {
    /// Settings for the geocode resolver
    #[must_use]
    pub const fn to_geocoder_settings(&self) -> GeocoderSettings {
        GeocoderSettings {
            candidate_batch_size: self.candidate_batch_size,
        }
    }
}

// ==============================
// Routing Configuration
// ==============================

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingAppConfig {
    /// Vehicle profile (`driving-car` or `driving-hgv`)
    #[serde(default)]
    pub profile: TravelProfile,

    /// Number of alternatives requested (default: 2)
    #[serde(default = "default_target_count")]
    pub target_count: u8,

    /// Maximum shared fraction between alternatives (default: 0.6)
    #[serde(default = "default_share_factor")]
    pub share_factor: f64,

    /// Maximum weight relative to the best route (default: 1.4)
    #[serde(default = "default_weight_factor")]
    pub weight_factor: f64,
}

const fn default_target_count() -> u8 {
    2
}

const fn default_share_factor() -> f64 {
    0.6
}

const fn default_weight_factor() -> f64 {
    1.4
}

impl Default for RoutingAppConfig {
    fn default() -> Self {
        Self {
            profile: TravelProfile::default(),
            target_count: default_target_count(),
            share_factor: default_share_factor(),
            weight_factor: default_weight_factor(),
        }
    }
}

impl RoutingAppConfig {
    /// Settings for the route resolver
    #[must_use]
    pub const fn to_routing_settings(&self) -> RoutingSettings {
        RoutingSettings {
            alternatives: AlternativeRoutes {
                target_count: self.target_count,
                share_factor: self.share_factor,
                weight_factor: self.weight_factor,
            },
        }
    }
}

// ==============================
// Emissions Configuration
// ==============================

/// Emission factor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmissionsAppConfig {
    /// Factor overrides in kg CO2e/km keyed by `"Vehicle|Fuel"`
    #[serde(default)]
    pub overrides: EmissionFactorOverrides,
}

impl EmissionsAppConfig {
    /// Build the emission model
    #[must_use]
    pub fn to_model(&self) -> EmissionModel {
        EmissionModel::with_overrides(self.overrides.clone())
    }
}

// ==============================
// Pipeline Configuration
// ==============================

/// Batch processing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineAppConfig {
    /// Rows processed concurrently (default: 1)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

const fn default_concurrency() -> usize {
    1
}

impl Default for PipelineAppConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}
