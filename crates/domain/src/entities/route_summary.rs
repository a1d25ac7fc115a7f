//! Short/long distance pair derived from route alternatives

use serde::{Deserialize, Serialize};

/// Shortest and longest distance across a set of route alternatives
///
/// Both fields are `None` when no alternative carried a usable distance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteSummary {
    /// Distance of the shortest alternative in kilometers
    pub short_distance_km: Option<f64>,
    /// Distance of the longest alternative in kilometers
    pub long_distance_km: Option<f64>,
}

impl RouteSummary {
    /// Summary with both distances absent
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            short_distance_km: None,
            long_distance_km: None,
        }
    }

    /// Build a summary from per-route distances in meters
    ///
    /// Routes without a distance, or with a negative or non-finite one,
    /// are skipped.
    #[must_use]
    pub fn from_distances_m<I>(distances_m: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        distances_m
            .into_iter()
            .flatten()
            .filter(|d| d.is_finite() && *d >= 0.0)
            .map(|d| d / 1000.0)
            .fold(Self::empty(), |acc, km| Self {
                short_distance_km: Some(acc.short_distance_km.map_or(km, |s| s.min(km))),
                long_distance_km: Some(acc.long_distance_km.map_or(km, |l| l.max(km))),
            })
    }

    /// Whether neither distance is present
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.short_distance_km.is_none() && self.long_distance_km.is_none()
    }
}
