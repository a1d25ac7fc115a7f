//! Aggregate figures over a batch of trip results

use serde::{Deserialize, Serialize};

use super::{TripFailure, TripResult};

/// Totals over a processed batch
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BatchSummary {
    /// Number of rows processed
    pub total_rows: usize,
    /// Rows resolved end to end
    pub succeeded: usize,
    /// Rows tagged with a geocoding failure
    pub geocoding_failures: usize,
    /// Rows tagged with a routing failure
    pub routing_failures: usize,
    /// Sum of short-alternative distances (km)
    pub total_short_km: f64,
    /// Sum of long-alternative distances (km)
    pub total_long_km: f64,
    /// Sum of short-alternative emissions (kg CO2e)
    pub total_short_emissions_kg: f64,
    /// Sum of long-alternative emissions (kg CO2e)
    pub total_long_emissions_kg: f64,
}

impl BatchSummary {
    /// Aggregate a slice of results; absent values count as zero
    #[must_use]
    pub fn from_results(results: &[TripResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, result| {
            acc.total_rows += 1;
            match result.failure() {
                None => acc.succeeded += 1,
                Some(TripFailure::GeocodingFailed) => acc.geocoding_failures += 1,
                Some(TripFailure::RoutingFailed { .. }) => acc.routing_failures += 1,
            }
            acc.total_short_km += result.route().short_distance_km.unwrap_or(0.0);
            acc.total_long_km += result.route().long_distance_km.unwrap_or(0.0);
            acc.total_short_emissions_kg += result.emissions().short_kg.unwrap_or(0.0);
            acc.total_long_emissions_kg += result.emissions().long_kg.unwrap_or(0.0);
            acc
        })
    }

    /// Combined short and long emissions
    #[must_use]
    pub fn total_emissions_kg(&self) -> f64 {
        self.total_short_emissions_kg + self.total_long_emissions_kg
    }
}
