//! Input rows and per-row results

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RouteSummary;
use crate::value_objects::{Coordinate, TravelProfile};

/// One fleet-activity row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRow {
    /// Origin text: a place name or an inline "lat,lon" pair
    pub origin: String,
    /// Destination text: a place name or an inline "lat,lon" pair
    pub destination: String,
    /// Vehicle description, passed through to the emission model
    pub vehicle_type: String,
    /// Fuel description, passed through to the emission model
    pub fuel_type: String,
}

impl TripRow {
    /// Create a row, trimming surrounding whitespace from every field
    #[must_use]
    pub fn new(
        origin: impl AsRef<str>,
        destination: impl AsRef<str>,
        vehicle_type: impl AsRef<str>,
        fuel_type: impl AsRef<str>,
    ) -> Self {
        Self {
            origin: origin.as_ref().trim().to_string(),
            destination: destination.as_ref().trim().to_string(),
            vehicle_type: vehicle_type.as_ref().trim().to_string(),
            fuel_type: fuel_type.as_ref().trim().to_string(),
        }
    }
}

/// Why a row could not be fully resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TripFailure {
    /// An endpoint could not be resolved to a valid coordinate
    GeocodingFailed,
    /// Neither the primary nor the fallback directions request succeeded
    RoutingFailed {
        /// Backend failure description
        reason: String,
    },
}

impl fmt::Display for TripFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GeocodingFailed => write!(f, "Geocoding failed"),
            Self::RoutingFailed { reason } => write!(f, "Routing failed: {reason}"),
        }
    }
}

/// Emissions for the short and long route alternative, in kg CO2e
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EmissionEstimate {
    /// Emissions along the shortest alternative
    pub short_kg: Option<f64>,
    /// Emissions along the longest alternative
    pub long_kg: Option<f64>,
}

/// The outcome for one input row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripResult {
    row: TripRow,
    #[serde(skip_serializing_if = "Option::is_none")]
    origin_coordinate: Option<Coordinate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination_coordinate: Option<Coordinate>,
    profile: TravelProfile,
    route: RouteSummary,
    emissions: EmissionEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    failure: Option<TripFailure>,
}

impl TripResult {
    /// A fully resolved row
    #[must_use]
    pub const fn completed(
        row: TripRow,
        origin: Coordinate,
        destination: Coordinate,
        profile: TravelProfile,
        route: RouteSummary,
        emissions: EmissionEstimate,
    ) -> Self {
        Self {
            row,
            origin_coordinate: Some(origin),
            destination_coordinate: Some(destination),
            profile,
            route,
            emissions,
            failure: None,
        }
    }

    /// A row whose endpoints could not both be resolved
    ///
    /// Whichever endpoint did resolve is kept for diagnostics.
    #[must_use]
    pub const fn geocoding_failed(
        row: TripRow,
        origin: Option<Coordinate>,
        destination: Option<Coordinate>,
        profile: TravelProfile,
    ) -> Self {
        Self {
            row,
            origin_coordinate: origin,
            destination_coordinate: destination,
            profile,
            route: RouteSummary::empty(),
            emissions: EmissionEstimate {
                short_kg: None,
                long_kg: None,
            },
            failure: Some(TripFailure::GeocodingFailed),
        }
    }

    /// A row whose endpoints resolved but whose route could not be fetched
    #[must_use]
    pub fn routing_failed(
        row: TripRow,
        origin: Coordinate,
        destination: Coordinate,
        profile: TravelProfile,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            row,
            origin_coordinate: Some(origin),
            destination_coordinate: Some(destination),
            profile,
            route: RouteSummary::empty(),
            emissions: EmissionEstimate::default(),
            failure: Some(TripFailure::RoutingFailed {
                reason: reason.into(),
            }),
        }
    }

    /// The input row this result was produced from
    #[must_use]
    pub const fn row(&self) -> &TripRow {
        &self.row
    }

    /// Resolved origin coordinate
    #[must_use]
    pub const fn origin_coordinate(&self) -> Option<Coordinate> {
        self.origin_coordinate
    }

    /// Resolved destination coordinate
    #[must_use]
    pub const fn destination_coordinate(&self) -> Option<Coordinate> {
        self.destination_coordinate
    }

    /// Routing profile used for this row
    #[must_use]
    pub const fn profile(&self) -> TravelProfile {
        self.profile
    }

    /// Short/long route distances
    #[must_use]
    pub const fn route(&self) -> &RouteSummary {
        &self.route
    }

    /// Short/long emission figures
    #[must_use]
    pub const fn emissions(&self) -> &EmissionEstimate {
        &self.emissions
    }

    /// Failure tag, if the row was not fully resolved
    #[must_use]
    pub const fn failure(&self) -> Option<&TripFailure> {
        self.failure.as_ref()
    }

    /// Whether the row was fully resolved
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.failure.is_none()
    }
}
