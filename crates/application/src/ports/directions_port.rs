//! Directions service port
//!
//! Defines the interface for fetching road routes between two coordinates.

use async_trait::async_trait;
use domain::value_objects::{Coordinate, RoutePreference, TravelProfile};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Settings for requesting alternative routes in one call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRoutes {
    /// Number of alternatives to ask for
    pub target_count: u8,
    /// Maximum shared fraction between alternatives
    pub share_factor: f64,
    /// Maximum weight of an alternative relative to the best route
    pub weight_factor: f64,
}

impl Default for AlternativeRoutes {
    fn default() -> Self {
        Self {
            target_count: 2,
            share_factor: 0.6,
            weight_factor: 1.4,
        }
    }
}

/// Request for a set of alternative routes
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativesRequest {
    /// Route start
    pub start: Coordinate,
    /// Route end
    pub end: Coordinate,
    /// Vehicle profile
    pub profile: TravelProfile,
    /// Route preference
    pub preference: RoutePreference,
    /// Alternative route settings
    pub alternatives: AlternativeRoutes,
}

/// Request for exactly one route with a given preference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SingleRouteRequest {
    /// Route start
    pub start: Coordinate,
    /// Route end
    pub end: Coordinate,
    /// Vehicle profile
    pub profile: TravelProfile,
    /// Route preference
    pub preference: RoutePreference,
}

/// One route returned by the directions backend
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RouteAlternative {
    /// Route length in meters, if reported
    pub distance_m: Option<f64>,
    /// Travel time in seconds, if reported
    pub duration_s: Option<f64>,
}

impl RouteAlternative {
    /// A route with a known distance
    #[must_use]
    pub const fn with_distance(distance_m: f64) -> Self {
        Self {
            distance_m: Some(distance_m),
            duration_s: None,
        }
    }
}

/// Port for directions operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DirectionsPort: Send + Sync {
    /// Request a route plus alternatives in one call
    async fn route_alternatives(
        &self,
        request: &AlternativesRequest,
    ) -> Result<Vec<RouteAlternative>, ApplicationError>;

    /// Request a single route, returning the first one the backend offers
    async fn route_single(
        &self,
        request: &SingleRouteRequest,
    ) -> Result<Option<RouteAlternative>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn DirectionsPort>();
    }

    #[test]
    fn alternative_defaults() {
        let alt = AlternativeRoutes::default();
        assert_eq!(alt.target_count, 2);
        assert!((alt.share_factor - 0.6).abs() < f64::EPSILON);
        assert!((alt.weight_factor - 1.4).abs() < f64::EPSILON);
    }
}
