//! Route resolver
//!
//! Fetches the short and long route alternatives between two coordinates.
//! A single alternatives request is tried first; if it fails, two
//! independent single-route requests (recommended and shortest) stand in.

use std::{fmt, sync::Arc};

use domain::entities::RouteSummary;
use domain::value_objects::{Coordinate, RoutePreference, TravelProfile};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{
        AlternativeRoutes, AlternativesRequest, DirectionsPort, RouteAlternative,
        SingleRouteRequest,
    },
};

/// Settings for route resolution
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RoutingSettings {
    /// Alternative route settings for the primary request
    pub alternatives: AlternativeRoutes,
}

/// Which transport path produced a resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "path", rename_all = "snake_case")]
pub enum RoutePath {
    /// The alternatives request succeeded
    Primary,
    /// The alternatives request failed; `succeeded` single-route requests answered
    Fallback {
        /// Number of fallback requests that did not fail (1 or 2)
        succeeded: u8,
    },
    /// The alternatives request and both fallback requests failed
    FallbackExhausted,
}

/// Outcome of routing between two coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResolution {
    /// Short/long distances derived from the routes received
    pub summary: RouteSummary,
    /// How the routes were obtained
    pub path: RoutePath,
    /// Error from the alternatives request, when it failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_error: Option<String>,
}

impl RouteResolution {
    /// True only when no request reached the backend successfully
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.path, RoutePath::FallbackExhausted)
    }

    /// Reason to report for a failed resolution
    #[must_use]
    pub fn failure_reason(&self) -> String {
        self.primary_error
            .clone()
            .unwrap_or_else(|| "no route available".to_string())
    }
}

fn summarize(routes: &[RouteAlternative]) -> RouteSummary {
    RouteSummary::from_distances_m(routes.iter().map(|r| r.distance_m))
}

/// Service resolving routes through the directions port
pub struct RouteResolver {
    directions_port: Arc<dyn DirectionsPort>,
    settings: RoutingSettings,
}

impl fmt::Debug for RouteResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteResolver")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

impl RouteResolver {
    /// Create a new resolver
    pub fn new(directions_port: Arc<dyn DirectionsPort>, settings: RoutingSettings) -> Self {
        Self {
            directions_port,
            settings,
        }
    }

    /// Route between two coordinates
    #[instrument(skip(self), fields(start = %start, end = %end, profile = %profile))]
    pub async fn route(
        &self,
        start: Coordinate,
        end: Coordinate,
        profile: TravelProfile,
    ) -> RouteResolution {
        let request = AlternativesRequest {
            start,
            end,
            profile,
            preference: RoutePreference::Recommended,
            alternatives: self.settings.alternatives,
        };

        let primary_error = match self.directions_port.route_alternatives(&request).await {
            Ok(routes) => {
                let summary = summarize(&routes);
                debug!(routes = routes.len(), "Alternatives request succeeded");
                return RouteResolution {
                    summary,
                    path: RoutePath::Primary,
                    primary_error: None,
                };
            },
            Err(e) => {
                warn!(error = %e, "Alternatives request failed, falling back to single routes");
                e
            },
        };

        self.fallback(start, end, profile, &primary_error).await
    }

    async fn fallback(
        &self,
        start: Coordinate,
        end: Coordinate,
        profile: TravelProfile,
        primary_error: &ApplicationError,
    ) -> RouteResolution {
        let single = |preference| SingleRouteRequest {
            start,
            end,
            profile,
            preference,
        };
        let recommended = single(RoutePreference::Recommended);
        let shortest = single(RoutePreference::Shortest);

        let (recommended, shortest) = futures::join!(
            self.fallback_branch(&recommended),
            self.fallback_branch(&shortest)
        );

        let succeeded = u8::from(recommended.is_some()) + u8::from(shortest.is_some());
        let routes: Vec<RouteAlternative> = [recommended, shortest]
            .into_iter()
            .flatten()
            .flatten()
            .collect();

        let path = if succeeded == 0 {
            RoutePath::FallbackExhausted
        } else {
            RoutePath::Fallback { succeeded }
        };
        info!(?path, routes = routes.len(), "Fallback routing finished");

        RouteResolution {
            summary: summarize(&routes),
            path,
            primary_error: Some(primary_error.to_string()),
        }
    }

    /// One best-effort fallback request; `None` when the call failed
    async fn fallback_branch(
        &self,
        request: &SingleRouteRequest,
    ) -> Option<Option<RouteAlternative>> {
        match self.directions_port.route_single(request).await {
            Ok(route) => Some(route),
            Err(e) => {
                warn!(preference = %request.preference, error = %e, "Fallback route request failed");
                None
            },
        }
    }
}
