//! Directions adapter - Implements DirectionsPort using integration_ors

use application::error::ApplicationError;
use application::ports::{
    AlternativesRequest, DirectionsPort, RouteAlternative, SingleRouteRequest,
};
use async_trait::async_trait;
use integration_ors::{
    AlternativeRoutesBody, DirectionsClient, DirectionsRequest, DirectionsResponse, OrsConfig,
    OrsDirectionsClient, RouteSummary,
};
use tracing::{debug, instrument};

use super::map_ors_error;
use crate::retry::{RetryConfig, retry};

/// Adapter for OpenRouteService directions
pub struct OrsDirectionsAdapter {
    client: OrsDirectionsClient,
    retry_config: RetryConfig,
}

impl std::fmt::Debug for OrsDirectionsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsDirectionsAdapter")
            .field("client", &"OrsDirectionsClient")
            .field("retry_config", &self.retry_config)
            .finish()
    }
}

impl OrsDirectionsAdapter {
    /// Create a new adapter around an existing client
    pub const fn new(client: OrsDirectionsClient, retry_config: RetryConfig) -> Self {
        Self {
            client,
            retry_config,
        }
    }

    /// Create an adapter from connection settings
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn from_config(
        config: &OrsConfig,
        retry_config: RetryConfig,
    ) -> Result<Self, ApplicationError> {
        let client = OrsDirectionsClient::new(config)
            .map_err(|e| map_ors_error("Directions client setup", e))?;
        Ok(Self::new(client, retry_config))
    }
}

const fn to_alternative(summary: RouteSummary) -> RouteAlternative {
    RouteAlternative {
        distance_m: summary.distance,
        duration_s: summary.duration,
    }
}

fn to_alternatives(response: &DirectionsResponse) -> Vec<RouteAlternative> {
    response.summaries().into_iter().map(to_alternative).collect()
}

#[async_trait]
impl DirectionsPort for OrsDirectionsAdapter {
    #[instrument(skip(self, request), fields(profile = %request.profile))]
    async fn route_alternatives(
        &self,
        request: &AlternativesRequest,
    ) -> Result<Vec<RouteAlternative>, ApplicationError> {
        let body = DirectionsRequest::between(request.start, request.end, request.preference)
            .with_alternatives(AlternativeRoutesBody {
                target_count: request.alternatives.target_count,
                share_factor: request.alternatives.share_factor,
                weight_factor: request.alternatives.weight_factor,
            });

        let response = retry(&self.retry_config, || {
            self.client.post_directions(request.profile, &body)
        })
        .await
        .map_err(|e| map_ors_error("Directions", e))?;

        let routes = to_alternatives(&response);
        debug!(count = routes.len(), "Alternative routes received");
        Ok(routes)
    }

    #[instrument(skip(self, request), fields(profile = %request.profile, preference = %request.preference))]
    async fn route_single(
        &self,
        request: &SingleRouteRequest,
    ) -> Result<Option<RouteAlternative>, ApplicationError> {
        let response = retry(&self.retry_config, || {
            self.client.get_directions(
                request.profile,
                request.start,
                request.end,
                request.preference,
            )
        })
        .await
        .map_err(|e| map_ors_error("Directions", e))?;

        Ok(to_alternatives(&response).into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_routes_convert_in_order() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "routes": [
                {"summary": {"distance": 5200.0, "duration": 600.0}},
                {"summary": {"distance": 6100.0}}
            ]
        }))
        .unwrap();

        let routes = to_alternatives(&response);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].distance_m, Some(5200.0));
        assert_eq!(routes[0].duration_s, Some(600.0));
        assert_eq!(routes[1].duration_s, None);
    }

    #[test]
    fn geojson_routes_convert() {
        let response: DirectionsResponse = serde_json::from_value(json!({
            "features": [
                {"properties": {"summary": {"distance": 7000.0, "duration": 900.0}}}
            ]
        }))
        .unwrap();

        assert_eq!(to_alternatives(&response)[0].distance_m, Some(7000.0));
    }
}
