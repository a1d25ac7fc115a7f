//! Directions client
//!
//! `POST /v2/directions/{profile}` returns several alternatives in one call;
//! `GET /v2/directions/{profile}` returns one route per preference.

use async_trait::async_trait;
use domain::value_objects::{Coordinate, RoutePreference, TravelProfile};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::OrsConfig;
use crate::error::OrsError;
use crate::http::{authorize, build_client, send_json};
use crate::models::DirectionsResponse;
use crate::throttle::RequestThrottle;

/// `alternative_routes` object of the POST body
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlternativeRoutesBody {
    /// Number of alternatives to ask for
    pub target_count: u8,
    /// Maximum shared fraction between alternatives
    pub share_factor: f64,
    /// Maximum weight of an alternative relative to the best route
    pub weight_factor: f64,
}

/// POST body for a directions request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectionsRequest {
    /// `[[lon, lat], [lon, lat]]`
    pub coordinates: Vec<[f64; 2]>,
    /// Route preference
    pub preference: RoutePreference,
    /// Turn-by-turn instructions (always off)
    pub instructions: bool,
    /// Alternative route settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_routes: Option<AlternativeRoutesBody>,
}

impl DirectionsRequest {
    /// Build a request between two points
    #[must_use]
    pub fn between(start: Coordinate, end: Coordinate, preference: RoutePreference) -> Self {
        Self {
            coordinates: vec![start.to_lon_lat(), end.to_lon_lat()],
            preference,
            instructions: false,
            alternative_routes: None,
        }
    }

    /// Ask for alternative routes
    #[must_use]
    pub const fn with_alternatives(mut self, alternatives: AlternativeRoutesBody) -> Self {
        self.alternative_routes = Some(alternatives);
        self
    }
}

/// Trait for directions clients
#[async_trait]
pub trait DirectionsClient: Send + Sync {
    /// POST a full directions request
    async fn post_directions(
        &self,
        profile: TravelProfile,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, OrsError>;

    /// GET a single route with a given preference
    async fn get_directions(
        &self,
        profile: TravelProfile,
        start: Coordinate,
        end: Coordinate,
        preference: RoutePreference,
    ) -> Result<DirectionsResponse, OrsError>;
}

/// OpenRouteService directions client
#[derive(Debug)]
pub struct OrsDirectionsClient {
    client: Client,
    config: OrsConfig,
    throttle: RequestThrottle,
}

impl OrsDirectionsClient {
    /// Create a new directions client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OrsConfig) -> Result<Self, OrsError> {
        let client = build_client(config, config.directions_timeout_secs)?;
        Ok(Self {
            client,
            config: config.clone(),
            throttle: RequestThrottle::new(config.min_request_interval_ms),
        })
    }

    fn url(&self, profile: TravelProfile) -> String {
        format!("{}/v2/directions/{}", self.config.base(), profile.as_str())
    }
}

#[async_trait]
impl DirectionsClient for OrsDirectionsClient {
    #[instrument(skip(self, request))]
    async fn post_directions(
        &self,
        profile: TravelProfile,
        request: &DirectionsRequest,
    ) -> Result<DirectionsResponse, OrsError> {
        self.throttle.wait().await;

        let builder = authorize(self.client.post(self.url(profile)), &self.config.api_key)
            .json(request);
        let response: DirectionsResponse =
            send_json(builder, self.config.directions_timeout_secs).await?;

        debug!(routes = response.summaries().len(), "Directions POST response");
        Ok(response)
    }

    #[instrument(skip(self))]
    async fn get_directions(
        &self,
        profile: TravelProfile,
        start: Coordinate,
        end: Coordinate,
        preference: RoutePreference,
    ) -> Result<DirectionsResponse, OrsError> {
        self.throttle.wait().await;

        let params = [
            ("start", start.to_string()),
            ("end", end.to_string()),
            ("preference", preference.as_str().to_string()),
        ];
        let builder =
            authorize(self.client.get(self.url(profile)), &self.config.api_key).query(&params);
        let response: DirectionsResponse =
            send_json(builder, self.config.directions_timeout_secs).await?;

        debug!(routes = response.summaries().len(), "Directions GET response");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let start = Coordinate::new(77.5946, 12.9716).unwrap();
        let end = Coordinate::new(77.6412, 12.9279).unwrap();
        let request = DirectionsRequest::between(start, end, RoutePreference::Recommended)
            .with_alternatives(AlternativeRoutesBody {
                target_count: 2,
                share_factor: 0.6,
                weight_factor: 1.4,
            });

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["coordinates"][0][0], 77.5946);
        assert_eq!(json["coordinates"][1][1], 12.9279);
        assert_eq!(json["preference"], "recommended");
        assert_eq!(json["instructions"], false);
        assert_eq!(json["alternative_routes"]["target_count"], 2);
    }

    #[test]
    fn test_body_without_alternatives() {
        let c = Coordinate::new(0.0, 0.0).unwrap();
        let request = DirectionsRequest::between(c, c, RoutePreference::Shortest);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("alternative_routes").is_none());
        assert_eq!(json["preference"], "shortest");
    }

    #[test]
    fn test_url_uses_profile_name() {
        let client =
            OrsDirectionsClient::new(&OrsConfig::for_testing("http://localhost:8080/")).unwrap();
        assert_eq!(
            client.url(TravelProfile::DrivingHgv),
            "http://localhost:8080/v2/directions/driving-hgv"
        );
    }
}
