//! Pelias geocoding client
//!
//! Wraps the three OpenRouteService geocoding endpoints: fuzzy search,
//! structured search and autocomplete. Every call returns the raw GeoJSON
//! feature collection in backend order.

use async_trait::async_trait;
use domain::value_objects::Coordinate;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::OrsConfig;
use crate::error::OrsError;
use crate::http::{authorize, build_client, send_json};
use crate::models::FeatureCollection;
use crate::throttle::RequestThrottle;

/// Bias and size options shared by all geocoding endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Comma-separated layer filter (search only)
    pub layers: Option<String>,
    /// ISO country code passed as `boundary.country`
    pub country: Option<String>,
    /// Point passed as `focus.point.lon` / `focus.point.lat`
    pub focus: Option<Coordinate>,
    /// Maximum number of features
    pub size: u8,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            layers: None,
            country: None,
            focus: None,
            size: 5,
        }
    }
}

impl SearchOptions {
    fn push_common(&self, params: &mut Vec<(&'static str, String)>) {
        params.push(("size", self.size.to_string()));
        if let Some(country) = &self.country {
            params.push(("boundary.country", country.clone()));
        }
    }

    fn push_focus(&self, params: &mut Vec<(&'static str, String)>) {
        if let Some(focus) = self.focus {
            params.push(("focus.point.lon", focus.longitude().to_string()));
            params.push(("focus.point.lat", focus.latitude().to_string()));
        }
    }
}

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Fuzzy free-text search
    async fn search(
        &self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<FeatureCollection, OrsError>;

    /// Structured search with separate address and locality
    async fn search_structured(
        &self,
        address: &str,
        locality: &str,
        options: &SearchOptions,
    ) -> Result<FeatureCollection, OrsError>;

    /// Autocomplete search
    async fn autocomplete(
        &self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<FeatureCollection, OrsError>;
}

/// OpenRouteService geocoding client
#[derive(Debug)]
pub struct OrsGeocodingClient {
    client: Client,
    config: OrsConfig,
    throttle: RequestThrottle,
}

impl OrsGeocodingClient {
    /// Create a new geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &OrsConfig) -> Result<Self, OrsError> {
        let client = build_client(config, config.geocode_timeout_secs)?;
        Ok(Self {
            client,
            config: config.clone(),
            throttle: RequestThrottle::new(config.min_request_interval_ms),
        })
    }

    async fn get_features(
        &self,
        endpoint: &str,
        params: &[(&'static str, String)],
    ) -> Result<FeatureCollection, OrsError> {
        self.throttle.wait().await;

        let url = format!("{}{endpoint}", self.config.base());
        let request = authorize(self.client.get(&url), &self.config.api_key).query(params);
        let features: FeatureCollection =
            send_json(request, self.config.geocode_timeout_secs).await?;

        debug!(endpoint, count = features.features.len(), "Geocoding response");
        Ok(features)
    }
}

#[async_trait]
impl GeocodingClient for OrsGeocodingClient {
    #[instrument(skip(self, options))]
    async fn search(
        &self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<FeatureCollection, OrsError> {
        let mut params = vec![("text", text.to_string())];
        if let Some(layers) = &options.layers {
            params.push(("layers", layers.clone()));
        }
        options.push_common(&mut params);
        options.push_focus(&mut params);

        self.get_features("/geocode/search", &params).await
    }

    #[instrument(skip(self, options))]
    async fn search_structured(
        &self,
        address: &str,
        locality: &str,
        options: &SearchOptions,
    ) -> Result<FeatureCollection, OrsError> {
        let mut params = vec![
            ("address", address.to_string()),
            ("locality", locality.to_string()),
        ];
        options.push_common(&mut params);

        self.get_features("/geocode/search/structured", &params)
            .await
    }

    #[instrument(skip(self, options))]
    async fn autocomplete(
        &self,
        text: &str,
        options: &SearchOptions,
    ) -> Result<FeatureCollection, OrsError> {
        let mut params = vec![("text", text.to_string())];
        options.push_common(&mut params);
        options.push_focus(&mut params);

        self.get_features("/geocode/autocomplete", &params).await
    }
}
