//! Geocoding adapter - Implements GeocodingPort using integration_ors

use application::error::ApplicationError;
use application::ports::{GeocodeCandidate, GeocodeRequest, GeocodingPort};
use async_trait::async_trait;
use domain::value_objects::Coordinate;
use integration_ors::{
    Feature, FeatureCollection, GeocodingClient, OrsConfig, OrsError, OrsGeocodingClient,
    SearchOptions,
};
use tracing::{debug, instrument, warn};

use super::map_ors_error;
use crate::retry::{RetryConfig, retry};

/// Adapter for OpenRouteService geocoding (Pelias)
pub struct OrsGeocodingAdapter {
    client: OrsGeocodingClient,
    retry_config: RetryConfig,
}

impl std::fmt::Debug for OrsGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrsGeocodingAdapter")
            .field("client", &"OrsGeocodingClient")
            .field("retry_config", &self.retry_config)
            .finish()
    }
}

impl OrsGeocodingAdapter {
    /// Create a new adapter around an existing client
    pub const fn new(client: OrsGeocodingClient, retry_config: RetryConfig) -> Self {
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
        let client = OrsGeocodingClient::new(config)
            .map_err(|e| map_ors_error("Geocoding client setup", e))?;
        Ok(Self::new(client, retry_config))
    }

    async fn execute(&self, request: &GeocodeRequest) -> Result<FeatureCollection, OrsError> {
        match request {
            GeocodeRequest::Search {
                text,
                layers,
                country,
                focus,
                size,
            } => {
                let options = SearchOptions {
                    layers: layers.clone(),
                    country: country.clone(),
                    focus: *focus,
                    size: *size,
                };
                self.client.search(text, &options).await
            },
            GeocodeRequest::Structured {
                address,
                locality,
                country,
                size,
            } => {
                let options = SearchOptions {
                    country: country.clone(),
                    size: *size,
                    ..SearchOptions::default()
                };
                self.client
                    .search_structured(address, locality, &options)
                    .await
            },
            GeocodeRequest::Autocomplete {
                text,
                country,
                focus,
                size,
            } => {
                let options = SearchOptions {
                    layers: None,
                    country: country.clone(),
                    focus: *focus,
                    size: *size,
                };
                self.client.autocomplete(text, &options).await
            },
        }
    }
}

/// Convert a feature into a candidate; features without a valid point are dropped
fn to_candidate(feature: Feature) -> Option<GeocodeCandidate> {
    let (lon, lat) = feature.lon_lat()?;
    let coordinate = match Coordinate::new(lon, lat) {
        Ok(coordinate) => coordinate,
        Err(e) => {
            warn!(error = %e, "Skipping feature with invalid coordinates");
            return None;
        },
    };

    Some(GeocodeCandidate {
        coordinate,
        label: feature.label().map(ToString::to_string),
        layer: feature.layer().map(ToString::to_string),
        properties: feature.properties,
    })
}

#[async_trait]
impl GeocodingPort for OrsGeocodingAdapter {
    #[instrument(skip(self, request), fields(kind = request.kind()))]
    async fn fetch_candidates(
        &self,
        request: &GeocodeRequest,
    ) -> Result<Vec<GeocodeCandidate>, ApplicationError> {
        let collection = retry(&self.retry_config, || self.execute(request))
            .await
            .map_err(|e| map_ors_error("Geocoding", e))?;

        let candidates: Vec<GeocodeCandidate> = collection
            .features
            .into_iter()
            .filter_map(to_candidate)
            .collect();

        debug!(count = candidates.len(), "Geocoding candidates received");
        Ok(candidates)
    }
}
