//! OpenRouteService integration for FleetEmit
//!
//! Provides address geocoding via the Pelias-based
//! [OpenRouteService geocoder](https://openrouteservice.org/dev/#/api-docs/geocode)
//! and road routing via the
//! [directions API](https://openrouteservice.org/dev/#/api-docs/v2/directions).
//!
//! # Architecture
//!
//! The crate follows a client-trait pattern consistent with other integration crates.
//! [`GeocodingClient`] is implemented by [`OrsGeocodingClient`], [`DirectionsClient`]
//! by [`OrsDirectionsClient`]. Both send the API key in the `Authorization`
//! header and can be throttled with [`OrsConfig::min_request_interval_ms`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_ors::{GeocodingClient, OrsConfig, OrsGeocodingClient, SearchOptions};
//!
//! let config = OrsConfig { api_key: key, ..OrsConfig::default() };
//! let client = OrsGeocodingClient::new(&config)?;
//! let features = client.search("MG Road", &SearchOptions::default()).await?;
//! ```

mod config;
mod directions;
mod error;
mod geocoding;
mod http;
mod models;
mod throttle;

pub use config::OrsConfig;
pub use directions::{
    AlternativeRoutesBody, DirectionsClient, DirectionsRequest, OrsDirectionsClient,
};
pub use error::OrsError;
pub use geocoding::{GeocodingClient, OrsGeocodingClient, SearchOptions};
pub use models::{
    DirectionsResponse, Feature, FeatureCollection, Geometry, Route, RouteFeature,
    RouteFeatureProperties, RouteSummary,
};
