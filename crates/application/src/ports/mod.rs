//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod directions_port;
mod emission_port;
mod geocoding_port;

#[cfg(test)]
pub use directions_port::MockDirectionsPort;
pub use directions_port::{
    AlternativeRoutes, AlternativesRequest, DirectionsPort, RouteAlternative, SingleRouteRequest,
};
#[cfg(test)]
pub use emission_port::MockEmissionPort;
pub use emission_port::EmissionPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
pub use geocoding_port::{GeocodeCandidate, GeocodeRequest, GeocodingPort, SEARCH_LAYERS};
