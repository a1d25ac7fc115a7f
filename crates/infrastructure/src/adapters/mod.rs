//! Adapters implementing application ports
//!
//! Each adapter bridges a port to an `integration_ors` client and applies
//! the shared retry policy.

mod ors_directions_adapter;
mod ors_geocoding_adapter;

use application::error::ApplicationError;
use integration_ors::OrsError;

pub use ors_directions_adapter::OrsDirectionsAdapter;
pub use ors_geocoding_adapter::OrsGeocodingAdapter;

/// Map an OpenRouteService error to the application error type
pub(crate) fn map_ors_error(context: &str, error: OrsError) -> ApplicationError {
    match error {
        OrsError::RateLimitExceeded { .. } => ApplicationError::RateLimited,
        OrsError::ConfigurationError(msg) => ApplicationError::Configuration(msg),
        other => ApplicationError::ExternalService(format!("{context} failed: {other}")),
    }
}
