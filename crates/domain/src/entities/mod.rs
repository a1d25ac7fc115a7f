//! Entities - results produced by the trip pipeline

mod batch_summary;
mod route_summary;
mod trip;

pub use batch_summary::BatchSummary;
pub use route_summary::RouteSummary;
pub use trip::{EmissionEstimate, TripFailure, TripResult, TripRow};
