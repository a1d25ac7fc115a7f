//! Application services - Use case implementations

mod geocode_resolver;
mod route_resolver;
mod trip_pipeline;

pub use geocode_resolver::{
    CascadeStrategy, DEFAULT_CANDIDATE_BATCH_SIZE, GeocodeOutcome, GeocodeResolver,
    GeocoderSettings, StageOutcome, choose_candidate,
};
pub use route_resolver::{RouteResolution, RoutePath, RouteResolver, RoutingSettings};
pub use trip_pipeline::{PipelineSettings, TripPipeline};
