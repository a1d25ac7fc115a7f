//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! OpenRouteService clients, and provides configuration, logging and
//! retry support.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod retry;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::{build_pipeline, build_pipeline_with_key};
pub use config::{
    AppConfig, EmissionsAppConfig, GeoLocationConfig, GeocodingAppConfig, LoggingConfig,
    OrsAppConfig, PipelineAppConfig, RetryAppConfig, RoutingAppConfig,
};
pub use retry::{RetryConfig, RetryResult, Retryable, retry, with_retry};
pub use telemetry::{TelemetryError, init_logging};
