//! Logging infrastructure
//!
//! Structured `tracing` output on stderr, leaving stdout free for results.

mod logging;

pub use logging::{TelemetryError, init_logging};
