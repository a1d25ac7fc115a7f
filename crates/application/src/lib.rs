//! Application layer - Use cases and orchestration
//!
//! Contains the geocode cascade, route resolution with fallback and the
//! per-row trip pipeline, plus the port definitions they depend on.
//! Infrastructure adapters implement the ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
