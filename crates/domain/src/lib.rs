//! Domain layer for FleetEmit
//!
//! Contains the value objects, result entities and pure logic of the
//! fleet-emission pipeline: coordinates and great-circle distance, inline
//! coordinate parsing, place-name clean-up, route summaries and the
//! well-to-wheel emission model. This layer performs no I/O.

pub mod emission;
pub mod entities;
pub mod errors;
pub mod text;
pub mod value_objects;

pub use emission::{EmissionFactorOverrides, EmissionModel, FuelCategory, VehicleCategory};
pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
