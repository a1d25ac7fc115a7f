//! Well-to-wheel emission model
//!
//! Vehicle and fuel descriptions are free text in the input. They are mapped
//! to canonical categories by ordered pattern lists (first match wins, with a
//! fixed default), then looked up in a static factor table that can be
//! overridden per `"Vehicle|Fuel"` key by configuration.

mod classification;
mod factors;

pub use classification::{FuelCategory, VehicleCategory, classify_fuel, classify_vehicle};
pub use factors::{EmissionFactorOverrides, EmissionModel, default_factor};
