//! Text handling for endpoint descriptions
//!
//! Everything here is pure and total: inline coordinate detection, the
//! stop-phrase simplifier used for the last geocoding retry, place-name
//! normalisation and city-hint detection.

mod city_hint;
mod coordinate_parser;
mod place_name;
mod query_simplifier;

pub use city_hint::{DEFAULT_KNOWN_CITIES, detect_city_hint};
pub use coordinate_parser::{CoordinatePair, parse_coordinate};
pub use place_name::normalize_place_name;
pub use query_simplifier::{STOP_PHRASES, simplify_query};
