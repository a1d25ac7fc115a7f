//! Value Objects - Immutable, identity-less domain primitives

mod coordinate;
mod place_query;
mod travel_profile;

pub use coordinate::{Coordinate, EARTH_RADIUS_KM, haversine};
pub use place_query::PlaceQuery;
pub use travel_profile::{RoutePreference, TravelProfile};
