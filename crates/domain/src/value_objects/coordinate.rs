//! Geographic coordinate value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Mean Earth radius used for great-circle distances
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic position in longitude/latitude order
///
/// The order matches the wire format of the geocoding and directions
/// backends (`[lon, lat]`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
}

impl Coordinate {
    /// Create a new coordinate with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if longitude is not in [-180, 180]
    /// or latitude is not in [-90, 90] (NaN is rejected as well)
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, DomainError> {
        if !(-180.0..=180.0).contains(&longitude) || !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::invalid_coordinates(longitude, latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Create a coordinate without validation (for trusted constants)
    ///
    /// Caller must ensure longitude is in [-180, 180] and latitude in [-90, 90]
    #[must_use]
    pub const fn new_unchecked(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// `[lon, lat]` pair as sent to the directions backend
    #[must_use]
    pub const fn to_lon_lat(&self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// Great-circle distance to another coordinate in kilometers
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        haversine(self, other)
    }
}

/// Great-circle distance between two coordinates in kilometers
///
/// Haversine formula with a fixed Earth radius of 6371 km:
/// `a = sin²(Δφ/2) + cos φ1·cos φ2·sin²(Δλ/2)`, `d = 2R·atan2(√a, √(1−a))`.
#[must_use]
pub fn haversine(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1_rad = from.latitude.to_radians();
    let lat2_rad = to.latitude.to_radians();
    let delta_lat = (to.latitude - from.latitude).to_radians();
    let delta_lon = (to.longitude - from.longitude).to_radians();

    let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
        (delta_lon / 2.0).sin().powi(2),
        (delta_lat / 2.0).sin().powi(2),
    );
    // Rounding can push `a` a hair above 1.0 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

#[derive(Deserialize)]
struct RawCoordinate {
    longitude: f64,
    latitude: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = DomainError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.longitude, raw.latitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let c = Coordinate::new(77.5946, 12.9716).expect("valid coordinates");
        assert!((c.longitude() - 77.5946).abs() < f64::EPSILON);
        assert!((c.latitude() - 12.9716).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(Coordinate::new(180.0, 90.0).is_ok());
        assert!(Coordinate::new(-180.0, -90.0).is_ok());
        assert!(Coordinate::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_coordinates() {
        assert!(Coordinate::new(181.0, 0.0).is_err());
        assert!(Coordinate::new(0.0, -91.0).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_invalid_reports_values() {
        let err = Coordinate::new(200.0, 95.0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidCoordinates { longitude, latitude }
                if longitude == 200.0 && latitude == 95.0
        ));
    }

    #[test]
    fn test_one_degree_of_latitude_at_equator() {
        let a = Coordinate::new(0.0, 0.0).expect("valid");
        let b = Coordinate::new(0.0, 1.0).expect("valid");
        assert!((haversine(&a, &b) - 111.19).abs() < 0.5);
    }

    #[test]
    fn test_distance_same_point() {
        let c = Coordinate::new(77.59, 12.97).expect("valid");
        assert!(c.distance_km(&c).abs() < 1e-9);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let bengaluru = Coordinate::new(77.5946, 12.9716).expect("valid");
        let chennai = Coordinate::new(80.2707, 13.0827).expect("valid");
        let d1 = haversine(&bengaluru, &chennai);
        let d2 = haversine(&chennai, &bengaluru);
        assert!((d1 - d2).abs() < 1e-9);
        // Bengaluru to Chennai is roughly 290 km as the crow flies
        assert!((d1 - 290.0).abs() < 15.0);
    }

    #[test]
    fn test_antipodal_points_do_not_produce_nan() {
        let a = Coordinate::new(0.0, 0.0).expect("valid");
        let b = Coordinate::new(180.0, 0.0).expect("valid");
        let d = haversine(&a, &b);
        assert!(d.is_finite());
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 0.01);
    }

    #[test]
    fn test_display_is_lon_lat() {
        let c = Coordinate::new(77.5, 12.25).expect("valid");
        assert_eq!(c.to_string(), "77.5,12.25");
        assert_eq!(c.to_lon_lat(), [77.5, 12.25]);
    }

    #[test]
    fn test_serialization() {
        let c = Coordinate::new(77.5946, 12.9716).expect("valid");
        let json = serde_json::to_string(&c).expect("serialize");
        assert!(json.contains("\"longitude\":77.5946"));

        let back: Coordinate = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(c, back);
    }

    #[test]
    fn test_deserialization_rejects_out_of_range() {
        let result: Result<Coordinate, _> =
            serde_json::from_str(r#"{"longitude": 200.0, "latitude": 10.0}"#);
        assert!(result.is_err());
    }
}
