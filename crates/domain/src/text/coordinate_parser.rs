//! Inline "lat,lon" detection

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::Coordinate};

#[allow(clippy::expect_used)] // Infallible with a valid static pattern
static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(-?\d+\.?\d*)\s*,\s*(-?\d+\.?\d*)\s*$").expect("valid coordinate pattern")
});

/// A parsed number pair in longitude/latitude order, not yet range-checked
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinatePair {
    /// Longitude as interpreted by the parser
    pub longitude: f64,
    /// Latitude as interpreted by the parser
    pub latitude: f64,
}

impl CoordinatePair {
    /// Validate the pair into a [`Coordinate`]
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if either value is out of range.
    pub fn to_coordinate(self) -> Result<Coordinate, DomainError> {
        Coordinate::new(self.longitude, self.latitude)
    }
}

/// Parse a "number, number" string into a coordinate pair
///
/// When the first value fits the latitude range and the second fits the
/// longitude range, the text is read as "lat,lon" and swapped. Anything else
/// is taken to already be "lon,lat".
///
/// The heuristic is ambiguous when both values fit the latitude range
/// (`"12, 34"`): the first value is always taken as the latitude.
///
/// Returns `None` when the text is not a number pair.
#[must_use]
pub fn parse_coordinate(text: &str) -> Option<CoordinatePair> {
    let captures = COORDINATE_PATTERN.captures(text.trim())?;
    let a: f64 = captures.get(1)?.as_str().parse().ok()?;
    let b: f64 = captures.get(2)?.as_str().parse().ok()?;

    if (-90.0..=90.0).contains(&a) && (-180.0..=180.0).contains(&b) {
        Some(CoordinatePair {
            longitude: b,
            latitude: a,
        })
    } else {
        Some(CoordinatePair {
            longitude: a,
            latitude: b,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_is_swapped() {
        let pair = parse_coordinate("50.0, 100.0").expect("coordinate");
        assert_eq!(
            pair,
            CoordinatePair {
                longitude: 100.0,
                latitude: 50.0
            }
        );
    }

    #[test]
    fn bengaluru_lat_lon() {
        let c = parse_coordinate("12.9716, 77.5946")
            .expect("coordinate")
            .to_coordinate()
            .expect("in range");
        assert!((c.longitude() - 77.5946).abs() < f64::EPSILON);
        assert!((c.latitude() - 12.9716).abs() < f64::EPSILON);
    }

    #[test]
    fn lon_lat_is_kept_when_first_value_exceeds_latitude_range() {
        let pair = parse_coordinate("100.0,50.0").expect("coordinate");
        assert_eq!(pair.longitude, 100.0);
        assert_eq!(pair.latitude, 50.0);
    }

    #[test]
    fn ambiguous_pair_reads_first_value_as_latitude() {
        let pair = parse_coordinate("12, 34").expect("coordinate");
        assert_eq!(pair.latitude, 12.0);
        assert_eq!(pair.longitude, 34.0);
    }

    #[test]
    fn negative_values_and_whitespace() {
        let pair = parse_coordinate("  -33.8688 ,  151.2093 ").expect("coordinate");
        assert_eq!(pair.latitude, -33.8688);
        assert_eq!(pair.longitude, 151.2093);
    }

    #[test]
    fn out_of_range_pair_is_parsed_but_fails_validation() {
        let pair = parse_coordinate("200, 95").expect("coordinate");
        assert_eq!(pair.longitude, 200.0);
        assert_eq!(pair.latitude, 95.0);
        assert!(matches!(
            pair.to_coordinate(),
            Err(DomainError::InvalidCoordinates { .. })
        ));
    }

    #[test]
    fn place_names_are_not_coordinates() {
        assert!(parse_coordinate("Main Street").is_none());
        assert!(parse_coordinate("MG Road, Bengaluru").is_none());
        assert!(parse_coordinate("12.5").is_none());
        assert!(parse_coordinate("").is_none());
        assert!(parse_coordinate("1,2,3").is_none());
    }

    #[test]
    fn trailing_dot_is_accepted() {
        let pair = parse_coordinate("12., 77.").expect("coordinate");
        assert_eq!(pair.latitude, 12.0);
        assert_eq!(pair.longitude, 77.0);
    }
}
