//! Directions backend profile and preference names

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle profile used for routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TravelProfile {
    /// Passenger car routing
    #[default]
    #[serde(rename = "driving-car")]
    DrivingCar,
    /// Heavy goods vehicle routing (weight and height restrictions apply)
    #[serde(rename = "driving-hgv")]
    DrivingHgv,
}

impl TravelProfile {
    /// Profile name as used in the directions URL path
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::DrivingCar => "driving-car",
            Self::DrivingHgv => "driving-hgv",
        }
    }
}

impl fmt::Display for TravelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "driving-car" | "car" => Ok(Self::DrivingCar),
            "driving-hgv" | "hgv" | "truck" => Ok(Self::DrivingHgv),
            _ => Err(format!(
                "Invalid travel profile: {s}. Use 'driving-car' or 'driving-hgv'"
            )),
        }
    }
}

/// Route weighting requested from the directions backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutePreference {
    /// Backend's balanced default
    #[default]
    Recommended,
    /// Minimise distance
    Shortest,
    /// Minimise travel time
    Fastest,
}

impl RoutePreference {
    /// Wire value of the preference
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Shortest => "shortest",
            Self::Fastest => "fastest",
        }
    }
}

impl fmt::Display for RoutePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_default_is_car() {
        assert_eq!(TravelProfile::default(), TravelProfile::DrivingCar);
    }

    #[test]
    fn profile_from_str() {
        assert_eq!(
            "driving-hgv".parse::<TravelProfile>().unwrap(),
            TravelProfile::DrivingHgv
        );
        assert_eq!(
            "CAR".parse::<TravelProfile>().unwrap(),
            TravelProfile::DrivingCar
        );
        assert!("cycling".parse::<TravelProfile>().is_err());
    }

    #[test]
    fn profile_serializes_to_wire_name() {
        assert_eq!(
            serde_json::to_string(&TravelProfile::DrivingHgv).unwrap(),
            "\"driving-hgv\""
        );
    }

    #[test]
    fn preference_display() {
        assert_eq!(RoutePreference::Recommended.to_string(), "recommended");
        assert_eq!(RoutePreference::Shortest.to_string(), "shortest");
        assert_eq!(
            serde_json::to_string(&RoutePreference::Fastest).unwrap(),
            "\"fastest\""
        );
    }
}
