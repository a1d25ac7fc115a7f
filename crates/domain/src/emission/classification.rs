//! Vehicle and fuel classification

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Canonical vehicle categories of the factor table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    /// 12-seat passenger traveller
    Traveller12Seater,
    /// 35-seat bus
    Bus35Seater,
    /// 50-seat bus
    Bus50Seater,
    /// Bus of unspecified size
    Bus,
    /// Heavy goods vehicle
    Truck,
    /// Light commercial van
    Van,
    /// Motorbike or scooter
    TwoWheeler,
    /// Battery electric car
    Ev,
    /// Passenger car
    Car,
}

impl VehicleCategory {
    /// Label used in factor keys
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Traveller12Seater => "12-Seater Traveller",
            Self::Bus35Seater => "35-Seater Bus",
            Self::Bus50Seater => "50-Seater Bus",
            Self::Bus => "Bus",
            Self::Truck => "Truck",
            Self::Van => "Van",
            Self::TwoWheeler => "Two-wheeler",
            Self::Ev => "EV",
            Self::Car => "Car",
        }
    }
}

impl fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical fuel categories of the factor table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelCategory {
    /// Diesel
    Diesel,
    /// Petrol / gasoline
    Petrol,
    /// Compressed or liquefied gas
    Cng,
    /// Grid electricity
    Electricity,
    /// Petrol-electric hybrid
    Hybrid,
}

impl FuelCategory {
    /// Label used in factor keys
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Diesel => "Diesel",
            Self::Petrol => "Petrol",
            Self::Cng => "CNG",
            Self::Electricity => "Electricity",
            Self::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for FuelCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[allow(clippy::expect_used)] // Infallible with valid static patterns
static VEHICLE_RULES: LazyLock<Vec<(Regex, VehicleCategory)>> = LazyLock::new(|| {
    [
        (r"12\s*-?\s*seater|traveller", VehicleCategory::Traveller12Seater),
        (r"35\s*-?\s*seater", VehicleCategory::Bus35Seater),
        (r"50\s*-?\s*seater", VehicleCategory::Bus50Seater),
        (r"bus", VehicleCategory::Bus),
        (r"hgv|truck|lorry", VehicleCategory::Truck),
        (r"van", VehicleCategory::Van),
        (r"bike|two|motor", VehicleCategory::TwoWheeler),
        (r"ev|electric", VehicleCategory::Ev),
        (r"car|sedan|hatch|suv", VehicleCategory::Car),
    ]
    .into_iter()
    .map(|(pattern, category)| (Regex::new(pattern).expect("valid vehicle pattern"), category))
    .collect()
});

#[allow(clippy::expect_used)] // Infallible with valid static patterns
static FUEL_RULES: LazyLock<Vec<(Regex, FuelCategory)>> = LazyLock::new(|| {
    [
        (r"diesel", FuelCategory::Diesel),
        (r"petrol|gasoline", FuelCategory::Petrol),
        (r"cng|lng|lpg", FuelCategory::Cng),
        (r"electric|ev", FuelCategory::Electricity),
        (r"hybrid", FuelCategory::Hybrid),
    ]
    .into_iter()
    .map(|(pattern, category)| (Regex::new(pattern).expect("valid fuel pattern"), category))
    .collect()
});

/// Map a vehicle description to a category; unmatched text is a car
#[must_use]
pub fn classify_vehicle(description: &str) -> VehicleCategory {
    let lower = description.to_lowercase();
    VEHICLE_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map_or(VehicleCategory::Car, |(_, category)| *category)
}

/// Map a fuel description to a category; unmatched text is diesel
#[must_use]
pub fn classify_fuel(description: &str) -> FuelCategory {
    let lower = description.to_lowercase();
    FUEL_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(&lower))
        .map_or(FuelCategory::Diesel, |(_, category)| *category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_rules_are_ordered() {
        assert_eq!(classify_vehicle("Electric Bus"), VehicleCategory::Bus);
        assert_eq!(classify_vehicle("HGV 16T"), VehicleCategory::Truck);
        assert_eq!(classify_vehicle("Tata Ace Van"), VehicleCategory::Van);
        assert_eq!(classify_vehicle("Motorbike"), VehicleCategory::TwoWheeler);
        assert_eq!(classify_vehicle("Electric hatchback"), VehicleCategory::Ev);
        assert_eq!(classify_vehicle("SUV"), VehicleCategory::Car);
    }

    #[test]
    fn seater_variants() {
        assert_eq!(
            classify_vehicle("12-Seater Traveller"),
            VehicleCategory::Traveller12Seater
        );
        assert_eq!(classify_vehicle("35 Seater Bus"), VehicleCategory::Bus35Seater);
        assert_eq!(classify_vehicle("50-seater coach"), VehicleCategory::Bus50Seater);
    }

    #[test]
    fn unknown_vehicle_defaults_to_car() {
        assert_eq!(classify_vehicle("Tempo"), VehicleCategory::Car);
        assert_eq!(classify_vehicle(""), VehicleCategory::Car);
    }

    #[test]
    fn fuel_rules() {
        assert_eq!(classify_fuel("High Speed Diesel"), FuelCategory::Diesel);
        assert_eq!(classify_fuel("Gasoline"), FuelCategory::Petrol);
        assert_eq!(classify_fuel("CNG"), FuelCategory::Cng);
        assert_eq!(classify_fuel("Electric"), FuelCategory::Electricity);
        assert_eq!(classify_fuel("Hybrid"), FuelCategory::Hybrid);
        assert_eq!(classify_fuel("unknown"), FuelCategory::Diesel);
    }

    #[test]
    fn labels() {
        assert_eq!(VehicleCategory::TwoWheeler.to_string(), "Two-wheeler");
        assert_eq!(FuelCategory::Cng.to_string(), "CNG");
    }
}
