//! WTW factor table and emission calculation

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::classification::{FuelCategory, VehicleCategory, classify_fuel, classify_vehicle};

/// Default well-to-wheel factor in kg CO2e per km, if the pair is tabulated
#[must_use]
pub const fn default_factor(vehicle: VehicleCategory, fuel: FuelCategory) -> Option<f64> {
    use FuelCategory::{Diesel, Electricity, Petrol};
    use VehicleCategory::{
        Bus, Bus35Seater, Bus50Seater, Car, Ev, Traveller12Seater, Truck, TwoWheeler, Van,
    };

    match (vehicle, fuel) {
        (Car, Petrol) => Some(0.180),
        (Car, Diesel) => Some(0.164),
        (Van, Diesel) => Some(0.280),
        (Truck, Diesel) => Some(0.650),
        (Bus | Bus50Seater, Diesel) => Some(0.810),
        (Bus35Seater, Diesel) => Some(0.840),
        (Traveller12Seater, Diesel) => Some(0.390),
        (TwoWheeler, Petrol) => Some(0.070),
        (Ev, Electricity) => Some(0.050),
        _ => None,
    }
}

/// Factor overrides keyed by `"Vehicle|Fuel"` (e.g. `"Car|Petrol"`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmissionFactorOverrides(HashMap<String, f64>);

impl EmissionFactorOverrides {
    /// Create an empty override set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an override
    #[must_use]
    pub fn with_factor(mut self, key: impl Into<String>, factor: f64) -> Self {
        self.0.insert(key.into(), factor);
        self
    }

    /// Look up the override for a category pair
    ///
    /// Keys match case-insensitively.
    #[must_use]
    pub fn get(&self, vehicle: VehicleCategory, fuel: FuelCategory) -> Option<f64> {
        let key = factor_key(vehicle, fuel);
        self.0.get(&key).copied().or_else(|| {
            self.0
                .iter()
                .find(|(candidate, _)| candidate.trim().eq_ignore_ascii_case(&key))
                .map(|(_, factor)| *factor)
        })
    }

    /// Number of configured overrides
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no overrides are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys whose factor is negative or not finite
    #[must_use]
    pub fn invalid_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .0
            .iter()
            .filter(|(_, factor)| !factor.is_finite() || **factor < 0.0)
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl From<HashMap<String, f64>> for EmissionFactorOverrides {
    fn from(map: HashMap<String, f64>) -> Self {
        Self(map)
    }
}

fn factor_key(vehicle: VehicleCategory, fuel: FuelCategory) -> String {
    format!("{}|{}", vehicle.label(), fuel.label())
}

/// Emission calculator over the default table plus explicit overrides
#[derive(Debug, Clone, Default)]
pub struct EmissionModel {
    overrides: EmissionFactorOverrides,
}

impl EmissionModel {
    /// Model using only the built-in table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Model consulting the overrides before the built-in table
    #[must_use]
    pub const fn with_overrides(overrides: EmissionFactorOverrides) -> Self {
        Self { overrides }
    }

    /// Factor for free-text vehicle and fuel descriptions
    ///
    /// Overrides that are negative or not finite are ignored.
    #[must_use]
    pub fn factor(&self, vehicle_type: &str, fuel_type: &str) -> Option<f64> {
        let vehicle = classify_vehicle(vehicle_type);
        let fuel = classify_fuel(fuel_type);

        self.overrides
            .get(vehicle, fuel)
            .filter(|factor| factor.is_finite() && *factor >= 0.0)
            .or_else(|| default_factor(vehicle, fuel))
    }

    /// Emissions in kg CO2e for a distance, if a factor is known
    #[must_use]
    pub fn emissions(&self, distance_km: f64, vehicle_type: &str, fuel_type: &str) -> Option<f64> {
        self.factor(vehicle_type, fuel_type)
            .map(|factor| distance_km * factor)
    }
}
