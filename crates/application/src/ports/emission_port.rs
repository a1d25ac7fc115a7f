//! Emission calculation port

#[cfg(test)]
use mockall::automock;

use domain::EmissionModel;

/// Port for turning a distance into kg CO2e
#[cfg_attr(test, automock)]
pub trait EmissionPort: Send + Sync {
    /// Emissions for `distance_km` with the given vehicle and fuel descriptions
    ///
    /// Returns `None` when no factor exists for the combination.
    fn emissions(&self, distance_km: f64, vehicle_type: &str, fuel_type: &str) -> Option<f64>;
}

impl EmissionPort for EmissionModel {
    fn emissions(&self, distance_km: f64, vehicle_type: &str, fuel_type: &str) -> Option<f64> {
        Self::emissions(self, distance_km, vehicle_type, fuel_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emission_model_implements_port() {
        let port: &dyn EmissionPort = &EmissionModel::new();
        let kg = port.emissions(100.0, "Truck", "Diesel");
        assert!(kg.is_some_and(|kg| (kg - 65.0).abs() < 1e-9));
    }

    #[test]
    fn unknown_combination_has_no_emissions() {
        let port: &dyn EmissionPort = &EmissionModel::new();
        assert_eq!(port.emissions(10.0, "Truck", "Electricity"), None);
    }
}
