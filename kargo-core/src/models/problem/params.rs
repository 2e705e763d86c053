#[cfg(test)]
#[path = "../../../tests/unit/models/problem/params_test.rs"]
mod params_test;

use crate::models::common::{Cost, Weight};

/// A default fuel cost per kilometer.
pub const DEFAULT_FUEL_COST_PER_KM: Cost = 1.;
/// A default cost of one rental vehicle.
pub const DEFAULT_RENTAL_COST: Cost = 200.;
/// A default capacity of rental vehicle in kilograms.
pub const DEFAULT_RENTAL_CAPACITY: Weight = 500;

/// Parameters of a single assignment run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunParams {
    /// Fuel cost per kilometer, applies to every vehicle.
    pub fuel_cost_per_km: Cost,
    /// Cost of using one rental vehicle.
    pub rental_cost: Cost,
    /// Capacity of rental vehicle.
    pub rental_capacity: Weight,
    /// Maximum amount of company vehicles to use. `None` means unlimited.
    pub max_company_vehicles: Option<usize>,
}

impl RunParams {
    /// Creates run parameters from optional values, falling back to defaults. Non positive
    /// rental capacity is replaced by the default one, zero company vehicle cap means unlimited.
    pub fn normalized(
        fuel_cost_per_km: Option<Cost>,
        rental_cost: Option<Cost>,
        rental_capacity: Option<Weight>,
        max_company_vehicles: Option<usize>,
    ) -> Self {
        Self {
            fuel_cost_per_km: fuel_cost_per_km.unwrap_or(DEFAULT_FUEL_COST_PER_KM),
            rental_cost: rental_cost.unwrap_or(DEFAULT_RENTAL_COST),
            rental_capacity: rental_capacity.filter(|&capacity| capacity > 0).unwrap_or(DEFAULT_RENTAL_CAPACITY),
            max_company_vehicles: max_company_vehicles.filter(|&max| max > 0),
        }
    }

    /// Returns true if one more company vehicle can be used when `used` are already taken.
    pub fn can_use_company_vehicle(&self, used: usize) -> bool {
        self.max_company_vehicles.is_none_or(|max| used < max)
    }
}

impl Default for RunParams {
    fn default() -> Self {
        Self::normalized(None, None, None, None)
    }
}
