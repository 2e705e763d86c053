//! Contains logic to configure and prepare a solver run.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/overrides_test.rs"]
mod overrides_test;

pub mod config;

use kargo_pragmatic::format::problem::{Problem, RunParameters};

/// Run parameters specified on command line. They take precedence over problem parameters.
#[derive(Clone, Debug, Default)]
pub struct ParamsOverrides {
    /// Fuel cost per kilometer.
    pub fuel_cost_per_km: Option<f64>,
    /// Cost of one rental vehicle.
    pub rental_cost_per_vehicle: Option<f64>,
    /// Rental vehicle capacity in kilograms.
    pub rental_capacity_kg: Option<i64>,
    /// Maximum amount of company vehicles.
    pub max_company_vehicles: Option<i64>,
}

impl ParamsOverrides {
    /// Returns true if no parameter is overridden.
    pub fn is_empty(&self) -> bool {
        self.fuel_cost_per_km.is_none()
            && self.rental_cost_per_vehicle.is_none()
            && self.rental_capacity_kg.is_none()
            && self.max_company_vehicles.is_none()
    }
}

/// Applies run parameter overrides to the problem.
pub fn apply_params_overrides(problem: Problem, overrides: &ParamsOverrides) -> Problem {
    if overrides.is_empty() {
        return problem;
    }

    let params = problem.params.clone().unwrap_or_default();

    Problem {
        params: Some(RunParameters {
            fuel_cost_per_km: overrides.fuel_cost_per_km.or(params.fuel_cost_per_km),
            rental_cost_per_vehicle: overrides.rental_cost_per_vehicle.or(params.rental_cost_per_vehicle),
            rental_capacity_kg: overrides.rental_capacity_kg.or(params.rental_capacity_kg),
            max_company_vehicles: overrides.max_company_vehicles.or(params.max_company_vehicles),
        }),
        ..problem
    }
}
