//! This module provides functionality to validate problem definition for logical correctness.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::format::problem::*;
use crate::format::{FormatError, MultiFormatError};
use crate::utils::combine_error_results;

mod cargo;
use self::cargo::validate_cargo;

mod params;
use self::params::validate_params;

mod stations;
use self::stations::validate_stations;

mod vehicles;
use self::vehicles::validate_vehicles;

/// Keeps problem definition under validation.
pub struct ValidationContext<'a> {
    /// An original problem definition.
    pub problem: &'a Problem,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(problem: &'a Problem) -> Self {
        Self { problem }
    }

    /// Validates problem on set of rules, reporting all found errors at once.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = [validate_stations(self), validate_cargo(self), validate_vehicles(self), validate_params(self)]
            .into_iter()
            .flat_map(|result| result.err().unwrap_or_default())
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    /// Get list of stations from the problem.
    fn stations(&self) -> impl Iterator<Item = &Station> {
        self.problem.stations.iter()
    }

    /// Get list of cargo records with their positions.
    fn cargo(&self) -> impl Iterator<Item = (usize, &Cargo)> {
        self.problem.cargo.iter().enumerate()
    }

    /// Get list of vehicles from the problem.
    fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.problem.vehicles.iter()
    }
}

fn is_valid_coordinate(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90. ..=90.).contains(&latitude)
        && (-180. ..=180.).contains(&longitude)
}

fn is_valid_cost(cost: Option<f64>) -> bool {
    cost.is_none_or(|cost| cost.is_finite() && cost >= 0.)
}
