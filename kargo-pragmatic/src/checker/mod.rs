//! This module provides functionality to automatically check that given solution is feasible
//! which means that there is no capacity, assignment or cost violations.

#[cfg(test)]
#[path = "../../tests/unit/checker/checker_test.rs"]
mod checker_test;

use crate::format::problem::*;
use crate::format::solution::*;
use std::collections::{BTreeMap, HashSet};

mod assignment;
use self::assignment::check_assignment;

mod capacity;
use self::capacity::check_vehicle_load;

mod costs;
use self::costs::check_costs;

/// Stores problem and solution together and provides some helper methods.
pub struct CheckerContext {
    /// An original problem definition.
    pub problem: Problem,
    /// Solution to be checked.
    pub solution: Solution,

    demand: BTreeMap<u64, i64>,
}

impl CheckerContext {
    /// Creates an instance of `CheckerContext`.
    pub fn new(problem: Problem, solution: Solution) -> Self {
        let known = problem.stations.iter().map(|station| station.id).collect::<HashSet<_>>();
        let demand = problem
            .cargo
            .iter()
            .filter_map(|cargo| match (cargo.station_id, cargo.weight) {
                (Some(station_id), Some(weight)) if weight > 0 && known.contains(&station_id) => {
                    Some((station_id, weight))
                }
                _ => None,
            })
            .fold(BTreeMap::new(), |mut acc, (station_id, weight)| {
                let total: &mut i64 = acc.entry(station_id).or_insert(0);
                *total = total.saturating_add(weight);
                acc
            });

        Self { problem, solution, demand }
    }

    /// Performs solution check.
    pub fn check(&self) -> Result<(), Vec<String>> {
        // avoid duplicates keeping original order
        let (_, errors) = check_vehicle_load(self)
            .err()
            .into_iter()
            .chain(check_assignment(self).err())
            .chain(check_costs(self).err())
            .flatten()
            .fold((HashSet::new(), Vec::default()), |(mut used, mut errors), error| {
                if !used.contains(&error) {
                    errors.push(error.clone());
                    used.insert(error);
                }

                (used, errors)
            });

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Gets vehicle by its id.
    fn get_vehicle(&self, vehicle_id: &str) -> Result<&Vehicle, String> {
        self.problem
            .vehicles
            .iter()
            .find(|vehicle| vehicle.id == vehicle_id)
            .ok_or_else(|| format!("cannot find vehicle with id '{vehicle_id}'"))
    }

    /// Gets aggregated pending demand per station.
    fn get_demand(&self) -> &BTreeMap<u64, i64> {
        &self.demand
    }

    /// Gets effective run parameters used to produce the solution.
    fn get_params(&self) -> kargo_core::models::problem::RunParams {
        create_run_params(Some(&self.solution.params))
    }
}
