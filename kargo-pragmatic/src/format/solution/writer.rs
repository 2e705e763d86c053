#[cfg(test)]
#[path = "../../../tests/unit/format/solution/writer_test.rs"]
mod writer_test;

use crate::format::problem::RunParameters;
use crate::format::solution::*;
use kargo_core::models::Problem;
use kargo_core::models::common::{HUB_ID, Weight};
use kargo_core::models::problem::{RunParams, StationRegistry};
use kargo_core::models::solution::{Assignment, AssignmentStatus, RoutePlan};
use std::io::{BufWriter, Write};

type ApiSolution = crate::format::solution::model::Solution;

/// A trait to serialize solution in pragmatic format.
pub trait PragmaticSolution<W: Write> {
    /// Serializes solution in pragmatic json format.
    fn write_pragmatic_json(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), String>;

    /// Serializes solution in pragmatic geo json format.
    fn write_geo_json(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), String>;
}

impl<W: Write> PragmaticSolution<W> for Assignment {
    fn write_pragmatic_json(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), String> {
        let solution = create_solution(problem, self);
        serialize_solution(writer, &solution).map_err(|err| err.to_string())?;
        Ok(())
    }

    fn write_geo_json(&self, problem: &Problem, writer: BufWriter<W>) -> Result<(), String> {
        let solution = create_solution(problem, self);
        serialize_solution_as_geojson(writer, problem, &solution).map_err(|err| err.to_string())?;
        Ok(())
    }
}

/// Creates solution.
pub fn create_solution(problem: &Problem, assignment: &Assignment) -> ApiSolution {
    let routes = assignment.routes.iter().map(|plan| create_route(problem.stations.as_ref(), plan)).collect::<Vec<_>>();

    let unserved = assignment
        .unserved
        .iter()
        .map(|&(station_id, weight)| UnservedStation { station_id, weight })
        .collect::<Vec<_>>();

    let rejected = if unserved.is_empty() {
        vec![]
    } else {
        vec![RejectedGroup {
            stations: unserved.iter().map(|station| station.station_id).collect(),
            total_kg: assignment.unserved_weight(),
        }]
    };

    let company_vehicles = routes
        .iter()
        .filter_map(|route| {
            route.vehicle_id.as_ref().map(|id| VehicleUsage { vehicle_id: id.clone(), loaded_kg: route.loaded_kg })
        })
        .collect();

    let summary = &assignment.summary;
    let statistic = Statistic {
        total_distance_km: summary.total_distance,
        total_fuel_cost: summary.total_fuel_cost,
        rental_count: summary.rental_count,
        total_rental_cost: summary.total_rental_cost,
        total_cost: summary.total_cost(),
        served_kg: assignment.served_weight(),
        unserved_kg: assignment.unserved_weight(),
    };

    ApiSolution {
        status: create_status(assignment.status),
        statistic,
        routes,
        unserved,
        rejected,
        company_vehicles,
        params: create_params_echo(&assignment.params),
        extras: Some(Extras {
            iterations: assignment.iterations,
            termination: assignment.termination.map(|reason| format!("{reason:?}")),
        }),
    }
}

fn create_status(status: AssignmentStatus) -> SolutionStatus {
    match status {
        AssignmentStatus::NothingToDo => SolutionStatus::NothingToDo,
        AssignmentStatus::FullyServed => SolutionStatus::FullyServed,
        AssignmentStatus::PartiallyServed => SolutionStatus::PartiallyServed,
    }
}

fn create_params_echo(params: &RunParams) -> RunParameters {
    RunParameters {
        fuel_cost_per_km: Some(params.fuel_cost_per_km),
        rental_cost_per_vehicle: Some(params.rental_cost),
        rental_capacity_kg: Some(params.rental_capacity),
        max_company_vehicles: params.max_company_vehicles.map(|max| max as i64),
    }
}

fn create_route(stations: &StationRegistry, plan: &RoutePlan) -> Route {
    Route {
        vehicle_id: plan.vehicle.company_id().map(|id| id.to_string()),
        rental: !plan.vehicle.is_company(),
        capacity_kg: plan.vehicle.capacity(),
        stations: plan.stops.clone(),
        pickups: plan.picked.iter().map(|&(station_id, weight)| Pickup { station_id, weight }).collect(),
        loaded_kg: plan.loaded,
        distance_km: plan.distance,
        fuel_cost: plan.fuel_cost,
        rental_cost: plan.rental_cost,
        total_cost: plan.total_cost(),
        steps: create_steps(stations, plan),
        path: plan.path.iter().map(|coordinate| [coordinate.lat, coordinate.lng]).collect(),
    }
}

/// Creates per-leg breakdown: one step per stop, the last one leads to the hub.
fn create_steps(stations: &StationRegistry, plan: &RoutePlan) -> Vec<Step> {
    let next_ids = plan.stops.iter().skip(1).copied().chain(std::iter::once(HUB_ID));

    plan.stops
        .iter()
        .zip(next_ids)
        .enumerate()
        .scan(0 as Weight, |carried, (idx, (&from, to))| {
            let picked_kg = plan.picked_at(from);
            *carried += picked_kg;

            Some(Step {
                step: idx + 1,
                from: stations.name_of(from),
                to: stations.name_of(to),
                picked_kg,
                carried_kg: *carried,
            })
        })
        .collect()
}

