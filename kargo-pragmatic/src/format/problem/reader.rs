#[cfg(test)]
#[path = "../../../tests/unit/format/problem/reader_test.rs"]
mod reader_test;

use super::*;
use crate::validation::ValidationContext;
use kargo_core::models::common::Coordinate;
use kargo_core::models::problem::{
    Cargo as CoreCargo, Hub, RunParams, Station as CoreStation, StationRegistry, Vehicle as CoreVehicle,
};
use std::sync::Arc;

pub(super) fn map_to_problem(problem: Problem, routing: &RoutingContext) -> Result<CoreProblem, MultiFormatError> {
    ValidationContext::new(&problem).validate()?;

    let hub = problem.hub.as_ref().map_or_else(Hub::default, |hub| Hub {
        name: hub.name.clone().unwrap_or_else(|| Hub::default().name),
        location: Coordinate::new(hub.latitude, hub.longitude),
    });

    let stations = problem
        .stations
        .iter()
        .map(|station| CoreStation {
            id: station.id,
            name: station.name.clone(),
            location: Coordinate::new(station.latitude, station.longitude),
        })
        .collect();
    let stations = Arc::new(StationRegistry::new(hub, stations));

    let cargo = problem
        .cargo
        .iter()
        .filter_map(|cargo| match (cargo.station_id, cargo.weight) {
            (Some(station_id), Some(weight)) => Some(CoreCargo { station_id, weight }),
            _ => None,
        })
        .collect();

    let fleet = problem
        .vehicles
        .iter()
        .filter_map(|vehicle| {
            vehicle.capacity.map(|capacity| CoreVehicle {
                id: vehicle.id.clone(),
                capacity,
                is_company: vehicle.is_company_owned.unwrap_or(true),
            })
        })
        .collect();

    let transport = routing.create_transport(stations.clone());

    Ok(CoreProblem { stations, cargo, fleet, params: create_run_params(problem.params.as_ref()), transport })
}

/// Creates normalized run parameters from optional json parameters.
pub fn create_run_params(params: Option<&RunParameters>) -> RunParams {
    let params = params.cloned().unwrap_or_default();

    RunParams::normalized(
        params.fuel_cost_per_km,
        params.rental_cost_per_vehicle,
        params.rental_capacity_kg,
        params.max_company_vehicles.filter(|&max| max > 0).map(|max| max as usize),
    )
}
