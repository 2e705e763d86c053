#[cfg(test)]
#[path = "../../tests/unit/solver/candidates_test.rs"]
mod candidates_test;

use crate::construction::{InsertionContext, build_two_ended_route};
use crate::models::common::{StationId, Weight};
use crate::models::problem::{RunParams, Vehicle, VehicleCandidate, route_distance};
use crate::models::solution::RoutePlan;
use crate::utils::{FLOAT_TOLERANCE, compare_floats_with_tolerance};
use std::cmp::Ordering;

/// Keeps track of company vehicles which are not yet assigned to a route.
#[derive(Clone, Debug)]
pub struct VehiclePool {
    vehicles: Vec<(Vehicle, bool)>,
}

impl VehiclePool {
    /// Creates a pool from company owned vehicles of the fleet, preserving fleet order.
    pub fn new(fleet: &[Vehicle]) -> Self {
        Self { vehicles: fleet.iter().filter(|vehicle| vehicle.is_company).map(|v| (v.clone(), false)).collect() }
    }

    /// Returns amount of used company vehicles.
    pub fn used(&self) -> usize {
        self.vehicles.iter().filter(|(_, is_used)| *is_used).count()
    }

    /// Returns unused company vehicles.
    pub fn unused(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter().filter(|(_, is_used)| !*is_used).map(|(vehicle, _)| vehicle)
    }

    /// Marks first unused vehicle with given id as used. Returns false if there is no such vehicle.
    pub fn mark_used(&mut self, id: &str) -> bool {
        match self.vehicles.iter_mut().find(|(vehicle, is_used)| !*is_used && vehicle.id == id) {
            Some((_, is_used)) => {
                *is_used = true;
                true
            }
            None => false,
        }
    }
}

/// Creates vehicle candidates for one iteration: unused company vehicles with positive capacity,
/// while company vehicle cap allows, followed by exactly one rental candidate.
pub fn create_candidates(pool: &VehiclePool, params: &RunParams) -> Vec<VehicleCandidate> {
    let company = if params.can_use_company_vehicle(pool.used()) {
        pool.unused()
            .filter(|vehicle| vehicle.capacity > 0)
            .map(|vehicle| VehicleCandidate::Company { id: vehicle.id.clone(), capacity: vehicle.capacity })
            .collect()
    } else {
        vec![]
    };

    company.into_iter().chain(std::iter::once(VehicleCandidate::Rental { capacity: params.rental_capacity })).collect()
}

/// Builds a plan for every applicable candidate from the same seed and returns the best one.
pub fn evaluate_candidates(
    ctx: &InsertionContext,
    candidates: &[VehicleCandidate],
    seed: StationId,
    params: &RunParams,
) -> Option<RoutePlan> {
    let seed_remaining = ctx.demand.remaining(seed);

    candidates
        .iter()
        .filter(|candidate| !is_split_forced(candidate.capacity(), seed_remaining, ctx.max_capacity))
        .filter_map(|candidate| create_plan(ctx, candidate, seed, params))
        .fold(None, |best: Option<RoutePlan>, plan| match best {
            Some(best) if compare_plans(&plan, &best) != Ordering::Less => Some(best),
            _ => Some(plan),
        })
}

/// Compares two plans: lower cost, then more loaded weight, then shorter distance, then smaller
/// vehicle capacity is better. `Ordering::Less` means that the left plan is better.
pub fn compare_plans(left: &RoutePlan, right: &RoutePlan) -> Ordering {
    compare_floats_with_tolerance(left.total_cost(), right.total_cost(), FLOAT_TOLERANCE)
        .then_with(|| right.loaded.cmp(&left.loaded))
        .then_with(|| compare_floats_with_tolerance(left.distance, right.distance, FLOAT_TOLERANCE))
        .then_with(|| left.vehicle.capacity().cmp(&right.vehicle.capacity()))
}

/// Checks whether vehicle would split seed's demand while some other vehicle can take it whole.
fn is_split_forced(capacity: Weight, seed_remaining: Weight, max_capacity: Weight) -> bool {
    seed_remaining > 0 && seed_remaining <= max_capacity && capacity < seed_remaining
}

fn create_plan(
    ctx: &InsertionContext,
    vehicle: &VehicleCandidate,
    seed: StationId,
    params: &RunParams,
) -> Option<RoutePlan> {
    let draft = build_two_ended_route(ctx, vehicle.capacity(), seed).filter(|draft| draft.loaded > 0)?;

    let distance = route_distance(ctx.transport, draft.stops.as_slice());
    let rental_cost = if vehicle.is_company() { 0. } else { params.rental_cost };

    Some(RoutePlan {
        stops: draft.stops,
        picked: draft.picked,
        loaded: draft.loaded,
        distance,
        fuel_cost: distance * params.fuel_cost_per_km,
        rental_cost,
        vehicle: vehicle.clone(),
        path: vec![],
    })
}
