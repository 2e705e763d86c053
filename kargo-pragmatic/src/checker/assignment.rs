#[cfg(test)]
#[path = "../../tests/unit/checker/assignment_test.rs"]
mod assignment_test;

use super::*;
use crate::utils::{combine_error_results, get_duplicates};

/// Checks assignment of stations and vehicles.
pub fn check_assignment(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_vehicles(context), check_route_stations(context), check_conservation(context)])
}

/// Checks that company vehicles are used once, are company owned and respect the usage limit.
fn check_vehicles(context: &CheckerContext) -> Result<(), String> {
    let company_ids = context.solution.routes.iter().filter_map(|route| route.vehicle_id.as_ref()).collect::<Vec<_>>();

    if let Some(duplicates) = get_duplicates(company_ids.iter().copied()) {
        return Err(format!("company vehicles are used more than once: {}", duplicates.join(", ")));
    }

    company_ids.iter().try_for_each(|vehicle_id| {
        let vehicle = context.get_vehicle(vehicle_id)?;
        if vehicle.is_company_owned.unwrap_or(true) {
            Ok(())
        } else {
            Err(format!("vehicle '{vehicle_id}' is not company owned"))
        }
    })?;

    match context.get_params().max_company_vehicles {
        Some(max) if company_ids.len() > max => {
            Err(format!("amount of company vehicles {} exceeds the limit {max}", company_ids.len()))
        }
        _ => Ok(()),
    }
}

/// Checks that each route visits known stations once and picks only at visited stations.
fn check_route_stations(context: &CheckerContext) -> Result<(), String> {
    context.solution.routes.iter().enumerate().try_for_each(|(route_idx, route)| {
        if route.stations.is_empty() {
            return Err(format!("route {route_idx} has no stations"));
        }

        if let Some(duplicates) = get_duplicates(route.stations.iter()) {
            return Err(format!("route {route_idx} visits stations more than once: {duplicates:?}"));
        }

        if let Some(id) = route.stations.iter().find(|&id| !context.get_demand().contains_key(id)) {
            return Err(format!("route {route_idx} visits station {id} without demand"));
        }

        let visited = route.stations.iter().collect::<HashSet<_>>();
        match route.pickups.iter().find(|pickup| !visited.contains(&pickup.station_id)) {
            Some(pickup) => Err(format!("route {route_idx} picks at station {} outside of route", pickup.station_id)),
            None => Ok(()),
        }
    })
}

/// Checks that served and unserved weight add up to pending demand per station.
fn check_conservation(context: &CheckerContext) -> Result<(), String> {
    let served = context
        .solution
        .routes
        .iter()
        .flat_map(|route| route.pickups.iter())
        .map(|pickup| (pickup.station_id, pickup.weight))
        .chain(context.solution.unserved.iter().map(|unserved| (unserved.station_id, unserved.weight)))
        .fold(BTreeMap::<u64, i64>::new(), |mut acc, (station_id, weight)| {
            let total = acc.entry(station_id).or_insert(0);
            *total = total.saturating_add(weight);
            acc
        });

    let demand = context.get_demand();

    if let Some((id, weight)) = served.iter().find(|&(id, weight)| demand.get(id).is_none_or(|limit| weight > limit)) {
        return Err(format!(
            "station {id} is over allocated: {weight} > {}",
            demand.get(id).copied().unwrap_or_default()
        ));
    }

    match demand.iter().find(|&(id, weight)| served.get(id).copied().unwrap_or_default() != *weight) {
        Some((id, weight)) => Err(format!(
            "station {id} demand {weight} is not conserved: {} accounted",
            served.get(id).copied().unwrap_or_default()
        )),
        None => Ok(()),
    }
}
