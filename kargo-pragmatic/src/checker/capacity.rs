#[cfg(test)]
#[path = "../../tests/unit/checker/capacity_test.rs"]
mod capacity_test;

use super::*;
use crate::utils::combine_error_results;

/// Checks that vehicle load is assigned correctly. The following rules are checked:
/// * max vehicle's capacity is not violated
/// * loaded weight matches pickups and route breakdown
pub fn check_vehicle_load(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_vehicle_capacity(context), check_load_change(context)])
}

fn check_vehicle_capacity(context: &CheckerContext) -> Result<(), String> {
    let params = context.get_params();

    context.solution.routes.iter().enumerate().try_for_each(|(route_idx, route)| {
        let capacity = match &route.vehicle_id {
            Some(vehicle_id) => context
                .get_vehicle(vehicle_id)?
                .capacity
                .ok_or_else(|| format!("vehicle '{vehicle_id}' has no capacity"))?,
            None => params.rental_capacity,
        };

        if route.capacity_kg != capacity {
            return Err(format!(
                "route {route_idx} reports capacity {}, expected {capacity}",
                route.capacity_kg
            ));
        }

        if route.loaded_kg > capacity {
            return Err(format!("route {route_idx} is overloaded: {} > {capacity}", route.loaded_kg));
        }

        Ok(())
    })
}

fn check_load_change(context: &CheckerContext) -> Result<(), String> {
    context.solution.routes.iter().enumerate().try_for_each(|(route_idx, route)| {
        if route.pickups.iter().any(|pickup| pickup.weight <= 0) {
            return Err(format!("route {route_idx} has non positive pickup"));
        }

        let picked = route.pickups.iter().map(|pickup| pickup.weight).fold(0, i64::saturating_add);
        if picked != route.loaded_kg {
            return Err(format!("route {route_idx} loaded weight {} differs from pickups {picked}", route.loaded_kg));
        }

        let carried = route.steps.last().map_or(0, |step| step.carried_kg);
        if !route.steps.is_empty() && carried != route.loaded_kg {
            return Err(format!("route {route_idx} breakdown ends with {carried} instead of {}", route.loaded_kg));
        }

        Ok(())
    })
}
