#[cfg(test)]
#[path = "../../tests/unit/checker/costs_test.rs"]
mod costs_test;

use super::*;
use crate::utils::combine_error_results;
use kargo_core::utils::compare_floats_with_tolerance;
use std::cmp::Ordering;

const COST_TOLERANCE: f64 = 1e-6;

/// Checks route and total cost arithmetic.
pub fn check_costs(context: &CheckerContext) -> Result<(), Vec<String>> {
    combine_error_results(&[check_route_costs(context), check_statistic(context)])
}

fn check_route_costs(context: &CheckerContext) -> Result<(), String> {
    let params = context.get_params();

    context.solution.routes.iter().enumerate().try_for_each(|(route_idx, route)| {
        if route.rental == route.vehicle_id.is_some() {
            return Err(format!("route {route_idx} has inconsistent rental flag"));
        }

        let fuel_cost = route.distance_km * params.fuel_cost_per_km;
        let rental_cost = if route.rental { params.rental_cost } else { 0. };

        check_value(route_idx, "fuel cost", route.fuel_cost, fuel_cost)?;
        check_value(route_idx, "rental cost", route.rental_cost, rental_cost)?;
        check_value(route_idx, "total cost", route.total_cost, route.fuel_cost + route.rental_cost)
    })
}

fn check_statistic(context: &CheckerContext) -> Result<(), String> {
    let routes = &context.solution.routes;
    let statistic = &context.solution.statistic;

    let rental_count = routes.iter().filter(|route| route.rental).count();
    if rental_count != statistic.rental_count {
        return Err(format!("rental count mismatch: {} != {rental_count}", statistic.rental_count));
    }

    let served_kg = routes.iter().map(|route| route.loaded_kg).fold(0, i64::saturating_add);
    let unserved_kg =
        context.solution.unserved.iter().map(|unserved| unserved.weight).fold(0, i64::saturating_add);
    if served_kg != statistic.served_kg || unserved_kg != statistic.unserved_kg {
        return Err(format!(
            "weight statistic mismatch: served {} != {served_kg} or unserved {} != {unserved_kg}",
            statistic.served_kg, statistic.unserved_kg
        ));
    }

    let sum = |value: fn(&Route) -> f64| routes.iter().map(value).sum::<f64>();
    [
        ("total distance", statistic.total_distance_km, sum(|route| route.distance_km)),
        ("total fuel cost", statistic.total_fuel_cost, sum(|route| route.fuel_cost)),
        ("total rental cost", statistic.total_rental_cost, sum(|route| route.rental_cost)),
        ("total cost", statistic.total_cost, sum(|route| route.total_cost)),
    ]
    .into_iter()
    .try_for_each(|(name, actual, expected)| check_total(name, actual, expected))
}

fn check_value(route_idx: usize, name: &str, actual: f64, expected: f64) -> Result<(), String> {
    check_total(name, actual, expected).map_err(|err| format!("route {route_idx}: {err}"))
}

fn check_total(name: &str, actual: f64, expected: f64) -> Result<(), String> {
    let tolerance = COST_TOLERANCE.max(expected.abs() * COST_TOLERANCE);

    if compare_floats_with_tolerance(actual, expected, tolerance) == Ordering::Equal {
        Ok(())
    } else {
        Err(format!("{name} mismatch: {actual} != {expected}"))
    }
}
