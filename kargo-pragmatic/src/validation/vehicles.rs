#[cfg(test)]
#[path = "../../tests/unit/validation/vehicles_test.rs"]
mod vehicles_test;

use super::*;
use crate::utils::get_duplicates;

/// Checks that fleet has no vehicle with duplicate ids.
fn check_e1200_no_vehicles_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.vehicles().map(|vehicle| &vehicle.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new(
            "E1200".to_string(),
            "duplicated vehicle ids".to_string(),
            format!("remove duplicated vehicle ids: {}", ids.join(", ")),
        ))
    })
}

/// Checks that every vehicle has capacity.
fn check_e1201_vehicle_has_capacity(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .vehicles()
        .filter(|vehicle| vehicle.capacity.is_none())
        .map(|vehicle| vehicle.id.as_str())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1201".to_string(),
            "vehicle without capacity".to_string(),
            format!("specify capacity for vehicles: {}", ids.join(", ")),
        ))
    }
}

/// Checks that vehicle capacity and informational costs are not negative.
fn check_e1202_vehicle_capacity_is_not_negative(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .vehicles()
        .filter(|vehicle| {
            vehicle.capacity.is_some_and(|capacity| capacity < 0)
                || !is_valid_cost(vehicle.fuel_cost_per_km)
                || !is_valid_cost(vehicle.rental_cost)
        })
        .map(|vehicle| vehicle.id.as_str())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1202".to_string(),
            "vehicle with negative capacity or cost".to_string(),
            format!("use non negative capacity and finite non negative costs for vehicles: {}", ids.join(", ")),
        ))
    }
}

/// Validates vehicle inventory.
pub fn validate_vehicles(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1200_no_vehicles_with_duplicate_ids(ctx),
        check_e1201_vehicle_has_capacity(ctx),
        check_e1202_vehicle_capacity_is_not_negative(ctx),
    ])
}
