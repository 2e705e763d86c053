#[cfg(test)]
#[path = "../../tests/unit/validation/stations_test.rs"]
mod stations_test;

use super::*;
use crate::utils::get_duplicates;

/// Checks that stations have no duplicate ids.
fn check_e1000_no_stations_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.stations().map(|station| &station.id)).map_or(Ok(()), |ids| {
        let ids = ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
        Err(FormatError::new(
            "E1000".to_string(),
            "duplicated station ids".to_string(),
            format!("remove duplicated station ids: {}", ids.join(", ")),
        ))
    })
}

/// Checks that station coordinates are finite and within valid ranges.
fn check_e1001_station_coordinates_are_valid(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .stations()
        .filter(|station| !is_valid_coordinate(station.latitude, station.longitude))
        .map(|station| station.id.to_string())
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1001".to_string(),
            "invalid station coordinates".to_string(),
            format!("use finite latitude in [-90, 90] and longitude in [-180, 180] for stations: {}", ids.join(", ")),
        ))
    }
}

/// Checks that no station uses the reserved hub identity.
fn check_e1002_no_station_with_hub_id(ctx: &ValidationContext) -> Result<(), FormatError> {
    if ctx.stations().any(|station| station.id == 0) {
        Err(FormatError::new(
            "E1002".to_string(),
            "station id 0 is reserved for the hub".to_string(),
            "use positive station ids".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Checks that the hub coordinate is valid.
fn check_e1003_hub_coordinate_is_valid(ctx: &ValidationContext) -> Result<(), FormatError> {
    match ctx.problem.hub.as_ref() {
        Some(hub) if !is_valid_coordinate(hub.latitude, hub.longitude) => Err(FormatError::new(
            "E1003".to_string(),
            "invalid hub coordinate".to_string(),
            "use finite latitude in [-90, 90] and longitude in [-180, 180] for the hub".to_string(),
        )),
        _ => Ok(()),
    }
}

/// Validates stations and the hub.
pub fn validate_stations(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1000_no_stations_with_duplicate_ids(ctx),
        check_e1001_station_coordinates_are_valid(ctx),
        check_e1002_no_station_with_hub_id(ctx),
        check_e1003_hub_coordinate_is_valid(ctx),
    ])
}
