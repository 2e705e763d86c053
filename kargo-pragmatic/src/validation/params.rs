use super::*;

/// Checks that fuel cost is finite and not negative.
fn check_e1300_fuel_cost_is_valid(ctx: &ValidationContext) -> Result<(), FormatError> {
    let fuel_cost = ctx.problem.params.as_ref().and_then(|params| params.fuel_cost_per_km);

    if is_valid_cost(fuel_cost) {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1300".to_string(),
            "invalid fuel cost per km".to_string(),
            "use finite non negative fuel cost".to_string(),
        ))
    }
}

/// Checks that rental cost is finite and not negative.
fn check_e1301_rental_cost_is_valid(ctx: &ValidationContext) -> Result<(), FormatError> {
    let rental_cost = ctx.problem.params.as_ref().and_then(|params| params.rental_cost_per_vehicle);

    if is_valid_cost(rental_cost) {
        Ok(())
    } else {
        Err(FormatError::new(
            "E1301".to_string(),
            "invalid rental cost per vehicle".to_string(),
            "use finite non negative rental cost".to_string(),
        ))
    }
}

/// Validates run parameters.
pub fn validate_params(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[check_e1300_fuel_cost_is_valid(ctx), check_e1301_rental_cost_is_valid(ctx)])
}
