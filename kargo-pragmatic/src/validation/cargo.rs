#[cfg(test)]
#[path = "../../tests/unit/validation/cargo_test.rs"]
mod cargo_test;

use super::*;
use std::collections::HashSet;

fn describe(idx: usize, cargo: &Cargo) -> String {
    cargo.id.clone().unwrap_or_else(|| format!("#{idx}"))
}

fn check_cargo(
    ctx: &ValidationContext,
    code: &str,
    cause: &str,
    action: &str,
    is_invalid: impl Fn(&Cargo) -> bool,
) -> Result<(), FormatError> {
    let ids =
        ctx.cargo().filter(|(_, cargo)| is_invalid(cargo)).map(|(idx, cargo)| describe(idx, cargo)).collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new(code.to_string(), cause.to_string(), format!("{action}: {}", ids.join(", "))))
    }
}

/// Checks that every cargo refers to a station.
fn check_e1100_cargo_has_station(ctx: &ValidationContext) -> Result<(), FormatError> {
    check_cargo(ctx, "E1100", "cargo without station id", "specify station id for cargo", |cargo| {
        cargo.station_id.is_none()
    })
}

/// Checks that every cargo refers to a known station.
fn check_e1104_cargo_station_is_known(ctx: &ValidationContext) -> Result<(), FormatError> {
    let known = ctx.stations().map(|station| station.id).collect::<HashSet<_>>();

    check_cargo(ctx, "E1104", "cargo refers to unknown station", "use existing station id for cargo", |cargo| {
        cargo.station_id.is_some_and(|station_id| !known.contains(&station_id))
    })
}

/// Checks that every cargo has weight.
fn check_e1101_cargo_has_weight(ctx: &ValidationContext) -> Result<(), FormatError> {
    check_cargo(ctx, "E1101", "cargo without weight", "specify weight for cargo", |cargo| cargo.weight.is_none())
}

/// Checks that cargo weight is positive.
fn check_e1102_cargo_weight_is_positive(ctx: &ValidationContext) -> Result<(), FormatError> {
    check_cargo(ctx, "E1102", "cargo with non positive weight", "use positive weight for cargo", |cargo| {
        cargo.weight.is_some_and(|weight| weight <= 0)
    })
}

/// Checks that cargo quantity, when specified, is positive.
fn check_e1103_cargo_quantity_is_positive(ctx: &ValidationContext) -> Result<(), FormatError> {
    check_cargo(ctx, "E1103", "cargo with non positive quantity", "use positive quantity for cargo", |cargo| {
        cargo.quantity.is_some_and(|quantity| quantity <= 0)
    })
}

/// Validates pending cargo.
pub fn validate_cargo(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1100_cargo_has_station(ctx),
        check_e1101_cargo_has_weight(ctx),
        check_e1102_cargo_weight_is_positive(ctx),
        check_e1103_cargo_quantity_is_positive(ctx),
        check_e1104_cargo_station_is_known(ctx),
    ])
}
