#[cfg(test)]
#[path = "../../tests/unit/utils/comparison_test.rs"]
mod comparison_test;

use crate::utils::Float;
use std::cmp::Ordering;

/// A tolerance used when comparing costs and distances of plans.
pub const FLOAT_TOLERANCE: Float = 1e-9;

/// Compares floating point numbers. `NaN` is considered bigger than any other value.
#[inline]
pub fn compare_floats(a: Float, b: Float) -> Ordering {
    match a.partial_cmp(&b) {
        Some(ordering) => ordering,
        None => match (a.is_nan(), b.is_nan()) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            _ => Ordering::Equal,
        },
    }
}

/// Compares floating point numbers treating values within `tolerance` as equal.
#[inline]
pub fn compare_floats_with_tolerance(a: Float, b: Float, tolerance: Float) -> Ordering {
    if (a - b).abs() < tolerance { Ordering::Equal } else { compare_floats(a, b) }
}
