use crate::utils::Float;

/// Specifies station identity. The value `0` is reserved for the hub.
pub type StationId = u64;

/// A reserved identity which refers to the hub in station sequences.
pub const HUB_ID: StationId = 0;

/// Specifies weight in kilograms.
pub type Weight = i64;

/// Specifies distance in kilometers.
pub type Distance = Float;

/// Specifies cost value.
pub type Cost = Float;
