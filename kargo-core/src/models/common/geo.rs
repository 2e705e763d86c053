#[cfg(test)]
#[path = "../../../tests/unit/models/common/geo_test.rs"]
mod geo_test;

use crate::models::common::Distance;
use crate::utils::Float;

/// A mean earth radius in kilometers.
const EARTH_RADIUS_KM: Float = 6371.;

/// Represents a geo coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    /// Latitude in degrees.
    pub lat: Float,
    /// Longitude in degrees.
    pub lng: Float,
}

impl Coordinate {
    /// Creates a new instance of `Coordinate`.
    pub fn new(lat: Float, lng: Float) -> Self {
        Self { lat, lng }
    }

    /// Returns a great-circle distance to the other coordinate in kilometers.
    pub fn distance_to(&self, other: &Coordinate) -> Distance {
        haversine_distance(self, other)
    }

    /// Checks whether coordinate has finite values in valid degree ranges.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90. ..=90.).contains(&self.lat)
            && (-180. ..=180.).contains(&self.lng)
    }
}

/// Gets distance between two points in kilometers using haversine formula.
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> Distance {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lng = (to.lng - from.lng).to_radians();

    let a = (d_lat / 2.).sin() * (d_lat / 2.).sin()
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lng / 2.).sin() * (d_lng / 2.).sin();
    let c = 2. * a.sqrt().atan2((1. - a).sqrt());

    EARTH_RADIUS_KM * c
}
