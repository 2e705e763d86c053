//! Road path query between two arbitrary coordinates.

#[cfg(test)]
#[path = "../../tests/unit/extensions/path_test.rs"]
mod path_test;

use kargo_core::models::common::Coordinate;
use kargo_core::network::RoadNetwork;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A result of a road path query.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathResult {
    /// Road distance in kilometers.
    pub distance_km: f64,
    /// Road path as `[lat, lng]` pairs, empty when the graph cannot answer.
    pub path: Vec<[f64; 2]>,
}

/// Parses coordinate specified as `lat,lng`.
pub fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let parts = value.split(',').map(|part| part.trim().parse::<f64>()).collect::<Vec<_>>();

    let coordinate = match parts.as_slice() {
        [Ok(lat), Ok(lng)] => Some(Coordinate::new(*lat, *lng)),
        _ => None,
    };

    coordinate
        .filter(|coordinate| coordinate.is_valid())
        .ok_or_else(|| format!("cannot parse coordinate '{value}', expected 'lat,lng' within valid range"))
}

/// Finds road distance and path between two coordinates.
pub fn find_path(network: &RoadNetwork, from: &Coordinate, to: &Coordinate) -> PathResult {
    PathResult {
        distance_km: network.distance(from, to),
        path: network.path(from, to).iter().map(|coordinate| [coordinate.lat, coordinate.lng]).collect(),
    }
}

/// Writes path result as json.
pub fn write_path_result<W: Write>(writer: BufWriter<W>, result: &PathResult) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, result).map_err(|err| format!("cannot write path: '{err}'"))
}
