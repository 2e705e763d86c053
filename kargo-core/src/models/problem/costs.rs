#[cfg(test)]
#[path = "../../../tests/unit/models/problem/costs_test.rs"]
mod costs_test;

use crate::models::common::{Coordinate, Distance, HUB_ID, StationId};
use std::sync::Arc;

/// Provides the way to get road distance and road geometry between stations (or the hub).
pub trait TransportCost: Send + Sync {
    /// Returns road distance in kilometers. Never fails: degrades to straight-line distance.
    fn distance(&self, from: StationId, to: StationId) -> Distance;

    /// Returns road geometry. Empty when either endpoint cannot be resolved.
    fn path(&self, from: StationId, to: StationId) -> Arc<Vec<Coordinate>>;
}

/// Returns the distance of a pickup sequence: along the stops and from the last stop to the hub.
pub fn route_distance(transport: &dyn TransportCost, stops: &[StationId]) -> Distance {
    match stops.last() {
        Some(&last) => {
            stops.windows(2).map(|leg| transport.distance(leg[0], leg[1])).sum::<Distance>()
                + transport.distance(last, HUB_ID)
        }
        None => 0.,
    }
}

/// Returns the distance of a round trip: from the hub through all stops and back to the hub.
pub fn round_trip_distance(transport: &dyn TransportCost, stops: &[StationId]) -> Distance {
    match stops.first() {
        Some(&first) => transport.distance(HUB_ID, first) + route_distance(transport, stops),
        None => 0.,
    }
}

/// Returns concatenated road geometry of a pickup sequence, including the final leg to the hub.
pub fn route_path(transport: &dyn TransportCost, stops: &[StationId]) -> Vec<Coordinate> {
    stops
        .iter()
        .zip(stops.iter().skip(1).chain(std::iter::once(&HUB_ID)))
        .flat_map(|(&from, &to)| transport.path(from, to).iter().copied().collect::<Vec<_>>())
        .collect()
}
