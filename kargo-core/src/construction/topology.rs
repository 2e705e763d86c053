#[cfg(test)]
#[path = "../../tests/unit/construction/topology_test.rs"]
mod topology_test;

use crate::models::common::{Distance, HUB_ID, StationId, Weight, haversine_distance};
use crate::models::problem::{Cargo, StationRegistry};
use crate::utils::{Float, InfoLogger, compare_floats, parallel_collect};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Keeps remaining unassigned weight per station. Iteration order is ascending station id, which
/// keeps all selections reproducible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DemandMap {
    remaining: BTreeMap<StationId, Weight>,
}

impl DemandMap {
    /// Creates a demand map from `(station, weight)` pairs, summing weights of the same station.
    /// Sums saturate at `Weight::MAX`.
    pub fn new(entries: impl IntoIterator<Item = (StationId, Weight)>) -> Self {
        let mut remaining = BTreeMap::new();
        entries.into_iter().for_each(|(station_id, weight)| {
            let total: &mut Weight = remaining.entry(station_id).or_insert(0);
            *total = total.saturating_add(weight);
        });

        Self { remaining }
    }

    /// Returns remaining weight of the station.
    pub fn remaining(&self, station_id: StationId) -> Weight {
        self.remaining.get(&station_id).copied().unwrap_or(0)
    }

    /// Returns stations with positive remaining weight.
    pub fn active(&self) -> impl Iterator<Item = (StationId, Weight)> + '_ {
        self.remaining.iter().filter(|(_, weight)| **weight > 0).map(|(&station_id, &weight)| (station_id, weight))
    }

    /// Returns total remaining weight.
    pub fn total(&self) -> Weight {
        self.active().map(|(_, weight)| weight).fold(0, Weight::saturating_add)
    }

    /// Returns true when no station has positive remaining weight.
    pub fn is_exhausted(&self) -> bool {
        self.active().next().is_none()
    }

    /// Takes as much as possible from the station within `capacity_left`, returns taken weight.
    pub fn take(&mut self, station_id: StationId, capacity_left: Weight) -> Weight {
        match self.remaining.get_mut(&station_id) {
            Some(remaining) if *remaining > 0 && capacity_left > 0 => {
                let taken = capacity_left.min(*remaining);
                *remaining -= taken;
                taken
            }
            _ => 0,
        }
    }

    /// Subtracts picked quantities, returns the weight which was actually subtracted.
    pub fn apply(&mut self, picked: &[(StationId, Weight)]) -> Weight {
        picked
            .iter()
            .filter(|(_, weight)| *weight > 0)
            .map(|&(station_id, weight)| self.take(station_id, weight))
            .fold(0, Weight::saturating_add)
    }

    /// Returns stations with residual demand.
    pub fn unserved(&self) -> Vec<(StationId, Weight)> {
        self.active().collect()
    }
}

/// Aggregates pending demand per station, discarding non positive weights and cargo which
/// refers to unknown stations.
pub fn aggregate_demand(cargo: &[Cargo], stations: &StationRegistry, logger: &InfoLogger) -> DemandMap {
    let (accepted, discarded): (Vec<_>, Vec<_>) = cargo
        .iter()
        .partition(|cargo| cargo.weight > 0 && cargo.station_id != HUB_ID && stations.contains(cargo.station_id));

    if !discarded.is_empty() {
        (logger)(format!("discarded {} cargo records without resolvable station or weight", discarded.len()).as_str());
    }

    DemandMap::new(accepted.into_iter().map(|cargo| (cargo.station_id, cargo.weight)))
}

/// Keeps k nearest (straight-line) active stations for every active station.
#[derive(Clone, Debug, Default)]
pub struct NeighborMap {
    neighbors: FxHashMap<StationId, Vec<StationId>>,
}

impl NeighborMap {
    /// Builds neighbor map restricted to stations with positive demand.
    pub fn new(demand: &DemandMap, stations: &StationRegistry, k: usize) -> Self {
        let active = demand
            .active()
            .filter_map(|(station_id, _)| stations.get(station_id))
            .map(|station| (station.id, station.location))
            .collect::<Vec<_>>();

        let neighbors = parallel_collect(&active, |(station_id, location)| {
            let mut others = active
                .iter()
                .filter(|(other_id, _)| other_id != station_id)
                .map(|(other_id, other)| (*other_id, haversine_distance(location, other)))
                .collect::<Vec<_>>();

            others.sort_by(|(_, a), (_, b)| compare_floats(*a, *b));
            others.truncate(k);

            (*station_id, others.into_iter().map(|(other_id, _)| other_id).collect())
        })
        .into_iter()
        .collect();

        Self { neighbors }
    }

    /// Returns ordered neighbors of the station.
    pub fn get(&self, station_id: StationId) -> &[StationId] {
        self.neighbors.get(&station_id).map_or(&[], |neighbors| neighbors.as_slice())
    }
}

/// Returns percentile `p` of values using linear interpolation between closest ranks. `p` is
/// clamped to `[0, 100]`. Returns zero for empty input.
pub fn percentile(values: &[Float], p: Float) -> Float {
    if values.is_empty() {
        return 0.;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| compare_floats(*a, *b));

    let index = (p.clamp(0., 100.) / 100.) * (sorted.len() - 1) as Float;
    let (lo, hi) = (index.floor() as usize, index.ceil() as usize);

    if lo == hi {
        sorted[lo]
    } else {
        let fraction = index - lo as Float;
        sorted[lo] * (1. - fraction) + sorted[hi] * fraction
    }
}

/// A per request view on active stations: neighbors, distances to the hub and the far threshold.
#[derive(Clone, Debug)]
pub struct Topology {
    neighbors: NeighborMap,
    hub_distances: FxHashMap<StationId, Distance>,
    far_threshold: Distance,
}

impl Topology {
    /// Creates topology from the current demand snapshot.
    pub fn new(demand: &DemandMap, stations: &StationRegistry, neighbours: usize, far_percentile: Float) -> Self {
        let hub = stations.hub().location;
        let hub_distances = demand
            .active()
            .filter_map(|(station_id, _)| stations.get(station_id))
            .map(|station| (station.id, haversine_distance(&station.location, &hub)))
            .collect::<FxHashMap<_, _>>();

        let distances = demand
            .active()
            .filter_map(|(station_id, _)| hub_distances.get(&station_id).copied())
            .collect::<Vec<_>>();
        let far_threshold = percentile(distances.as_slice(), far_percentile);

        Self { neighbors: NeighborMap::new(demand, stations, neighbours), hub_distances, far_threshold }
    }

    /// Returns neighbor map.
    pub fn neighbors(&self) -> &NeighborMap {
        &self.neighbors
    }

    /// Returns straight-line distance to the hub, zero for unknown stations.
    pub fn hub_distance(&self, station_id: StationId) -> Distance {
        self.hub_distances.get(&station_id).copied().unwrap_or(0.)
    }

    /// Returns far threshold.
    pub fn far_threshold(&self) -> Distance {
        self.far_threshold
    }

    /// Checks whether station is far from the hub.
    pub fn is_far(&self, station_id: StationId) -> bool {
        self.hub_distance(station_id) >= self.far_threshold
    }
}
