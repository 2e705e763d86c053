#[cfg(test)]
#[path = "../../tests/unit/construction/seed_test.rs"]
mod seed_test;

use super::{DemandMap, Topology};
use crate::models::common::{Distance, StationId, Weight, haversine_distance};
use crate::models::problem::StationRegistry;
use crate::utils::Float;

/// Specifies how density score of a station is estimated.
#[derive(Clone, Debug)]
pub struct DensitySettings {
    /// Amount of nearest active neighbors which contribute to cluster weight.
    pub neighbours: usize,
    /// Isolation distance used when station has no active neighbors.
    pub isolation_fallback: Distance,
}

impl Default for DensitySettings {
    fn default() -> Self {
        Self { neighbours: 3, isolation_fallback: 50. }
    }
}

/// Selects a station to start the next route from.
///
/// Far stations which fit into the largest available capacity are preferred, the farthest first.
/// Otherwise, a station from the densest cluster is selected. Ties are resolved in favor of the
/// station with the smaller id.
pub fn select_seed(
    demand: &DemandMap,
    topology: &Topology,
    stations: &StationRegistry,
    max_capacity: Weight,
    density: &DensitySettings,
) -> Option<StationId> {
    select_far_seed(demand, topology, stations, max_capacity)
        .or_else(|| select_dense_seed(demand, topology, stations, density))
}

fn select_far_seed(
    demand: &DemandMap,
    topology: &Topology,
    stations: &StationRegistry,
    max_capacity: Weight,
) -> Option<StationId> {
    demand
        .active()
        .filter(|&(station_id, remaining)| {
            stations.contains(station_id) && topology.is_far(station_id) && remaining <= max_capacity
        })
        .map(|(station_id, remaining)| (station_id, topology.hub_distance(station_id) * 1000. + remaining as Float))
        .fold(None, select_max)
        .map(|(station_id, _)| station_id)
}

fn select_dense_seed(
    demand: &DemandMap,
    topology: &Topology,
    stations: &StationRegistry,
    density: &DensitySettings,
) -> Option<StationId> {
    demand
        .active()
        .filter_map(|(station_id, remaining)| stations.get(station_id).map(|station| (station, remaining)))
        .map(|(station, remaining)| {
            let (cluster, distances) = topology
                .neighbors()
                .get(station.id)
                .iter()
                .filter(|&&neighbor_id| demand.remaining(neighbor_id) > 0)
                .filter_map(|&neighbor_id| stations.get(neighbor_id))
                .take(density.neighbours)
                .fold((remaining, Vec::new()), |(cluster, mut distances), neighbor| {
                    distances.push(haversine_distance(&station.location, &neighbor.location));
                    (cluster + demand.remaining(neighbor.id), distances)
                });

            let isolation = if distances.is_empty() {
                density.isolation_fallback
            } else {
                distances.iter().sum::<Distance>() / distances.len() as Float
            };

            let cluster_density = cluster as Float / (1. + isolation);
            let score = cluster_density * 1000. + remaining as Float * 2. + topology.hub_distance(station.id) * 0.5;

            (station.id, score)
        })
        .fold(None, select_max)
        .map(|(station_id, _)| station_id)
}

fn select_max(best: Option<(StationId, Float)>, candidate: (StationId, Float)) -> Option<(StationId, Float)> {
    match best {
        Some((_, best_score)) if candidate.1 <= best_score => best,
        _ => Some(candidate),
    }
}
