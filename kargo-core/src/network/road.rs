#[cfg(test)]
#[path = "../../tests/unit/network/road_test.rs"]
mod road_test;

use crate::models::common::{Coordinate, Distance, StationId, haversine_distance};
use crate::models::problem::{StationRegistry, TransportCost};
use crate::network::{RoadGraph, RoutingCache};
use crate::utils::Float;
use std::sync::Arc;

/// A distance returned for identities which cannot be resolved to a coordinate.
pub const UNRESOLVED_DISTANCE: Distance = Float::MAX / 4.;

/// Road network settings.
#[derive(Clone, Debug)]
pub struct NetworkConfig {
    /// When set, a computed distance is cached for both directions.
    pub symmetric_distance: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { symmetric_distance: true }
    }
}

/// Answers coordinate based road distance and path queries.
pub struct RoadNetwork {
    graph: Arc<RoadGraph>,
}

impl RoadNetwork {
    /// Creates a new instance of `RoadNetwork`.
    pub fn new(graph: Arc<RoadGraph>) -> Self {
        Self { graph }
    }

    /// Returns road distance between coordinates snapped to their nearest nodes. Falls back to
    /// great-circle distance when graph is empty or nodes are not connected.
    pub fn distance(&self, from: &Coordinate, to: &Coordinate) -> Distance {
        match (self.graph.nearest_node(from), self.graph.nearest_node(to)) {
            (Some(source), Some(target)) if source == target => 0.,
            (Some(source), Some(target)) => self
                .graph
                .shortest_path(source, target)
                .map_or_else(|| haversine_distance(from, to), |path| path.distance),
            _ => haversine_distance(from, to),
        }
    }

    /// Returns coordinates of road path between snapped nodes. Empty when graph cannot answer.
    pub fn path(&self, from: &Coordinate, to: &Coordinate) -> Vec<Coordinate> {
        match (self.graph.nearest_node(from), self.graph.nearest_node(to)) {
            (Some(source), Some(target)) => self
                .graph
                .shortest_path(source, target)
                .map(|path| path.nodes.iter().filter_map(|&node_id| self.graph.node(node_id)).copied().collect())
                .unwrap_or_default(),
            _ => vec![],
        }
    }
}

/// A station level transport cost backed by road network and a shared routing cache.
pub struct RoadTransportCost {
    network: Arc<RoadNetwork>,
    stations: Arc<StationRegistry>,
    cache: Arc<dyn RoutingCache>,
    config: NetworkConfig,
}

impl RoadTransportCost {
    /// Creates a new instance of `RoadTransportCost`.
    pub fn new(
        network: Arc<RoadNetwork>,
        stations: Arc<StationRegistry>,
        cache: Arc<dyn RoutingCache>,
        config: NetworkConfig,
    ) -> Self {
        Self { network, stations, cache, config }
    }
}

impl TransportCost for RoadTransportCost {
    fn distance(&self, from: StationId, to: StationId) -> Distance {
        if from == to {
            return 0.;
        }

        if let Some(distance) = self.cache.get_distance((from, to)) {
            return distance;
        }

        let (Some(start), Some(end)) = (self.stations.resolve(from), self.stations.resolve(to)) else {
            return UNRESOLVED_DISTANCE;
        };

        let distance = self.network.distance(&start, &end);

        self.cache.put_distance((from, to), distance);
        if self.config.symmetric_distance {
            self.cache.put_distance((to, from), distance);
        }

        distance
    }

    fn path(&self, from: StationId, to: StationId) -> Arc<Vec<Coordinate>> {
        if let Some(path) = self.cache.get_path((from, to)) {
            return path;
        }

        let (Some(start), Some(end)) = (self.stations.resolve(from), self.stations.resolve(to)) else {
            return Arc::new(vec![]);
        };

        let path = Arc::new(self.network.path(&start, &end));
        self.cache.put_path((from, to), path.clone());

        path
    }
}
