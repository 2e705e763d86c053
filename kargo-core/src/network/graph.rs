#[cfg(test)]
#[path = "../../tests/unit/network/graph_test.rs"]
mod graph_test;

use crate::models::common::{Coordinate, Distance, haversine_distance};
use crate::network::{Geometry, RoadGraphBuilder};
use crate::utils::compare_floats;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A graph node identity: an index in node list.
pub type NodeId = usize;

/// A directed half of an undirected weighted connection.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    /// A target node.
    pub target: NodeId,
    /// Great-circle length of the edge in kilometers.
    pub weight: Distance,
}

/// A result of shortest path search.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPath {
    /// Total distance.
    pub distance: Distance,
    /// Visited nodes, both ends included.
    pub nodes: Vec<NodeId>,
}

/// A road graph. Read-only once built, safe for concurrent queries.
#[derive(Clone, Debug, Default)]
pub struct RoadGraph {
    nodes: Vec<Coordinate>,
    adjacency: Vec<Vec<Edge>>,
}

impl RoadGraph {
    pub(crate) fn new(nodes: Vec<Coordinate>, adjacency: Vec<Vec<Edge>>) -> Self {
        debug_assert_eq!(nodes.len(), adjacency.len());
        Self { nodes, adjacency }
    }

    /// Creates a graph from geometric features.
    pub fn from_geometries<'a>(geometries: impl IntoIterator<Item = &'a Geometry>) -> Self {
        let mut builder = RoadGraphBuilder::default();
        geometries.into_iter().for_each(|geometry| {
            builder.add_geometry(geometry);
        });

        builder.build()
    }

    /// Creates a minimal built-in graph used when road geometry cannot be loaded.
    pub fn fallback() -> Self {
        let nodes = vec![Coordinate::new(40.8222, 29.9215), Coordinate::new(40.7654, 29.9408)];
        let adjacency = vec![vec![Edge { target: 1, weight: 8.5 }], vec![Edge { target: 0, weight: 8.5 }]];

        Self::new(nodes, adjacency)
    }

    /// Returns amount of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns amount of directed edges (each undirected connection is counted twice).
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    /// Returns outgoing edges of the node.
    #[cfg(test)]
    pub(crate) fn edges(&self, node_id: NodeId) -> &[Edge] {
        self.adjacency[node_id].as_slice()
    }

    /// Returns node location.
    pub fn node(&self, node_id: NodeId) -> Option<&Coordinate> {
        self.nodes.get(node_id)
    }

    /// Returns the node nearest to the given coordinate by great-circle distance. Ties are resolved
    /// in favor of the node added first.
    pub fn nearest_node(&self, coordinate: &Coordinate) -> Option<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .fold(None, |best: Option<(NodeId, Distance)>, (node_id, location)| {
                let distance = haversine_distance(coordinate, location);
                match best {
                    Some((_, best_distance)) if compare_floats(distance, best_distance) != Ordering::Less => best,
                    _ => Some((node_id, distance)),
                }
            })
            .map(|(node_id, _)| node_id)
    }

    /// Finds shortest path between two nodes using Dijkstra search. Returns `None` if target is
    /// not reachable.
    pub fn shortest_path(&self, source: NodeId, target: NodeId) -> Option<ShortestPath> {
        if source >= self.nodes.len() || target >= self.nodes.len() {
            return None;
        }

        let mut distances = vec![Distance::INFINITY; self.nodes.len()];
        let mut previous: Vec<Option<NodeId>> = vec![None; self.nodes.len()];
        let mut visited = vec![false; self.nodes.len()];
        let mut heap = BinaryHeap::new();

        distances[source] = 0.;
        heap.push(SearchState { distance: 0., node_id: source });

        while let Some(SearchState { distance, node_id }) = heap.pop() {
            if node_id == target {
                break;
            }

            if visited[node_id] {
                continue;
            }
            visited[node_id] = true;

            for edge in self.adjacency[node_id].iter().filter(|edge| !visited[edge.target]) {
                let candidate = distance + edge.weight;
                if candidate < distances[edge.target] {
                    distances[edge.target] = candidate;
                    previous[edge.target] = Some(node_id);
                    heap.push(SearchState { distance: candidate, node_id: edge.target });
                }
            }
        }

        if !distances[target].is_finite() {
            return None;
        }

        let mut nodes = vec![target];
        let mut current = target;
        while let Some(node_id) = previous[current] {
            nodes.push(node_id);
            current = node_id;
        }
        nodes.reverse();

        Some(ShortestPath { distance: distances[target], nodes })
    }
}

/// A search state ordered as min-heap by distance.
#[derive(Clone, Copy)]
struct SearchState {
    distance: Distance,
    node_id: NodeId,
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchState {}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_floats(other.distance, self.distance).then_with(|| other.node_id.cmp(&self.node_id))
    }
}
