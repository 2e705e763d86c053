#[cfg(test)]
#[path = "../../tests/unit/network/geometry_test.rs"]
mod geometry_test;

use crate::models::common::{Coordinate, haversine_distance};
use crate::network::{Edge, NodeId, RoadGraph};
use crate::utils::{GenericResult, InfoLogger, Timer};
use rustc_hash::FxHashMap;

/// A scale used to deduplicate coordinates: six decimal digits.
const COORDINATE_SCALE: f64 = 1_000_000.;

/// A geometric feature of road network source.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    /// An ordered coordinate sequence.
    LineString(Vec<Coordinate>),
    /// A polygon as a list of rings, only the outer (first) ring is used.
    Polygon(Vec<Vec<Coordinate>>),
    /// A list of polygons, only the outer ring of each is used.
    MultiPolygon(Vec<Vec<Vec<Coordinate>>>),
}

impl Geometry {
    /// Returns coordinate sequences which contribute edges to the road graph.
    pub fn lines(&self) -> Vec<&[Coordinate]> {
        match self {
            Geometry::LineString(line) => vec![line.as_slice()],
            Geometry::Polygon(rings) => rings.first().map(|ring| ring.as_slice()).into_iter().collect(),
            Geometry::MultiPolygon(polygons) => {
                polygons.iter().filter_map(|rings| rings.first()).map(|ring| ring.as_slice()).collect()
            }
        }
    }
}

/// Builds road graph from geometries deduplicating nodes by their rounded coordinate.
#[derive(Default)]
pub struct RoadGraphBuilder {
    nodes: Vec<Coordinate>,
    adjacency: Vec<Vec<Edge>>,
    index: FxHashMap<(i64, i64), NodeId>,
}

impl RoadGraphBuilder {
    /// Adds edges of the given geometry.
    pub fn add_geometry(&mut self, geometry: &Geometry) -> &mut Self {
        geometry.lines().into_iter().for_each(|line| self.add_line(line));
        self
    }

    /// Adds undirected edges between consecutive coordinates.
    pub fn add_line(&mut self, line: &[Coordinate]) {
        let mut previous: Option<NodeId> = None;

        for coordinate in line {
            let current = self.get_or_insert(coordinate);

            if let Some(previous) = previous.filter(|&previous| previous != current) {
                let weight = haversine_distance(&self.nodes[previous], &self.nodes[current]);
                self.adjacency[previous].push(Edge { target: current, weight });
                self.adjacency[current].push(Edge { target: previous, weight });
            }

            previous = Some(current);
        }
    }

    /// Builds the road graph.
    pub fn build(self) -> RoadGraph {
        RoadGraph::new(self.nodes, self.adjacency)
    }

    fn get_or_insert(&mut self, coordinate: &Coordinate) -> NodeId {
        let key =
            ((coordinate.lat * COORDINATE_SCALE).round() as i64, (coordinate.lng * COORDINATE_SCALE).round() as i64);

        *self.index.entry(key).or_insert_with(|| {
            self.nodes.push(*coordinate);
            self.adjacency.push(vec![]);
            self.nodes.len() - 1
        })
    }
}

/// Loads road graph from geometry source. On failure, falls back to a minimal two-node graph.
pub fn load_road_graph(source: GenericResult<Vec<Geometry>>, logger: &InfoLogger) -> RoadGraph {
    let graph = match source {
        Ok(geometries) => Timer::measure_duration_with_callback(
            || RoadGraph::from_geometries(geometries.iter()),
            |duration| (logger)(format!("road graph loaded in {}ms", duration.as_millis()).as_str()),
        ),
        Err(err) => {
            (logger)(format!("cannot load road geometry: '{err}', using fallback graph").as_str());
            RoadGraph::fallback()
        }
    };

    (logger)(format!("road graph has {} nodes and {} edges", graph.node_count(), graph.edge_count()).as_str());

    graph
}
