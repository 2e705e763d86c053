use super::*;
use crate::helpers::network::create_graph;

/// A square with a shortcut: 0-1-2 along the top and 0-3-2 along the bottom.
fn create_square_graph() -> RoadGraph {
    create_graph(&[&[(0., 0.), (0., 1.), (1., 1.)], &[(0., 0.), (1., 0.), (1., 1.)], &[(0., 0.), (0.5, 0.5), (1., 1.)]])
}

#[test]
fn can_find_nearest_node() {
    let graph = create_square_graph();

    assert_eq!(graph.nearest_node(&Coordinate::new(0.05, 0.95)), Some(1));
    assert_eq!(graph.nearest_node(&Coordinate::new(0.9, 0.9)), Some(2));
    assert_eq!(RoadGraph::default().nearest_node(&Coordinate::new(0., 0.)), None);
}

#[test]
fn can_resolve_nearest_node_tie_to_first_added() {
    let graph = create_graph(&[&[(0., -1.), (0., 1.)]]);

    assert_eq!(graph.nearest_node(&Coordinate::new(0., 0.)), Some(0));
}

#[test]
fn can_find_shortest_path_through_shortcut() {
    let graph = create_square_graph();

    let path = graph.shortest_path(0, 2).expect("path should exist");

    assert_eq!(path.nodes.first(), Some(&0));
    assert_eq!(path.nodes.last(), Some(&2));
    assert_eq!(path.nodes.len(), 3);
    let expected = haversine_distance(&Coordinate::new(0., 0.), &Coordinate::new(0.5, 0.5))
        + haversine_distance(&Coordinate::new(0.5, 0.5), &Coordinate::new(1., 1.));
    assert!((path.distance - expected).abs() < 1E-9);
}

#[test]
fn can_return_trivial_path_for_same_node() {
    let graph = create_square_graph();

    assert_eq!(graph.shortest_path(1, 1), Some(ShortestPath { distance: 0., nodes: vec![1] }));
}

#[test]
fn can_return_none_for_disconnected_nodes() {
    let graph = create_graph(&[&[(0., 0.), (0., 1.)], &[(5., 5.), (5., 6.)]]);

    assert!(graph.shortest_path(0, 1).is_some());
    assert!(graph.shortest_path(0, 2).is_none());
}

#[test]
fn can_return_none_for_unknown_nodes() {
    let graph = create_square_graph();

    assert!(graph.shortest_path(0, 100).is_none());
    assert!(graph.shortest_path(100, 0).is_none());
}

#[test]
fn can_get_symmetric_distances() {
    let graph = create_square_graph();

    let forward = graph.shortest_path(1, 3).map(|path| path.distance);
    let backward = graph.shortest_path(3, 1).map(|path| path.distance);

    assert!(forward.is_some());
    assert!((forward.unwrap() - backward.unwrap()).abs() < 1E-9);
}
