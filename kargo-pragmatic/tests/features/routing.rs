use crate::format::RoutingContext;
use crate::format::geometry::read_road_graph;
use crate::format::problem::PragmaticProblem;
use crate::format::solution::create_solution;
use crate::helpers::*;
use kargo_core::network::NetworkConfig;
use kargo_core::solver::{AssignmentConfig, AssignmentSolver};
use kargo_core::utils::{Environment, compare_floats_with_tolerance};
use std::cmp::Ordering;
use std::io::BufReader;

const ROADS: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": {},
      "geometry": {
        "type": "LineString",
        "coordinates": [[29.92156586537241, 40.82224624200172], [29.93, 40.85], [29.95, 40.9]]
      }
    }
  ]
}"#;

const PROBLEM: &str = r#"{
  "stations": [
    { "id": 1, "name": "Near", "latitude": 40.85, "longitude": 29.93 },
    { "id": 2, "name": "Far", "latitude": 40.9, "longitude": 29.95 }
  ],
  "cargo": [ { "stationId": 1, "weight": 100 }, { "stationId": 2, "weight": 100 } ],
  "vehicles": [ { "id": "truck", "capacity": 500 } ]
}"#;

fn is_same(left: f64, right: f64) -> bool {
    compare_floats_with_tolerance(left, right, 1e-9) == Ordering::Equal
}

#[test]
fn can_follow_road_geometry_until_hub() {
    let environment = Environment::silent();
    let graph = read_road_graph(Some(BufReader::new(ROADS.as_bytes())), &environment.logger);
    let routing = RoutingContext::new(graph, NetworkConfig::default());
    let problem = (PROBLEM.to_string(), &routing).read_pragmatic().expect("valid problem");

    let assignment = AssignmentSolver::new(AssignmentConfig::default(), environment).solve(&problem);
    let solution = create_solution(&problem, &assignment);

    assert_eq!(solution.routes.len(), 1);
    let route = &solution.routes[0];
    assert_eq!(route.stations, vec![2, 1]);
    assert_eq!(
        route.steps.iter().map(|step| (step.from.as_str(), step.to.as_str())).collect::<Vec<_>>(),
        vec![("Far", "Near"), ("Near", "Hub")]
    );
    assert_eq!(route.path.len(), 4);
    assert!(route.path.first().is_some_and(|&[lat, lng]| is_same(lat, 40.9) && is_same(lng, 29.95)));
    assert!(route.path.last().is_some_and(|&[lat, lng]| is_same(lat, HUB_LAT) && is_same(lng, HUB_LNG)));
}
