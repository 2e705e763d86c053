use super::*;
use crate::helpers::models::{create_registry, test_cargo};
use std::sync::{Arc, Mutex};

#[test]
fn can_sum_demand_of_same_station() {
    let demand = DemandMap::new(vec![(2, 100), (1, 50), (2, 25), (3, 0)]);

    assert_eq!(demand.remaining(2), 125);
    assert_eq!(demand.total(), 175);
    assert_eq!(demand.active().collect::<Vec<_>>(), vec![(1, 50), (2, 125)]);
}

#[test]
fn can_saturate_demand_sums_at_weight_limit() {
    let demand = DemandMap::new(vec![(1, Weight::MAX), (1, 10), (2, 5)]);

    assert_eq!(demand.remaining(1), Weight::MAX);
    assert_eq!(demand.remaining(2), 5);
    assert_eq!(demand.total(), Weight::MAX);
}

#[test]
fn can_take_demand_within_capacity() {
    let mut demand = DemandMap::new(vec![(1, 300)]);

    assert_eq!(demand.take(1, 200), 200);
    assert_eq!(demand.take(1, 200), 100);
    assert_eq!(demand.take(1, 200), 0);
    assert_eq!(demand.take(42, 200), 0);
    assert!(demand.is_exhausted());
}

#[test]
fn can_apply_picked_quantities() {
    let mut demand = DemandMap::new(vec![(1, 300), (2, 100), (3, 50)]);

    let applied = demand.apply(&[(1, 120), (2, 150), (4, 10)]);

    assert_eq!(applied, 220);
    assert_eq!(demand.unserved(), vec![(1, 180), (3, 50)]);
}

#[test]
fn can_aggregate_demand_discarding_unresolvable_cargo() {
    let stations = create_registry(&[(1, 0.1, 0.), (2, 0.2, 0.)]);
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };
    let cargo =
        vec![test_cargo(1, 100), test_cargo(1, 20), test_cargo(2, 0), test_cargo(7, 40), test_cargo(HUB_ID, 10)];

    let demand = aggregate_demand(cargo.as_slice(), &stations, &logger);

    assert_eq!(demand.unserved(), vec![(1, 120)]);
    assert!(messages.lock().unwrap().iter().any(|msg| msg.contains("discarded 3 cargo records")));
}

parameterized_test! {can_calculate_percentile, (values, p, expected), {
    let actual = percentile(values.as_slice(), p);
    assert!((actual - expected).abs() < 1E-9, "expected {expected}, got {actual}");
}}

can_calculate_percentile! {
    case_01_empty: (Vec::<Float>::new(), 75., 0.),
    case_02_single: (vec![10.], 75., 10.),
    case_03_interpolated: (vec![4., 1., 3., 2.], 75., 3.25),
    case_04_min: (vec![4., 1., 3., 2.], 0., 1.),
    case_05_max: (vec![4., 1., 3., 2.], 100., 4.),
    case_06_exact_rank: (vec![5., 1., 4., 2., 3.], 75., 4.),
    case_07_above_max: (vec![4., 1., 3., 2.], 150., 4.),
    case_08_below_min: (vec![4., 1., 3., 2.], -10., 1.),
}

#[test]
fn can_build_neighbors_of_active_stations_only() {
    let stations = create_registry(&[(1, 0.01, 0.), (2, 0.02, 0.), (3, 0.04, 0.), (4, 0.015, 0.)]);
    let demand = DemandMap::new(vec![(1, 10), (2, 10), (3, 10), (4, 0)]);

    let neighbors = NeighborMap::new(&demand, &stations, 2);

    assert_eq!(neighbors.get(1), &[2, 3]);
    assert_eq!(neighbors.get(2), &[1, 3]);
    assert_eq!(neighbors.get(3), &[2, 1]);
    assert!(neighbors.get(4).is_empty());
}

#[test]
fn can_limit_neighbors_by_k() {
    let stations = create_registry(&[(1, 0.01, 0.), (2, 0.02, 0.), (3, 0.03, 0.)]);
    let demand = DemandMap::new(vec![(1, 10), (2, 10), (3, 10)]);

    assert_eq!(NeighborMap::new(&demand, &stations, 1).get(1), &[2]);
    assert!(NeighborMap::new(&demand, &stations, 0).get(1).is_empty());
}

#[test]
fn can_classify_far_stations() {
    let stations = create_registry(&[(1, 0.1, 0.), (2, 0.2, 0.), (3, 0.3, 0.), (4, 0.4, 0.)]);
    let demand = DemandMap::new(vec![(1, 100), (2, 100), (3, 100), (4, 100)]);

    let topology = Topology::new(&demand, &stations, 12, 75.);

    assert!(topology.far_threshold() > topology.hub_distance(3));
    assert!(topology.far_threshold() < topology.hub_distance(4));
    assert_eq!((1..=4).map(|id| topology.is_far(id)).collect::<Vec<_>>(), vec![false, false, false, true]);
    assert_eq!(topology.hub_distance(42), 0.);
    assert!(!topology.is_far(42));
}
