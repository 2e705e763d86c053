use super::*;
use crate::construction::{DemandMap, Topology};
use crate::helpers::models::{create_params, create_registry, test_vehicle};
use crate::helpers::network::StraightLineTransportCost;
use crate::models::common::Coordinate;
use crate::models::problem::StationRegistry;
use std::sync::Arc;

fn create_plan_with(cost: f64, loaded: Weight, distance: f64, capacity: Weight) -> RoutePlan {
    RoutePlan {
        stops: vec![1],
        picked: vec![(1, loaded)],
        loaded,
        distance,
        fuel_cost: cost,
        rental_cost: 0.,
        vehicle: VehicleCandidate::Rental { capacity },
        path: vec![Coordinate::new(0., 0.)],
    }
}

#[test]
fn can_create_company_candidates_followed_by_rental() {
    let fleet = vec![test_vehicle("a", 500), test_vehicle("empty", 0), test_vehicle("b", 750)];
    let mut pool = VehiclePool::new(fleet.as_slice());
    pool.mark_used("a");

    let candidates = create_candidates(&pool, &create_params(200., 300, None));

    assert_eq!(
        candidates,
        vec![
            VehicleCandidate::Company { id: "b".to_string(), capacity: 750 },
            VehicleCandidate::Rental { capacity: 300 }
        ]
    );
}

#[test]
fn can_exclude_company_vehicles_when_cap_is_reached() {
    let fleet = vec![test_vehicle("a", 500), test_vehicle("b", 750)];
    let mut pool = VehiclePool::new(fleet.as_slice());
    assert!(pool.mark_used("a"));
    assert!(!pool.mark_used("a"));

    let candidates = create_candidates(&pool, &create_params(200., 500, Some(1)));

    assert_eq!(candidates, vec![VehicleCandidate::Rental { capacity: 500 }]);
}

#[test]
fn can_ignore_non_company_vehicles_in_pool() {
    let mut rented = test_vehicle("rented", 900);
    rented.is_company = false;

    let pool = VehiclePool::new(&[rented, test_vehicle("own", 400)]);

    assert_eq!(pool.unused().map(|vehicle| vehicle.id.as_str()).collect::<Vec<_>>(), vec!["own"]);
    assert_eq!(pool.used(), 0);
}

parameterized_test! {can_compare_plans, (left, right, expected), {
    assert_eq!(compare_plans(&left, &right), expected);
}}

can_compare_plans! {
    case_01_cheaper_wins: (create_plan_with(10., 100, 10., 500), create_plan_with(11., 300, 5., 300), Ordering::Less),
    case_02_loaded_on_cost_tie: (
        create_plan_with(10., 300, 10., 500),
        create_plan_with(10. + 1E-12, 100, 5., 300),
        Ordering::Less
    ),
    case_03_distance_on_load_tie: (
        create_plan_with(10., 100, 12., 500),
        create_plan_with(10., 100, 11., 500),
        Ordering::Greater
    ),
    case_04_capacity_on_distance_tie: (
        create_plan_with(10., 100, 10., 300),
        create_plan_with(10., 100, 10., 500),
        Ordering::Less
    ),
    case_05_equal: (create_plan_with(10., 100, 10., 500), create_plan_with(10., 100, 10., 500), Ordering::Equal),
}

fn evaluate(
    stations: Arc<StationRegistry>,
    demand: Vec<(StationId, Weight)>,
    candidates: Vec<VehicleCandidate>,
    params: RunParams,
) -> Option<RoutePlan> {
    let demand = DemandMap::new(demand);
    let topology = Topology::new(&demand, &stations, 12, 75.);
    let transport = StraightLineTransportCost::new(stations.clone());
    let max_capacity = candidates.iter().map(|candidate| candidate.capacity()).max().unwrap_or(0);
    let ctx = InsertionContext {
        demand: &demand,
        topology: &topology,
        stations: &stations,
        transport: &transport,
        max_capacity,
    };

    evaluate_candidates(&ctx, candidates.as_slice(), 1, &params)
}

#[test]
fn can_prefer_company_vehicle_over_rental() {
    let candidates = vec![
        VehicleCandidate::Company { id: "a".to_string(), capacity: 500 },
        VehicleCandidate::Rental { capacity: 500 },
    ];

    let plan = evaluate(create_registry(&[(1, 0.1, 0.)]), vec![(1, 300)], candidates, create_params(200., 500, None))
        .expect("plan should be created");

    assert_eq!(plan.vehicle.company_id(), Some("a"));
    assert_eq!(plan.loaded, 300);
    assert_eq!(plan.rental_cost, 0.);
    assert_eq!(plan.fuel_cost, plan.distance);
    assert!(plan.path.is_empty());
}

#[test]
fn can_skip_candidates_which_would_split_clearable_seed() {
    let candidates = vec![
        VehicleCandidate::Company { id: "small".to_string(), capacity: 200 },
        VehicleCandidate::Rental { capacity: 500 },
    ];

    let plan = evaluate(create_registry(&[(1, 0.1, 0.)]), vec![(1, 300)], candidates, create_params(200., 500, None))
        .expect("plan should be created");

    assert_eq!(plan.vehicle, VehicleCandidate::Rental { capacity: 500 });
    assert_eq!(plan.loaded, 300);
    assert_eq!(plan.rental_cost, 200.);
}

#[test]
fn can_split_seed_which_does_not_fit_any_candidate() {
    let candidates = vec![
        VehicleCandidate::Company { id: "small".to_string(), capacity: 200 },
        VehicleCandidate::Rental { capacity: 500 },
    ];

    let plan = evaluate(create_registry(&[(1, 0.1, 0.)]), vec![(1, 800)], candidates, create_params(200., 500, None))
        .expect("plan should be created");

    assert_eq!(plan.vehicle.company_id(), Some("small"));
    assert_eq!(plan.loaded, 200);
}

#[test]
fn can_return_none_when_seed_has_no_demand() {
    let plan = evaluate(
        create_registry(&[(1, 0.1, 0.)]),
        vec![(1, 0)],
        vec![VehicleCandidate::Rental { capacity: 500 }],
        create_params(200., 500, None),
    );

    assert!(plan.is_none());
}
