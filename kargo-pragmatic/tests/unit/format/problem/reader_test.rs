use super::*;
use crate::helpers::*;
use kargo_core::models::common::HUB_ID;

fn read(problem: Problem) -> CoreProblem {
    map_to_problem(problem, &create_straight_line_routing()).expect("valid problem")
}

#[test]
fn can_use_default_hub_when_not_specified() {
    let problem = read(create_problem_with_demand(&[(1, (0.1, 0.), 100)], vec![], create_params(200., 500, None)));

    assert_eq!(problem.stations.hub(), &Hub::default());
    assert_eq!(problem.stations.resolve(HUB_ID), Some(Coordinate::new(HUB_LAT, HUB_LNG)));
}

#[test]
fn can_use_hub_override_with_default_name() {
    let problem = read(Problem {
        hub: Some(HubDefinition { name: None, latitude: 41., longitude: 29. }),
        ..create_empty_problem()
    });

    assert_eq!(problem.stations.hub().name, "Hub");
    assert_eq!(problem.stations.hub().location, Coordinate::new(41., 29.));
}

#[test]
fn can_map_stations_cargo_and_fleet() {
    let problem = read(Problem {
        vehicles: vec![
            create_vehicle("own", 500),
            Vehicle { is_company_owned: Some(false), ..create_vehicle("partner", 900) },
        ],
        ..create_problem_with_demand(&[(1, (0.1, 0.), 100), (2, (0.2, 0.), 50)], vec![], create_params(200., 500, None))
    });

    assert_eq!(problem.stations.len(), 2);
    assert_eq!(problem.stations.name_of(2), "s2");
    assert_eq!(problem.cargo, vec![CoreCargo { station_id: 1, weight: 100 }, CoreCargo { station_id: 2, weight: 50 }]);
    assert_eq!(
        problem.fleet,
        vec![
            CoreVehicle { id: "own".to_string(), capacity: 500, is_company: true },
            CoreVehicle { id: "partner".to_string(), capacity: 900, is_company: false },
        ]
    );
}

#[test]
fn can_reject_cargo_for_unknown_station() {
    let result = map_to_problem(
        Problem {
            cargo: vec![create_cargo(1, 100), create_cargo(99, 400)],
            ..create_problem_with_demand(&[(1, (0.1, 0.), 100)], vec![], create_params(200., 500, None))
        },
        &create_straight_line_routing(),
    );

    assert_eq!(result.err().map(|err| err.codes().join(",")), Some("E1104".to_string()));
}

#[test]
fn can_reject_invalid_problem() {
    let result = map_to_problem(
        Problem { stations: vec![create_station(0, (0., 0.))], ..create_empty_problem() },
        &create_straight_line_routing(),
    );

    assert_eq!(result.err().map(|err| err.codes().join(",")), Some("E1002".to_string()));
}

parameterized_test! {can_create_run_params, (params, expected), {
    can_create_run_params_impl(params, expected);
}}

can_create_run_params! {
    case01_defaults: (None, RunParams::default()),
    case02_all_set: (
        Some(RunParameters {
            fuel_cost_per_km: Some(2.),
            rental_cost_per_vehicle: Some(50.),
            rental_capacity_kg: Some(800),
            max_company_vehicles: Some(3),
        }),
        RunParams { fuel_cost_per_km: 2., rental_cost: 50., rental_capacity: 800, max_company_vehicles: Some(3) },
    ),
    case03_non_positive_capacity_and_cap: (
        Some(RunParameters { rental_capacity_kg: Some(0), max_company_vehicles: Some(-1), ..RunParameters::default() }),
        RunParams::default(),
    ),
}

fn can_create_run_params_impl(params: Option<RunParameters>, expected: RunParams) {
    assert_eq!(create_run_params(params.as_ref()), expected);
}
