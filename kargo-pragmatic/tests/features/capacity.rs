use crate::format::problem::*;
use crate::format::solution::*;
use crate::helpers::*;

#[test]
fn can_serve_single_station_with_company_vehicle_without_rentals() {
    let problem = create_problem_with_demand(
        &[(1, (0.1, 0.), 300)],
        vec![create_vehicle("truck", 500)],
        create_params(1e9, 500, None),
    );

    let solution = solve_with_default_config(problem);

    assert_eq!(solution.status, SolutionStatus::FullyServed);
    assert_eq!(solution.routes.len(), 1);
    assert_eq!(solution.routes[0].stations, vec![1]);
    assert_eq!(solution.routes[0].loaded_kg, 300);
    assert_eq!(solution.routes[0].vehicle_id.as_deref(), Some("truck"));
    assert!(solution.rejected.is_empty());
}

#[test]
fn can_split_station_demand_between_company_and_rental_vehicle() {
    let problem = create_problem_with_demand(
        &[(1, (0.1, 0.), 700)],
        vec![create_vehicle("truck", 500)],
        create_params(200., 500, None),
    );

    let solution = solve_with_default_config(problem);

    assert_eq!(solution.status, SolutionStatus::FullyServed);
    assert_eq!(
        solution.routes.iter().map(|route| (route.rental, route.loaded_kg)).collect::<Vec<_>>(),
        vec![(false, 500), (true, 200)]
    );
    assert!(solution.routes.iter().all(|route| route.loaded_kg <= route.capacity_kg));
    assert_eq!(solution.statistic.total_rental_cost, 200.);
}

#[test]
fn can_skip_vehicle_which_cannot_clear_seed_demand() {
    let problem = create_problem_with_demand(
        &[(1, (0.1, 0.), 400)],
        vec![create_vehicle("small", 300)],
        create_params(200., 500, None),
    );

    let solution = solve_with_default_config(problem);

    assert_eq!(solution.routes.len(), 1);
    assert!(solution.routes[0].rental);
    assert_eq!(solution.routes[0].loaded_kg, 400);
    assert!(solution.company_vehicles.is_empty());
}

#[test]
fn can_use_default_rental_capacity_for_non_positive_value() {
    let problem = create_problem_with_demand(
        &[(1, (0.1, 0.), 900)],
        vec![],
        create_params(200., -10, None),
    );

    let solution = solve_with_default_config(problem);

    assert_eq!(solution.params.rental_capacity_kg, Some(500));
    assert_eq!(solution.routes.iter().map(|route| route.loaded_kg).collect::<Vec<_>>(), vec![500, 400]);
}
