use super::*;
use crate::helpers::*;

fn create_problem_with_vehicles(vehicles: Vec<Vehicle>) -> Problem {
    Problem { vehicles, ..create_empty_problem() }
}

#[test]
fn can_detect_duplicated_vehicle_ids() {
    let problem = create_problem_with_vehicles(vec![
        create_vehicle("a", 100),
        create_vehicle("b", 100),
        create_vehicle("a", 200),
    ]);

    let result = check_e1200_no_vehicles_with_duplicate_ids(&ValidationContext::new(&problem));

    assert_eq!(
        result.map_err(|err| (err.code, err.action)),
        Err(("E1200".to_string(), "remove duplicated vehicle ids: a".to_string()))
    );
}

#[test]
fn can_detect_vehicle_without_capacity() {
    let problem = create_problem_with_vehicles(vec![Vehicle { capacity: None, ..create_vehicle("a", 100) }]);

    let result = check_e1201_vehicle_has_capacity(&ValidationContext::new(&problem));

    assert_eq!(result.err().map(|err| err.code), Some("E1201".to_string()));
}

parameterized_test! {can_check_vehicle_capacity_and_costs, (vehicle, is_valid), {
    can_check_vehicle_capacity_and_costs_impl(vehicle, is_valid);
}}

can_check_vehicle_capacity_and_costs! {
    case01_valid: (create_vehicle("a", 500), true),
    case02_zero_capacity: (create_vehicle("a", 0), true),
    case03_negative_capacity: (create_vehicle("a", -1), false),
    case04_negative_fuel: (Vehicle { fuel_cost_per_km: Some(-1.), ..create_vehicle("a", 500) }, false),
    case05_infinite_rental: (Vehicle { rental_cost: Some(f64::INFINITY), ..create_vehicle("a", 500) }, false),
    case06_valid_costs: (
        Vehicle { fuel_cost_per_km: Some(2.), rental_cost: Some(0.), ..create_vehicle("a", 500) },
        true,
    ),
}

fn can_check_vehicle_capacity_and_costs_impl(vehicle: Vehicle, is_valid: bool) {
    let problem = create_problem_with_vehicles(vec![vehicle]);

    let result = check_e1202_vehicle_capacity_is_not_negative(&ValidationContext::new(&problem));

    assert_eq!(result.is_ok(), is_valid);
}
