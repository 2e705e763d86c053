use super::*;
use crate::helpers::*;

fn create_problem_with_stations(stations: Vec<Station>) -> Problem {
    Problem { stations, ..create_empty_problem() }
}

#[test]
fn can_detect_duplicated_station_ids() {
    let problem = create_problem_with_stations(vec![
        create_station(1, (0.1, 0.)),
        create_station(2, (0.2, 0.)),
        create_station(1, (0.3, 0.)),
        create_station(2, (0.4, 0.)),
        create_station(1, (0.5, 0.)),
    ]);

    let result = check_e1000_no_stations_with_duplicate_ids(&ValidationContext::new(&problem));

    assert_eq!(
        result.map_err(|err| (err.code, err.action)),
        Err(("E1000".to_string(), "remove duplicated station ids: 1, 2".to_string()))
    );
}

parameterized_test! {can_detect_invalid_station_coordinates, (latitude, longitude, expected), {
    can_detect_invalid_station_coordinates_impl(latitude, longitude, expected);
}}

can_detect_invalid_station_coordinates! {
    case01_valid: (40.7, 29.9, None),
    case02_edges: (-90., 180., None),
    case03_latitude_out_of_range: (90.5, 29.9, Some("E1001")),
    case04_longitude_out_of_range: (40.7, -180.1, Some("E1001")),
    case05_nan: (f64::NAN, 29.9, Some("E1001")),
    case06_infinite: (40.7, f64::INFINITY, Some("E1001")),
}

fn can_detect_invalid_station_coordinates_impl(latitude: f64, longitude: f64, expected: Option<&str>) {
    let problem = create_problem_with_stations(vec![Station { id: 1, name: None, latitude, longitude }]);

    let result = check_e1001_station_coordinates_are_valid(&ValidationContext::new(&problem));

    assert_eq!(result.err().map(|err| err.code), expected.map(|code| code.to_string()));
}

#[test]
fn can_detect_station_with_hub_id() {
    let problem = create_problem_with_stations(vec![create_station(0, (0.1, 0.))]);

    let result = check_e1002_no_station_with_hub_id(&ValidationContext::new(&problem));

    assert_eq!(result.err().map(|err| err.code), Some("E1002".to_string()));
}

#[test]
fn can_detect_invalid_hub_coordinate() {
    let problem =
        Problem { hub: Some(HubDefinition { name: None, latitude: 100., longitude: 29. }), ..create_empty_problem() };

    let result = check_e1003_hub_coordinate_is_valid(&ValidationContext::new(&problem));

    assert_eq!(result.err().map(|err| err.code), Some("E1003".to_string()));
}
