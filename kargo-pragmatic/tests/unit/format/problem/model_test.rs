use super::*;

fn read(json: &str) -> Result<Problem, MultiFormatError> {
    deserialize_problem(BufReader::new(json.as_bytes()))
}

#[test]
fn can_deserialize_minimal_problem_with_defaults() {
    let problem = read(r#"{ "stations": [ { "id": 1, "latitude": 40.7, "longitude": 29.9 } ] }"#).expect("valid json");

    assert_eq!(problem.stations.len(), 1);
    assert_eq!(problem.stations[0].name, None);
    assert!(problem.cargo.is_empty());
    assert!(problem.vehicles.is_empty());
    assert_eq!(problem.hub, None);
    assert_eq!(problem.params, None);
}

#[test]
fn can_deserialize_camel_case_fields() {
    let problem = read(
        r#"{
          "hub": { "name": "Depot", "latitude": 40.8, "longitude": 29.9 },
          "stations": [ { "id": 7, "name": "Gebze", "latitude": 40.8, "longitude": 29.4 } ],
          "cargo": [ { "id": "c1", "stationId": 7, "weight": 120, "quantity": 3 } ],
          "vehicles": [ { "id": "t1", "capacity": 750, "isCompanyOwned": false, "fuelCostPerKm": 2.5 } ],
          "params": {
            "fuelCostPerKm": 1.5, "rentalCostPerVehicle": 300, "rentalCapacityKg": 600, "maxCompanyVehicles": 2
          }
        }"#,
    )
    .expect("valid json");

    assert_eq!(problem.hub.as_ref().and_then(|hub| hub.name.clone()), Some("Depot".to_string()));
    assert_eq!(
        problem.cargo[0],
        Cargo { id: Some("c1".to_string()), station_id: Some(7), weight: Some(120), quantity: Some(3) }
    );
    assert_eq!(problem.vehicles[0].is_company_owned, Some(false));
    assert_eq!(problem.vehicles[0].fuel_cost_per_km, Some(2.5));
    assert_eq!(
        problem.params,
        Some(RunParameters {
            fuel_cost_per_km: Some(1.5),
            rental_cost_per_vehicle: Some(300.),
            rental_capacity_kg: Some(600),
            max_company_vehicles: Some(2),
        })
    );
}

parameterized_test! {can_return_e0000_for_malformed_input, json, {
    can_return_e0000_for_malformed_input_impl(json);
}}

can_return_e0000_for_malformed_input! {
    case01_not_json: "stations",
    case02_no_stations: r#"{ "cargo": [] }"#,
    case03_fractional_weight: r#"{ "stations": [], "cargo": [ { "stationId": 1, "weight": 1.5 } ] }"#,
    case04_negative_station_id: r#"{ "stations": [ { "id": -1, "latitude": 0, "longitude": 0 } ] }"#,
}

fn can_return_e0000_for_malformed_input_impl(json: &str) {
    let err = read(json).expect_err("malformed json");

    assert_eq!(err.codes(), vec!["E0000"]);
    assert!(err.errors[0].details.as_ref().is_some_and(|details| !details.is_empty()));
}

#[test]
fn can_skip_missing_optional_fields_on_serialization() {
    let problem = Problem {
        hub: None,
        stations: vec![Station { id: 1, name: None, latitude: 40., longitude: 29. }],
        cargo: vec![Cargo { id: None, station_id: Some(1), weight: Some(10), quantity: None }],
        vehicles: vec![],
        params: None,
    };
    let mut writer = BufWriter::new(Vec::new());

    serialize_problem(&problem, &mut writer).expect("cannot serialize");

    let json = String::from_utf8(writer.into_inner().expect("cannot get buffer")).expect("utf8");
    assert!(!json.contains("hub"));
    assert!(!json.contains("quantity"));
    assert!(json.contains("\"stationId\": 1"));
    assert_eq!(read(json.as_str()).expect("valid json"), problem);
}
