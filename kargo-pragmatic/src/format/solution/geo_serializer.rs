#[cfg(test)]
#[path = "../../../tests/unit/format/solution/geo_serializer_test.rs"]
mod geo_serializer_test;

use super::{Route, Solution};
use kargo_core::models::Problem;
use kargo_core::models::common::{Coordinate, HUB_ID, StationId};
use kargo_core::utils::compare_floats;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::io::{BufWriter, Error, ErrorKind, Write};

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: (f64, f64) },
    LineString { coordinates: Vec<(f64, f64)> },
}

#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type")]
struct Feature {
    pub properties: HashMap<String, String>,
    pub geometry: Geometry,
}

#[derive(Clone, Debug, Serialize, Eq, PartialEq)]
#[serde(tag = "type")]
struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl Eq for Geometry {}

impl PartialEq for Geometry {
    fn eq(&self, other: &Self) -> bool {
        let compare_pair = |l_coord: &(f64, f64), r_coord: &(f64, f64)| {
            compare_floats(l_coord.0, r_coord.0) == Ordering::Equal
                && compare_floats(l_coord.1, r_coord.1) == Ordering::Equal
        };

        match (self, other) {
            (Geometry::Point { coordinates: l_coord }, Geometry::Point { coordinates: r_coord }) => {
                compare_pair(l_coord, r_coord)
            }
            (Geometry::LineString { coordinates: l_coords }, Geometry::LineString { coordinates: r_coords }) => {
                l_coords.len() == r_coords.len()
                    && l_coords.iter().zip(r_coords.iter()).all(|(l_coord, r_coord)| compare_pair(l_coord, r_coord))
            }
            _ => false,
        }
    }
}

impl Eq for Feature {}

impl PartialEq for Feature {
    fn eq(&self, other: &Self) -> bool {
        self.properties == other.properties && self.geometry.eq(&other.geometry)
    }
}

/// Serializes solution into geo json format.
pub fn serialize_solution_as_geojson<W: Write>(
    writer: BufWriter<W>,
    problem: &Problem,
    solution: &Solution,
) -> Result<(), Error> {
    let geo_json = create_geojson_solution(problem, solution)?;

    serde_json::to_writer_pretty(writer, &geo_json).map_err(Error::from)
}

fn create_geojson_solution(problem: &Problem, solution: &Solution) -> Result<FeatureCollection, Error> {
    let lookup = |id: StationId| {
        problem
            .stations
            .resolve(id)
            .ok_or_else(|| invalid_data(format!("cannot find station: {id}").as_str()))
    };

    let hub_marker = Feature {
        properties: slice_to_map(&[
            ("marker-color", "#000000"),
            ("marker-size", "large"),
            ("marker-symbol", "warehouse"),
            ("name", problem.stations.hub().name.as_str()),
        ]),
        geometry: Geometry::Point { coordinates: get_lng_lat(&lookup(HUB_ID)?) },
    };

    let route_lines = solution
        .routes
        .iter()
        .enumerate()
        .map(|(route_idx, route)| get_route_line(route_idx, route, get_color(route_idx), &lookup))
        .collect::<Result<Vec<_>, Error>>()?;

    let stop_markers = solution
        .routes
        .iter()
        .enumerate()
        .flat_map(|(route_idx, route)| {
            route.pickups.iter().map(move |pickup| (route_idx, pickup.station_id, pickup.weight))
        })
        .map(|(route_idx, station_id, weight)| {
            Ok(Feature {
                properties: slice_to_map(&[
                    ("marker-color", get_color(route_idx)),
                    ("marker-size", "medium"),
                    ("marker-symbol", "marker"),
                    ("route_idx", route_idx.to_string().as_str()),
                    ("station_id", station_id.to_string().as_str()),
                    ("name", problem.stations.name_of(station_id).as_str()),
                    ("picked_kg", weight.to_string().as_str()),
                ]),
                geometry: Geometry::Point { coordinates: get_lng_lat(&lookup(station_id)?) },
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let unserved_markers = solution
        .unserved
        .iter()
        .map(|unserved| {
            Ok(Feature {
                properties: slice_to_map(&[
                    ("marker-color", "#808080"),
                    ("marker-size", "medium"),
                    ("marker-symbol", "roadblock"),
                    ("station_id", unserved.station_id.to_string().as_str()),
                    ("name", problem.stations.name_of(unserved.station_id).as_str()),
                    ("unserved_kg", unserved.weight.to_string().as_str()),
                ]),
                geometry: Geometry::Point { coordinates: get_lng_lat(&lookup(unserved.station_id)?) },
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    Ok(FeatureCollection {
        features: std::iter::once(hub_marker)
            .chain(route_lines)
            .chain(stop_markers)
            .chain(unserved_markers)
            .collect(),
    })
}

fn get_route_line<F>(route_idx: usize, route: &Route, color: &str, lookup: &F) -> Result<Feature, Error>
where
    F: Fn(StationId) -> Result<Coordinate, Error>,
{
    // road path is empty when geometry cannot be resolved, stations are connected directly then
    let coordinates = if route.path.is_empty() {
        route
            .stations
            .iter()
            .copied()
            .chain(std::iter::once(HUB_ID))
            .map(|id| lookup(id).map(|coordinate| get_lng_lat(&coordinate)))
            .collect::<Result<Vec<_>, Error>>()?
    } else {
        route.path.iter().map(|&[lat, lng]| (lng, lat)).collect()
    };

    let vehicle = route.vehicle_id.clone().unwrap_or_else(|| "rental".to_string());

    Ok(Feature {
        properties: slice_to_map(&[
            ("vehicle_id", vehicle.as_str()),
            ("route_idx", route_idx.to_string().as_str()),
            ("stations", route.stations.len().to_string().as_str()),
            ("loaded_kg", route.loaded_kg.to_string().as_str()),
            ("distance_km", route.distance_km.to_string().as_str()),
            ("total_cost", route.total_cost.to_string().as_str()),
            ("stroke-width", "4"),
            ("stroke", color),
        ]),
        geometry: Geometry::LineString { coordinates },
    })
}

fn slice_to_map(vec: &[(&str, &str)]) -> HashMap<String, String> {
    vec.iter().map(|&(key, value)| (key.to_string(), value.to_string())).collect()
}

fn get_color(idx: usize) -> &'static str {
    const COLOR_LIST: &[&str; 15] = &[
        "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6", "#bcf60c", "#008080", "#e6beff",
        "#9a6324", "#800000", "#808000", "#000075", "#808080",
    ];

    COLOR_LIST[idx % COLOR_LIST.len()]
}

fn get_lng_lat(coordinate: &Coordinate) -> (f64, f64) {
    (coordinate.lng, coordinate.lat)
}

fn invalid_data(msg: &str) -> Error {
    Error::new(ErrorKind::InvalidData, msg)
}
