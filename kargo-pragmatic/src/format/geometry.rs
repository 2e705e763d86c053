//! Reads road network geometry from GeoJSON feature collections.

#[cfg(test)]
#[path = "../../tests/unit/format/geometry_test.rs"]
mod geometry_test;

use crate::format::{FormatError, MultiFormatError};
use kargo_core::models::common::Coordinate;
use kargo_core::network::{Geometry, RoadGraph, load_road_graph};
use kargo_core::utils::{GenericError, InfoLogger};
use serde::Deserialize;
use std::io::{BufReader, Read};

/// A GeoJSON position: longitude, latitude and optional altitude.
type Position = Vec<f64>;

#[derive(Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    #[serde(default)]
    geometry: Option<FeatureGeometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum FeatureGeometry {
    LineString { coordinates: Vec<Position> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    #[serde(other)]
    Unsupported,
}

/// Reads supported geometries (line strings, polygons and multi polygons) from GeoJSON. Other
/// geometry types are ignored.
pub fn read_geometries<R: Read>(reader: BufReader<R>) -> Result<Vec<Geometry>, MultiFormatError> {
    let collection: FeatureCollection = serde_json::from_reader(reader).map_err(|err| {
        MultiFormatError::from(FormatError::new_with_details(
            "E0001".to_string(),
            "cannot deserialize road geometry".to_string(),
            "check GeoJSON feature collection".to_string(),
            err.to_string(),
        ))
    })?;

    Ok(collection
        .features
        .into_iter()
        .filter_map(|feature| match feature.geometry? {
            FeatureGeometry::LineString { coordinates } => Some(Geometry::LineString(to_line(coordinates))),
            FeatureGeometry::Polygon { coordinates } => {
                Some(Geometry::Polygon(coordinates.into_iter().map(to_line).collect()))
            }
            FeatureGeometry::MultiPolygon { coordinates } => Some(Geometry::MultiPolygon(
                coordinates.into_iter().map(|rings| rings.into_iter().map(to_line).collect()).collect(),
            )),
            FeatureGeometry::Unsupported => None,
        })
        .collect())
}

/// Reads road graph from GeoJSON source. Missing or malformed source results in fallback graph.
pub fn read_road_graph<R: Read>(reader: Option<BufReader<R>>, logger: &InfoLogger) -> RoadGraph {
    let source = reader
        .ok_or_else(|| GenericError::from("road geometry is not specified"))
        .and_then(|reader| read_geometries(reader).map_err(|err| GenericError::from(err.to_string())));

    load_road_graph(source, logger)
}

fn to_line(positions: Vec<Position>) -> Vec<Coordinate> {
    positions
        .into_iter()
        .filter_map(|position| match position.as_slice() {
            [lng, lat, ..] => Some(Coordinate::new(*lat, *lng)),
            _ => None,
        })
        .collect()
}
