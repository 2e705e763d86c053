//! Core crate contains building blocks to assign pending cargo at stations to capacitated vehicles
//! which bring it to a single hub.
//!
//! The crate has two parts:
//!
//! - a road network: a graph built from line geometries with Dijkstra shortest paths and a
//!   station-to-station distance cache which degrades to straight-line distance
//! - an assignment heuristic: repeated seed selection and two-ended greedy route growth over
//!   company vehicles and an unlimited rental archetype, picking the cheapest plan per iteration
//!
//! # Examples
//!
//! ```
//! use kargo_core::prelude::*;
//! use std::sync::Arc;
//!
//! let stations = Arc::new(StationRegistry::new(
//!     Hub::default(),
//!     vec![Station { id: 1, name: Some("Izmit".to_string()), location: Coordinate::new(40.7654, 29.9408) }],
//! ));
//! let transport = Arc::new(RoadTransportCost::new(
//!     Arc::new(RoadNetwork::new(Arc::new(RoadGraph::fallback()))),
//!     stations.clone(),
//!     Arc::new(InMemoryRoutingCache::default()),
//!     NetworkConfig::default(),
//! ));
//!
//! let problem = Problem {
//!     stations,
//!     cargo: vec![Cargo { station_id: 1, weight: 120 }],
//!     fleet: vec![Vehicle { id: "truck".to_string(), capacity: 500, is_company: true }],
//!     params: RunParams::default(),
//!     transport,
//! };
//!
//! let assignment = AssignmentSolver::new(AssignmentConfig::default(), Environment::silent()).solve(&problem);
//!
//! assert_eq!(assignment.status, AssignmentStatus::FullyServed);
//! assert_eq!(assignment.routes.len(), 1);
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod construction;
pub mod models;
pub mod network;
pub mod prelude;
pub mod solver;
pub mod utils;
