//! Pragmatic crate allows to specify cargo assignment problems via simple **pragmatic** json
//! format, read road networks from GeoJSON files and write solutions as json or GeoJSON.
//!
//! # Examples
//!
//! ```
//! use kargo_pragmatic::core::prelude::*;
//! use kargo_pragmatic::format::RoutingContext;
//! use kargo_pragmatic::format::problem::PragmaticProblem;
//! use kargo_pragmatic::format::solution::create_solution;
//!
//! let problem = r#"{
//!     "stations": [ { "id": 1, "name": "Izmit", "latitude": 40.7654, "longitude": 29.9408 } ],
//!     "cargo": [ { "stationId": 1, "weight": 120 } ],
//!     "vehicles": [ { "id": "truck", "capacity": 500 } ]
//! }"#;
//!
//! let routing = RoutingContext::fallback();
//! let problem = (problem.to_string(), &routing).read_pragmatic().expect("valid problem");
//! let assignment = AssignmentSolver::new(AssignmentConfig::default(), Environment::silent()).solve(&problem);
//!
//! let solution = create_solution(&problem, &assignment);
//! assert_eq!(solution.routes.len(), 1);
//! assert_eq!(solution.routes[0].vehicle_id.as_deref(), Some("truck"));
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/generator/mod.rs"]
pub mod generator;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
pub mod features;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
pub mod discovery;

pub use kargo_core as core;

pub mod checker;
pub mod format;

mod utils;
mod validation;
