//! A command line interface library for cargo assignment solver.
//!
//! It exposes the building blocks used by the `kargo` binary: a json configuration file reader,
//! run parameter overrides, a road path query and a solution checker over pragmatic files.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/macros.rs"]
#[macro_use]
mod macros;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub use kargo_core as core;
pub use kargo_pragmatic as pragmatic;

pub mod extensions;

use kargo_pragmatic::format::MultiFormatError;

/// Formats pragmatic format errors into a single message.
pub fn get_errors_serialized(errors: &MultiFormatError) -> String {
    errors.to_json()
}
