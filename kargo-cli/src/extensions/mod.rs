//! Contains command line extensions: configuration, path query and solution checking.

pub mod check;
pub mod path;
pub mod solve;
