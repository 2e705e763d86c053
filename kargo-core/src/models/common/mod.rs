//! Common models.

mod geo;
pub use self::geo::*;

mod primitives;
pub use self::primitives::*;
