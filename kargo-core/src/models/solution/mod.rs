//! Solution domain models.

mod assignment;
pub use self::assignment::*;

mod plan;
pub use self::plan::*;
