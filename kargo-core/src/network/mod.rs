//! Road network: graph construction from geometry, shortest paths and cached station routing.

mod cache;
pub use self::cache::*;

mod geometry;
pub use self::geometry::*;

mod graph;
pub use self::graph::*;

mod road;
pub use self::road::*;
