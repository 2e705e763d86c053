//! Building blocks of route construction: demand snapshot and topology, seed selection and
//! two-ended greedy insertion.

mod insertion;
pub use self::insertion::*;

mod seed;
pub use self::seed::*;

mod topology;
pub use self::topology::*;
