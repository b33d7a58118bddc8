pub mod bearing;
pub mod elevation;
pub mod feasible;
pub mod outcome;
pub mod path;
pub mod rank;
pub mod search;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use bearing::bearing_diff;
#[doc(inline)]
pub use elevation::total_elevation_gain;
#[doc(inline)]
pub use feasible::{feasible_segment, is_feasible};
#[doc(inline)]
pub use outcome::{Route, RouteEdge, Termination};
#[doc(inline)]
pub use path::{PathArena, PathState, StepIx};
#[doc(inline)]
pub use rank::{NeighbourRanker, Ranked};
#[doc(inline)]
pub use search::{find_route, RouteSearch};
