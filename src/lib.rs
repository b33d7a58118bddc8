#![doc = include_str!("../README.md")]

#[cfg(feature = "mimalloc")]
use mimalloc::MiMalloc;
#[cfg_attr(feature = "mimalloc", global_allocator)]
#[cfg(feature = "mimalloc")]
static GLOBAL: MiMalloc = MiMalloc;

pub mod config;
pub mod error;
pub mod graph;
pub mod route;
pub mod shade;
pub mod util;

#[doc(inline)]
pub use config::{RankingPolicy, SearchConfig, VisitedScope};
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use graph::{Entry, Node, RoadGraph, RoadGraphBuilder, Segment};
#[doc(inline)]
pub use route::{find_route, total_elevation_gain, Route, RouteSearch, Termination};
#[doc(inline)]
pub use shade::{shade_given_time, Colour};
