use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a node within a [`RoadGraph`](crate::graph::RoadGraph).
///
/// Any small, copyable, totally ordered key qualifies: OSM ids as `i64`,
/// or `&'static str` labels for hand-built networks.
pub trait Entry: Copy + Clone + PartialEq + Eq + Ord + Hash + Debug + Send + Sync {}

impl<T> Entry for T where T: Copy + Clone + PartialEq + Eq + Ord + Hash + Debug + Send + Sync {}
