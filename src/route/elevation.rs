use crate::graph::{Entry, RoadGraph};

use itertools::Itertools;

/// The total climb along `route`, in metres.
///
/// Only uphill legs count: a descent contributes nothing. Legs touching
/// a node that is not part of `graph` are skipped, and a route of fewer
/// than two nodes has no gain.
pub fn total_elevation_gain<E>(graph: &RoadGraph<E>, route: &[E]) -> f64
where
    E: Entry,
{
    route
        .iter()
        .tuple_windows()
        .filter_map(|(current, next)| Some(graph.elevation(next)? - graph.elevation(current)?))
        .filter(|delta| *delta > 0.0)
        .fold(0.0, |gain, delta| gain + delta)
}
