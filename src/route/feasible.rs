use crate::graph::{Entry, RoadGraph, Segment};
use crate::route::PathState;

/// The segment of `source -> target` if that edge may extend `path`.
///
/// The edge must not already be on the path, must exist in the graph,
/// and must have a strictly positive length.
#[inline]
pub fn feasible_segment<'g, E>(
    graph: &'g RoadGraph<E>,
    path: PathState<'_, E>,
    source: E,
    target: E,
) -> Option<&'g Segment>
where
    E: Entry,
{
    if path.contains_edge(source, target) {
        return None;
    }

    graph
        .segment(source, target)
        .filter(|segment| segment.traversable())
}

#[inline]
pub fn is_feasible<E>(graph: &RoadGraph<E>, path: PathState<'_, E>, source: E, target: E) -> bool
where
    E: Entry,
{
    feasible_segment(graph, path, source, target).is_some()
}
