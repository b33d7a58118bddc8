use crate::config::RankingPolicy;
use crate::graph::{Entry, RoadGraph};
use crate::route::{bearing_diff, PathState};

use smallvec::SmallVec;

/// Candidate next nodes, highest priority first.
pub type Ranked<E> = SmallVec<[E; 8]>;

/// Orders the neighbours of the node a path ends at.
pub struct NeighbourRanker<'g, E>
where
    E: Entry,
{
    graph: &'g RoadGraph<E>,
    policy: RankingPolicy,
}

impl<'g, E> NeighbourRanker<'g, E>
where
    E: Entry,
{
    pub fn new(graph: &'g RoadGraph<E>, policy: RankingPolicy) -> Self {
        Self { graph, policy }
    }

    /// Ranks the outgoing neighbours of `current`.
    ///
    /// Under [`RankingPolicy::Straightest`] neighbours are sorted by how far
    /// their edge turns away from the edge the path arrived on, ties keeping
    /// native order. Paths without an incoming edge are ranked natively.
    pub fn rank(&self, current: E, path: PathState<'_, E>) -> Ranked<E> {
        match self.policy {
            RankingPolicy::Straightest if path.has_edges() => self
                .straightest(current, path)
                .unwrap_or_else(|| self.native(current)),
            _ => self.native(current),
        }
    }

    fn native(&self, current: E) -> Ranked<E> {
        self.graph.neighbours(current).collect()
    }

    fn straightest(&self, current: E, path: PathState<'_, E>) -> Option<Ranked<E>> {
        let previous = path.predecessor(current)?;
        let heading = self.graph.segment(previous, current)?.bearing;

        let mut turns = self
            .graph
            .neighbours(current)
            .filter_map(|neighbour| {
                let segment = self.graph.segment(current, neighbour)?;
                Some((neighbour, bearing_diff(heading, segment.bearing)))
            })
            .collect::<SmallVec<[(E, f64); 8]>>();

        // Stable, so equal turns keep their native order
        turns.sort_by(|(_, a), (_, b)| a.total_cmp(b));

        Some(turns.into_iter().map(|(neighbour, _)| neighbour).collect())
    }
}
