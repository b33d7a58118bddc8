use crate::graph::Entry;
use crate::route::RouteEdge;

/// Position of a step within a [`PathArena`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StepIx(usize);

#[derive(Debug, Copy, Clone)]
struct Step<E> {
    node: E,
    parent: Option<StepIx>,
    /// Time-step at which the edge entering `node` was appended.
    /// Meaningless for a root.
    time: usize,
}

/// Append-only storage of partial paths.
///
/// Every step points back at the prefix it extends, so branching onto a
/// neighbour costs a single push while each branch still reads as an
/// independent path through [`PathArena::state`].
#[derive(Debug)]
pub struct PathArena<E>
where
    E: Entry,
{
    steps: Vec<Step<E>>,
}

impl<E> PathArena<E>
where
    E: Entry,
{
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            steps: Vec::with_capacity(capacity),
        }
    }

    /// Starts a new path containing only `node`.
    pub fn root(&mut self, node: E) -> StepIx {
        self.push(Step {
            node,
            parent: None,
            time: 0,
        })
    }

    /// Extends the path ending at `tip` by the edge onto `node`, appended
    /// at time-step `time`. The path at `tip` is left untouched.
    pub fn extend(&mut self, tip: StepIx, node: E, time: usize) -> StepIx {
        self.push(Step {
            node,
            parent: Some(tip),
            time,
        })
    }

    pub fn state(&self, tip: StepIx) -> PathState<'_, E> {
        PathState { arena: self, tip }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    fn push(&mut self, step: Step<E>) -> StepIx {
        self.steps.push(step);
        StepIx(self.steps.len() - 1)
    }

    #[inline]
    fn step(&self, ix: StepIx) -> &Step<E> {
        &self.steps[ix.0]
    }
}

/// A read-only view of one path held in a [`PathArena`].
#[derive(Debug, Copy, Clone)]
pub struct PathState<'a, E>
where
    E: Entry,
{
    arena: &'a PathArena<E>,
    tip: StepIx,
}

impl<'a, E> PathState<'a, E>
where
    E: Entry,
{
    pub fn tip(&self) -> StepIx {
        self.tip
    }

    /// The node the path currently ends at.
    pub fn last(&self) -> E {
        self.arena.step(self.tip).node
    }

    pub fn has_edges(&self) -> bool {
        self.arena.step(self.tip).parent.is_some()
    }

    pub fn edge_count(&self) -> usize {
        self.ancestry().filter(|step| step.parent.is_some()).count()
    }

    /// The node whose edge enters `node` along this path.
    pub fn predecessor(&self, node: E) -> Option<E> {
        self.ancestry()
            .find(|step| step.node == node)
            .and_then(|step| step.parent)
            .map(|parent| self.arena.step(parent).node)
    }

    pub fn contains_node(&self, node: E) -> bool {
        self.ancestry().any(|step| step.node == node)
    }

    pub fn contains_edge(&self, source: E, target: E) -> bool {
        self.edges_reversed()
            .any(|edge| edge.source == source && edge.target == target)
    }

    /// Nodes from the root to the tip.
    pub fn nodes(&self) -> Vec<E> {
        let mut nodes = self.ancestry().map(|step| step.node).collect::<Vec<_>>();
        nodes.reverse();
        nodes
    }

    /// Edges from the root to the tip, tagged with their time-step.
    pub fn edges(&self) -> Vec<RouteEdge<E>> {
        let mut edges = self.edges_reversed().collect::<Vec<_>>();
        edges.reverse();
        edges
    }

    fn edges_reversed(&self) -> impl Iterator<Item = RouteEdge<E>> + 'a {
        let arena = self.arena;
        self.ancestry().filter_map(move |step| {
            step.parent.map(|parent| RouteEdge {
                source: arena.step(parent).node,
                target: step.node,
                time: step.time,
            })
        })
    }

    fn ancestry(&self) -> Ancestry<'a, E> {
        Ancestry {
            arena: self.arena,
            next: Some(self.tip),
        }
    }
}

/// Walks a path from its tip back to the root.
struct Ancestry<'a, E>
where
    E: Entry,
{
    arena: &'a PathArena<E>,
    next: Option<StepIx>,
}

impl<'a, E> Iterator for Ancestry<'a, E>
where
    E: Entry,
{
    type Item = &'a Step<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.arena.step(self.next?);
        self.next = step.parent;
        Some(step)
    }
}
