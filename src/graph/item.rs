use crate::graph::{Entry, Node, Segment};

use geo::{LineString, Point};
use petgraph::prelude::DiGraphMap;
use petgraph::Direction;
use rstar::RTree;
use rustc_hash::{FxHashMap, FxHasher};

use std::fmt::{Debug, Formatter};
use std::hash::BuildHasherDefault;

pub type GraphStructure<E> = DiGraphMap<E, Segment, BuildHasherDefault<FxHasher>>;

/// Road network graph.
///
/// Constructed through a [`RoadGraphBuilder`](crate::graph::RoadGraphBuilder)
/// and read-only thereafter. Outgoing adjacency is enumerated in the order
/// edges were added, which is the "native" order a search falls back on.
pub struct RoadGraph<E>
where
    E: Entry,
{
    pub(crate) graph: GraphStructure<E>,
    pub(crate) hash: FxHashMap<E, Node<E>>,

    pub(crate) index: RTree<Node<E>>,
}

impl<E> Debug for RoadGraph<E>
where
    E: Entry,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoadGraph with Nodes: {}, Edges: {}",
            self.hash.len(),
            self.graph.edge_count()
        )
    }
}

impl<E> RoadGraph<E>
where
    E: Entry,
{
    pub fn index(&self) -> &RTree<Node<E>> {
        &self.index
    }

    pub fn size(&self) -> usize {
        self.hash.len()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    #[inline]
    pub fn contains(&self, node: &E) -> bool {
        self.graph.contains_node(*node)
    }

    #[inline]
    pub fn node(&self, node: &E) -> Option<&Node<E>> {
        self.hash.get(node)
    }

    #[inline]
    pub fn elevation(&self, node: &E) -> Option<f64> {
        self.hash.get(node).map(|node| node.elevation)
    }

    /// The segment of the directed edge `source -> target`, if present.
    #[inline]
    pub fn segment(&self, source: E, target: E) -> Option<&Segment> {
        self.graph.edge_weight(source, target)
    }

    /// Outgoing neighbours of `node`, in native adjacency order.
    #[inline]
    pub fn neighbours(&self, node: E) -> impl Iterator<Item = E> + '_ {
        self.graph.neighbors_directed(node, Direction::Outgoing)
    }

    #[inline]
    pub fn get_position(&self, node_index: &E) -> Option<Point<f64>> {
        self.hash.get(node_index).map(|node| node.position)
    }

    /// The positions of `nodes` as a line, skipping any unknown node.
    #[inline]
    pub fn get_line(&self, nodes: &[E]) -> LineString<f64> {
        nodes
            .iter()
            .filter_map(|node| self.get_position(node))
            .collect::<LineString<f64>>()
    }

    /// Finds the nearest node to a lng/lat position, which is how a
    /// picked coordinate is snapped onto the network.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self)))]
    pub fn nearest_node(&self, point: Point) -> Option<&Node<E>> {
        self.index.nearest_neighbor(&point)
    }
}
