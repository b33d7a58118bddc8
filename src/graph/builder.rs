use crate::graph::item::GraphStructure;
use crate::graph::{Entry, GraphError, Node, RoadGraph, Segment};

use log::debug;
use rstar::RTree;
use rustc_hash::FxHashMap;

/// Accumulates nodes and edges, then freezes them into a [`RoadGraph`].
///
/// ```rust
/// use geo::Point;
/// use trailfinder::{Node, RoadGraphBuilder, Segment};
///
/// let mut builder = RoadGraphBuilder::new();
/// builder
///     .add_node(Node::new(Point::new(-123.25, 49.26), 1))?
///     .add_node(Node::new(Point::new(-123.25, 49.27), 2).with_elevation(12.0))?
///     .add_edge(1, 2, Segment::new(1_112.0))?;
///
/// let graph = builder.build();
/// assert_eq!(graph.size(), 2);
/// # Ok::<(), trailfinder::graph::GraphError>(())
/// ```
pub struct RoadGraphBuilder<E>
where
    E: Entry,
{
    graph: GraphStructure<E>,
    hash: FxHashMap<E, Node<E>>,
}

impl<E> Default for RoadGraphBuilder<E>
where
    E: Entry,
{
    fn default() -> Self {
        Self {
            graph: GraphStructure::default(),
            hash: FxHashMap::default(),
        }
    }
}

impl<E> RoadGraphBuilder<E>
where
    E: Entry,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node<E>) -> Result<&mut Self, GraphError> {
        if self.hash.contains_key(&node.id) {
            return Err(GraphError::DuplicateNode(format!("{:?}", node.id)));
        }

        self.graph.add_node(node.id);
        self.hash.insert(node.id, node);
        Ok(self)
    }

    /// Adds the directed edge `source -> target`.
    ///
    /// Only one edge is kept per ordered pair; should the pair already be
    /// joined, the first segment stays and this one is dropped.
    pub fn add_edge(
        &mut self,
        source: E,
        target: E,
        segment: Segment,
    ) -> Result<&mut Self, GraphError> {
        self.require(&source)?;
        self.require(&target)?;

        if self.graph.contains_edge(source, target) {
            debug!("Ignoring parallel edge {source:?} -> {target:?}: {segment:?}");
            return Ok(self);
        }

        self.graph.add_edge(source, target, segment);
        Ok(self)
    }

    /// Adds `source -> target` with its length and bearing derived from
    /// the positions of both nodes.
    pub fn connect(&mut self, source: E, target: E) -> Result<&mut Self, GraphError> {
        let from = self.require(&source)?.position;
        let to = self.require(&target)?.position;

        self.add_edge(source, target, Segment::between(from, to))
    }

    /// Connects `a` and `b` in both directions, as for a two-way street.
    pub fn connect_both(&mut self, a: E, b: E) -> Result<&mut Self, GraphError> {
        self.connect(a, b)?.connect(b, a)
    }

    pub fn build(self) -> RoadGraph<E> {
        let index = RTree::bulk_load(self.hash.values().copied().collect());

        debug!(
            "Built road graph of {} nodes and {} edges",
            self.hash.len(),
            self.graph.edge_count()
        );

        RoadGraph {
            graph: self.graph,
            hash: self.hash,
            index,
        }
    }

    fn require(&self, node: &E) -> Result<&Node<E>, GraphError> {
        self.hash
            .get(node)
            .ok_or_else(|| GraphError::UnknownNode(format!("{node:?}")))
    }
}
