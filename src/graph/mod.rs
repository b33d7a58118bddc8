pub mod builder;
pub mod entry;
pub mod error;
pub mod item;
pub mod node;
pub mod segment;


#[doc(inline)]
pub use builder::RoadGraphBuilder;
#[doc(inline)]
pub use entry::Entry;
#[doc(inline)]
pub use error::GraphError;
#[doc(inline)]
pub use item::RoadGraph;
#[doc(inline)]
pub use node::Node;
#[doc(inline)]
pub use segment::Segment;

#[cfg(test)]
pub(crate) mod util {
    use crate::graph::{Entry, GraphError, Node, RoadGraph, RoadGraphBuilder, Segment};

    use geo::Point;
    use trail_fixtures::Fixture;

    use std::time::Instant;

    pub(crate) fn init_graph<I>(fixture: &Fixture<I>) -> Result<RoadGraph<I>, GraphError>
    where
        I: Entry,
    {
        let time = Instant::now();
        let mut builder = RoadGraphBuilder::new();

        for node in &fixture.nodes {
            let position = Point::new(node.lng, node.lat);
            builder.add_node(
                Node::new(position, node.id).with_elevation(node.elevation.unwrap_or_default()),
            )?;
        }

        for edge in &fixture.edges {
            let segment = Segment::new(edge.length).with_bearing(edge.bearing.unwrap_or_default());
            builder.add_edge(edge.source, edge.target, segment)?;
        }

        let graph = builder.build();
        println!("Graph Init Took: {:?}", time.elapsed());
        Ok(graph)
    }
}
