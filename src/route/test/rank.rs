use crate::config::RankingPolicy;
use crate::graph::util::init_graph;
use crate::graph::{GraphError, Node, RoadGraphBuilder, Segment};
use crate::route::{NeighbourRanker, PathArena};

use geo::Point;
use trail_fixtures::{fork, grid, grid_id};

#[test]
fn start_is_ranked_natively() -> Result<(), GraphError> {
    let graph = init_graph(&grid(3, 3, 100.0))?;
    let start = grid_id(3, 1, 1);

    let mut arena = PathArena::with_capacity(1);
    let root = arena.root(start);

    let ranker = NeighbourRanker::new(&graph, RankingPolicy::Straightest);
    let native = graph.neighbours(start).collect::<Vec<_>>();
    assert_eq!(ranker.rank(start, arena.state(root)).to_vec(), native);
    Ok(())
}

#[test]
fn straightest_prefers_continuing() -> Result<(), GraphError> {
    let graph = init_graph(&fork())?;

    let mut arena = PathArena::with_capacity(2);
    let root = arena.root("A");
    let tip = arena.extend(root, "B", 0);

    let straight = NeighbourRanker::new(&graph, RankingPolicy::Straightest);
    assert_eq!(straight.rank("B", arena.state(tip)).to_vec(), vec!["D", "C"]);

    let native = NeighbourRanker::new(&graph, RankingPolicy::Native);
    assert_eq!(native.rank("B", arena.state(tip)).to_vec(), vec!["C", "D"]);
    Ok(())
}

#[test]
fn equal_turns_keep_native_order() -> Result<(), GraphError> {
    let mut builder = RoadGraphBuilder::new();
    for (id, lng, lat) in [
        ("south", 0.0, -0.001),
        ("here", 0.0, 0.0),
        ("east", 0.001, 0.0),
        ("west", -0.001, 0.0),
        ("north", 0.0, 0.001),
    ] {
        builder.add_node(Node::new(Point::new(lng, lat), id))?;
    }

    builder
        .add_edge("south", "here", Segment::new(100.0))?
        .add_edge("here", "south", Segment::new(100.0).with_bearing(180.0))?
        .add_edge("here", "east", Segment::new(100.0).with_bearing(90.0))?
        .add_edge("here", "west", Segment::new(100.0).with_bearing(270.0))?
        .add_edge("here", "north", Segment::new(100.0))?;

    let graph = builder.build();

    let mut arena = PathArena::with_capacity(2);
    let root = arena.root("south");
    let tip = arena.extend(root, "here", 0);

    let ranker = NeighbourRanker::new(&graph, RankingPolicy::Straightest);
    assert_eq!(
        ranker.rank("here", arena.state(tip)).to_vec(),
        vec!["north", "east", "west", "south"]
    );
    Ok(())
}

#[test]
fn unknown_arrival_falls_back_to_native() -> Result<(), GraphError> {
    let graph = init_graph(&fork())?;

    // No edge C -> B exists, so there is no heading to continue
    let mut arena = PathArena::with_capacity(2);
    let root = arena.root("C");
    let tip = arena.extend(root, "B", 0);

    let ranker = NeighbourRanker::new(&graph, RankingPolicy::Straightest);
    assert_eq!(ranker.rank("B", arena.state(tip)).to_vec(), vec!["C", "D"]);
    Ok(())
}
