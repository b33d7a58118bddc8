use crate::config::{SearchConfig, VisitedScope};
use crate::graph::{Entry, RoadGraph};
use crate::route::{feasible_segment, NeighbourRanker, PathArena, Route, StepIx, Termination};

use log::{debug, info};
use measure_time::debug_time;
use rustc_hash::FxHashSet;

/// An entry of the search stack: a partial path and what it has cost.
#[derive(Debug, Copy, Clone)]
struct Frame<E> {
    node: E,
    tip: StepIx,
    distance: f64,
    steps: usize,
}

/// The longest path popped so far.
#[derive(Debug, Copy, Clone)]
struct Best {
    tip: StepIx,
    distance: f64,
    steps: usize,
}

/// Depth-first search for a route of at least a goal distance.
///
/// The search is a satisficer: the first simple path to reach the goal is
/// returned, whether or not a shorter or straighter one exists. Should no
/// path reach the goal, the longest path seen is returned instead.
///
/// ```rust
/// use geo::Point;
/// use trailfinder::{Node, RoadGraphBuilder, RouteSearch, SearchConfig, Segment, Termination};
///
/// let mut builder = RoadGraphBuilder::new();
/// builder
///     .add_node(Node::new(Point::new(0.0, 0.0), "home"))?
///     .add_node(Node::new(Point::new(0.0, 0.01), "park"))?
///     .add_edge("home", "park", Segment::new(1_100.0))?;
/// let graph = builder.build();
///
/// let route = RouteSearch::new(SearchConfig::default()).find_route("home", 500.0, &graph);
/// assert_eq!(route.nodes(), &["home", "park"]);
/// assert_eq!(route.termination(), Termination::Reached);
/// # Ok::<(), trailfinder::graph::GraphError>(())
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct RouteSearch {
    config: SearchConfig,
}

impl RouteSearch {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches `graph` from `start` for a simple path at least
    /// `goal_distance` metres long.
    ///
    /// A `start` absent from the graph yields the single-node route
    /// `[start]` with [`Termination::UnknownStart`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "info", skip(self, graph), fields(config = ?self.config))
    )]
    pub fn find_route<E>(&self, start: E, goal_distance: f64, graph: &RoadGraph<E>) -> Route<E>
    where
        E: Entry,
    {
        debug_time!("Route search from {:?}", start);
        info!("Starting route search from node {start:?} with goal distance {goal_distance}");

        if !graph.contains(&start) {
            info!("Start node {start:?} not found in graph");
            return Route::trivial(start, Termination::UnknownStart);
        }

        let ranker = NeighbourRanker::new(graph, self.config.ranking);

        let mut arena = PathArena::with_capacity(graph.size());
        let root = arena.root(start);

        let mut stack = vec![Frame {
            node: start,
            tip: root,
            distance: 0.0,
            steps: 0,
        }];

        let mut visited = FxHashSet::default();
        visited.insert(start);

        let mut best = Best {
            tip: root,
            distance: 0.0,
            steps: 0,
        };

        while let Some(frame) = stack.pop() {
            if frame.distance > best.distance {
                best = Best {
                    tip: frame.tip,
                    distance: frame.distance,
                    steps: frame.steps,
                };
                debug!(
                    "New best path found: {} meters, {} edges",
                    frame.distance, frame.steps
                );
            }

            if frame.distance >= goal_distance {
                info!(
                    "Found path with distance {} >= {goal_distance} after queueing {} partial paths",
                    frame.distance,
                    arena.len()
                );

                return Route::from_path(
                    arena.state(frame.tip),
                    frame.distance,
                    frame.steps,
                    Termination::Reached,
                );
            }

            let ranked = ranker.rank(frame.node, arena.state(frame.tip));

            // Pushed lowest rank first, so the top candidate is popped next
            for &neighbour in ranked.iter().rev() {
                let excluded = match self.config.visited {
                    VisitedScope::Global => visited.contains(&neighbour),
                    VisitedScope::Path => arena.state(frame.tip).contains_node(neighbour),
                };

                if excluded {
                    continue;
                }

                let Some(segment) =
                    feasible_segment(graph, arena.state(frame.tip), frame.node, neighbour)
                else {
                    continue;
                };

                let tip = arena.extend(frame.tip, neighbour, frame.steps);
                visited.insert(neighbour);

                stack.push(Frame {
                    node: neighbour,
                    tip,
                    distance: frame.distance + segment.length,
                    steps: frame.steps + 1,
                });
            }
        }

        info!(
            "Could not find path >= {goal_distance}. Best distance: {}",
            best.distance
        );

        Route::from_path(
            arena.state(best.tip),
            best.distance,
            best.steps,
            Termination::Exhausted,
        )
    }
}

/// Searches with the default [`SearchConfig`], returning the route and
/// its step count.
pub fn find_route<E>(start: E, goal_distance: f64, graph: &RoadGraph<E>) -> (Route<E>, usize)
where
    E: Entry,
{
    let route = RouteSearch::default().find_route(start, goal_distance, graph);
    let steps = route.steps();
    (route, steps)
}
