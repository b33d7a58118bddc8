use crate::graph::{Entry, RoadGraph};
use crate::route::{total_elevation_gain, PathState};
use crate::shade::Colour;

use geo::LineString;
use serde::Serialize;
use strum::Display;

/// Why a search stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Termination {
    /// A path reached the goal distance.
    Reached,
    /// Every candidate was explored without reaching the goal; the route
    /// is the longest path seen.
    Exhausted,
    /// The start node is not part of the graph.
    UnknownStart,
}

/// A directed edge of a route, tagged with the time-step it was walked at.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RouteEdge<E> {
    pub source: E,
    pub target: E,
    pub time: usize,
}

/// The result of a route search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<E> {
    nodes: Vec<E>,
    edges: Vec<RouteEdge<E>>,
    distance: f64,
    steps: usize,
    termination: Termination,
}

impl<E> Route<E>
where
    E: Entry,
{
    pub(crate) fn trivial(start: E, termination: Termination) -> Self {
        Self {
            nodes: vec![start],
            edges: Vec::new(),
            distance: 0.0,
            steps: 0,
            termination,
        }
    }

    pub(crate) fn from_path(
        path: PathState<'_, E>,
        distance: f64,
        steps: usize,
        termination: Termination,
    ) -> Self {
        Self {
            nodes: path.nodes(),
            edges: path.edges(),
            distance,
            steps,
            termination,
        }
    }

    /// Nodes in walking order, starting at the start node.
    pub fn nodes(&self) -> &[E] {
        &self.nodes
    }

    pub fn edges(&self) -> &[RouteEdge<E>] {
        &self.edges
    }

    /// Summed length of every edge, in metres.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// The number of edges walked.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Whether the goal distance was met.
    pub fn reached(&self) -> bool {
        self.termination == Termination::Reached
    }

    /// Each edge with its colour on the hue gradient, by traversal order.
    pub fn shades(&self) -> Vec<(RouteEdge<E>, Colour)> {
        self.edges
            .iter()
            .map(|edge| (*edge, Colour::given_time(edge.time, self.steps)))
            .collect()
    }

    pub fn line(&self, graph: &RoadGraph<E>) -> LineString<f64> {
        graph.get_line(&self.nodes)
    }

    pub fn elevation_gain(&self, graph: &RoadGraph<E>) -> f64 {
        total_elevation_gain(graph, &self.nodes)
    }
}
