use criterion::{criterion_group, criterion_main};
use geo::Point;
use trail_fixtures::{grid, grid_id, Fixture};
use trailfinder::{
    Node, RankingPolicy, RoadGraph, RoadGraphBuilder, RouteSearch, SearchConfig, Segment,
    VisitedScope,
};

struct SearchScenario {
    name: &'static str,
    size: usize,
    goal_distance: f64,
}

const SEARCH_CASES: [SearchScenario; 3] = [
    SearchScenario {
        name: "CAMPUS_LOOP",
        size: 20,
        goal_distance: 5_000.0,
    },
    SearchScenario {
        name: "CITY_RIDE",
        size: 80,
        goal_distance: 40_000.0,
    },
    SearchScenario {
        name: "UNREACHABLE",
        size: 40,
        goal_distance: 1_000_000.0,
    },
];

fn load(fixture: &Fixture<i64>) -> RoadGraph<i64> {
    let mut builder = RoadGraphBuilder::new();

    for node in &fixture.nodes {
        let position = Point::new(node.lng, node.lat);
        builder
            .add_node(Node::new(position, node.id).with_elevation(node.elevation.unwrap_or(0.0)))
            .expect("Fixture nodes must be unique");
    }

    for edge in &fixture.edges {
        let segment = Segment::new(edge.length).with_bearing(edge.bearing.unwrap_or(0.0));
        builder
            .add_edge(edge.source, edge.target, segment)
            .expect("Fixture edges must join known nodes");
    }

    builder.build()
}

fn search_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("find_route");
    group.significance_level(0.1).sample_size(30);

    SEARCH_CASES.into_iter().for_each(|sc| {
        let graph = load(&grid(sc.size, sc.size, 100.0));
        let start = grid_id(sc.size, sc.size / 2, sc.size / 2);

        for ranking in [RankingPolicy::Native, RankingPolicy::Straightest] {
            let search = RouteSearch::new(SearchConfig::new(ranking, VisitedScope::Global));

            group.bench_function(format!("{}: {ranking}", sc.name), |b| {
                b.iter(|| {
                    let route = search.find_route(start, sc.goal_distance, &graph);
                    assert!(route.steps() > 0);
                })
            });
        }
    });

    group.finish();
}

criterion_group!(benches, search_benchmark);
criterion_main!(benches);
