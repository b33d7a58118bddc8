use crate::config::{
    ConfigError, RankingPolicy, SearchConfig, VisitedScope, RANKING_KEY, VISITED_SCOPE_KEY,
};
use crate::Error;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.to_string())
    }
}

#[test]
fn defaults_prefer_straight_routes_with_global_visits() {
    let config = SearchConfig::default();
    assert_eq!(config.ranking, RankingPolicy::Straightest);
    assert_eq!(config.visited, VisitedScope::Global);

    let empty = SearchConfig::from_lookup(lookup(&[])).expect("no keys is valid");
    assert_eq!(empty, config);
}

#[test]
fn reads_both_keys() {
    let config = SearchConfig::from_lookup(lookup(&[
        (RANKING_KEY, "native"),
        (VISITED_SCOPE_KEY, " Path "),
    ]))
    .expect("keys are valid");

    assert_eq!(
        config,
        SearchConfig::new(RankingPolicy::Native, VisitedScope::Path)
    );
}

#[test]
fn rejects_unknown_policy() {
    let err = SearchConfig::from_lookup(lookup(&[(RANKING_KEY, "wiggly")]))
        .expect_err("unknown policy");

    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: RANKING_KEY.to_string(),
            value: "wiggly".to_string(),
        }
    );

    let wrapped = Error::from(err);
    assert_eq!(
        wrapped.to_string(),
        "config error: unrecognised value \"wiggly\" for TRAIL_RANKING"
    );
}

#[test]
fn policies_display_as_snake_case() {
    assert_eq!(RankingPolicy::Straightest.to_string(), "straightest");
    assert_eq!(VisitedScope::Path.as_ref(), "path");
}
