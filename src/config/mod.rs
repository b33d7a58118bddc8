//! Search configuration.
//!
//! Configuration is bound to a [`RouteSearch`](crate::route::RouteSearch)
//! when it is constructed, and is never consulted globally. It can be
//! loaded from the environment (and a `.env` file) with
//! [`SearchConfig::from_env`]:
//!
//! ```bash
//! TRAIL_RANKING=straightest     # or `native`
//! TRAIL_VISITED_SCOPE=global    # or `path`
//! ```

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use std::fmt::Formatter;
use std::str::FromStr;

#[cfg(test)]
mod test;

pub const RANKING_KEY: &str = "TRAIL_RANKING";
pub const VISITED_SCOPE_KEY: &str = "TRAIL_VISITED_SCOPE";

/// The order in which the neighbours of a node are explored.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RankingPolicy {
    /// The order in which the graph enumerates outgoing edges.
    Native,
    /// Smallest change of bearing first, keeping walkers on the same street.
    #[default]
    Straightest,
}

/// Which nodes a branch of the search may no longer step onto.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VisitedScope {
    /// Once any branch has queued a node, no other branch may enter it.
    /// Quicker, but can miss longer routes which pass through a node an
    /// abandoned branch claimed first.
    #[default]
    Global,
    /// A node is only excluded while it lies on the branch's own path.
    Path,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub ranking: RankingPolicy,
    pub visited: VisitedScope,
}

impl SearchConfig {
    pub fn new(ranking: RankingPolicy, visited: VisitedScope) -> Self {
        Self { ranking, visited }
    }

    pub fn with_ranking(self, ranking: RankingPolicy) -> Self {
        Self { ranking, ..self }
    }

    pub fn with_visited(self, visited: VisitedScope) -> Self {
        Self { visited, ..self }
    }

    /// Reads the configuration from the process environment, after
    /// loading a `.env` file if one can be found.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(err) = dotenv::dotenv() {
            debug!("No .env file loaded: {err}");
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    /// Absent keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            ranking: parse(&lookup, RANKING_KEY)?.unwrap_or(defaults.ranking),
            visited: parse(&lookup, VISITED_SCOPE_KEY)?.unwrap_or(defaults.visited),
        })
    }
}

fn parse<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: String, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "unrecognised value {value:?} for {key}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
