use std::fmt::{Display, Formatter};

use crate::config::ConfigError;
use crate::graph::GraphError;
use crate::impl_err;

pub type Result<T> = std::result::Result<T, Error>;

/// Crate-level error, wrapping the error of each fallible submodule.
///
/// The search itself never fails; only building a graph and loading
/// configuration can.
#[derive(Debug)]
pub enum Error {
    Graph(GraphError),
    Config(ConfigError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Graph(err) => write!(f, "graph error: {err}"),
            Error::Config(err) => write!(f, "config error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Graph(err) => Some(err),
            Error::Config(err) => Some(err),
        }
    }
}

impl_err!(GraphError, Graph);
impl_err!(ConfigError, Config);
