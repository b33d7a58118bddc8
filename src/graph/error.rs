use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge referenced a node which was never added.
    UnknownNode(String),
    /// A node identifier was added twice.
    DuplicateNode(String),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GraphError::UnknownNode(id) => write!(f, "node {id} is not part of the graph"),
            GraphError::DuplicateNode(id) => write!(f, "node {id} was already added"),
        }
    }
}

impl std::error::Error for GraphError {}
