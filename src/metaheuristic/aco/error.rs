use crate::graph::{Edge, GraphError};

use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum AcoError<IndexType> {
    /// The parameters or the problem size can't be used for a run.
    InvalidConfiguration(String),
    /// The graph is not complete.
    MissingEdgeWeight(Edge<IndexType>),
    /// An edge weight is not a finite, strictly positive number.
    InvalidEdgeWeight(Edge<IndexType>, f64),
    /// An ant found no unvisited node with a positive selection weight.
    NoFeasibleSuccessor {
        ant: usize,
        node: IndexType,
        step: usize,
    },
    /// A pheromone, choice or length value left the range of finite numbers.
    NonFiniteValue(Edge<IndexType>),
    Graph(GraphError<IndexType>),
    Supervisor(String),
}

impl<IndexType> AcoError<IndexType> {
    /// Translates the node ids carried by this error.
    pub fn map_nodes<T, F>(self, f: F) -> AcoError<T>
    where
        F: Fn(IndexType) -> T,
    {
        match self {
            Self::InvalidConfiguration(msg) => AcoError::InvalidConfiguration(msg),
            Self::MissingEdgeWeight((from, to)) => AcoError::MissingEdgeWeight((f(from), f(to))),
            Self::InvalidEdgeWeight((from, to), weight) => {
                AcoError::InvalidEdgeWeight((f(from), f(to)), weight)
            }
            Self::NoFeasibleSuccessor { ant, node, step } => AcoError::NoFeasibleSuccessor {
                ant,
                node: f(node),
                step,
            },
            Self::NonFiniteValue((from, to)) => AcoError::NonFiniteValue((f(from), f(to))),
            Self::Graph(error) => AcoError::Graph(error.map_nodes(f)),
            Self::Supervisor(msg) => AcoError::Supervisor(msg),
        }
    }
}

impl<IndexType> From<GraphError<IndexType>> for AcoError<IndexType> {
    fn from(error: GraphError<IndexType>) -> Self {
        AcoError::Graph(error)
    }
}

impl<IndexType: Display> fmt::Display for AcoError<IndexType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Self::MissingEdgeWeight((from, to)) => {
                write!(f, "Graph has no weight for edge ({}, {}).", from, to)
            }
            Self::InvalidEdgeWeight((from, to), weight) => write!(
                f,
                "Edge ({}, {}) has weight {}, but weights must be finite and positive.",
                from, to, weight
            ),
            Self::NoFeasibleSuccessor { ant, node, step } => write!(
                f,
                "Ant {} has no feasible successor of node {} at step {}.",
                ant, node, step
            ),
            Self::NonFiniteValue((from, to)) => {
                write!(f, "Value for edge ({}, {}) is not finite.", from, to)
            }
            Self::Graph(error) => write!(f, "{}", error),
            Self::Supervisor(msg) => write!(f, "Supervisor failed: {}", msg),
        }
    }
}

impl<IndexType: Debug + Display> Error for AcoError<IndexType> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_nodes_works() {
        let names = ["a", "b", "c"];
        let error = AcoError::NoFeasibleSuccessor {
            ant: 2,
            node: 1,
            step: 3,
        };

        assert_eq!(
            error.map_nodes(|i| names[i]),
            AcoError::NoFeasibleSuccessor {
                ant: 2,
                node: "b",
                step: 3
            }
        );
        assert_eq!(
            AcoError::Graph(GraphError::MissingNode(2)).map_nodes(|i| names[i]),
            AcoError::Graph(GraphError::MissingNode("c"))
        );
    }

    #[test]
    fn display_works() {
        let error: AcoError<char> = AcoError::MissingEdgeWeight(('a', 'd'));

        assert_eq!(error.to_string(), "Graph has no weight for edge (a, d).");
    }
}
