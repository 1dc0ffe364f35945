use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display};

#[derive(Debug, Clone, PartialEq)]
pub enum GraphError<IndexType> {
    MissingEdge((IndexType, IndexType)),
    DuplicateEdge((IndexType, IndexType)),
    MissingNode(IndexType),
    DuplicateNode(IndexType),
}

impl<IndexType> GraphError<IndexType> {
    /// Translates the node ids carried by this error.
    pub fn map_nodes<T, F>(self, f: F) -> GraphError<T>
    where
        F: Fn(IndexType) -> T,
    {
        match self {
            GraphError::MissingEdge((from, to)) => GraphError::MissingEdge((f(from), f(to))),
            GraphError::DuplicateEdge((from, to)) => GraphError::DuplicateEdge((f(from), f(to))),
            GraphError::MissingNode(node) => GraphError::MissingNode(f(node)),
            GraphError::DuplicateNode(node) => GraphError::DuplicateNode(f(node)),
        }
    }
}

impl<IndexType: Display> fmt::Display for GraphError<IndexType> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingEdge((from, to)) => write!(f, "Edge ({}, {}) is not in the graph.", from, to),
            Self::DuplicateEdge((from, to)) => {
                write!(f, "Edge ({}, {}) is already in the graph.", from, to)
            }
            Self::MissingNode(node) => write!(f, "Node {} is not in the graph.", node),
            Self::DuplicateNode(node) => write!(f, "Node {} is already in the graph.", node),
        }
    }
}

impl<IndexType: Debug + Display> Error for GraphError<IndexType> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_nodes_works() {
        let names = ['a', 'b', 'c'];
        let error = GraphError::MissingEdge((2, 0)).map_nodes(|i| names[i]);

        assert_eq!(error, GraphError::MissingEdge(('c', 'a')));
    }

    #[test]
    fn display_names_nodes() {
        let error: GraphError<usize> = GraphError::DuplicateNode(4);

        assert_eq!(error.to_string(), "Node 4 is already in the graph.");
    }
}
