use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use crate::graph::{Edge, GenericWeightedGraph, GraphError};

/// Implements a weighted, directed graph using an adjacency matrix as datastructure.
///
/// Every node gets a dense index on registration. Node ids are mapped to these indices through
/// a hash map, so lookups don't depend on the order of the graph. Iteration over node ids
/// always follows registration order.
#[derive(Debug, Clone)]
pub struct MatrixGraph<IndexType, Nw, Ew> {
    adjacency_matrix: Vec<Vec<Option<Ew>>>,
    node_weights: Vec<Nw>,
    node_ids: Vec<IndexType>,
    node_map: HashMap<IndexType, usize>,
    size: usize,
}

impl<Nw, Ew> MatrixGraph<usize, Nw, Ew> {
    /// Creates a new Graph instance using the given list of node_weights and weighted edges.
    /// The indices of nodes are inferred from their position in the given array,
    /// meaning the node at nodes[i] will get the index i in the graph instance.
    /// If any of the edges don't fit this scheme an error is returned.
    pub fn new_usize_indexed(
        nodes: Vec<Nw>,
        edges: Vec<(usize, usize, Ew)>,
    ) -> Result<Self, GraphError<usize>> {
        let node_amount = nodes.len();

        let mut graph = MatrixGraph {
            adjacency_matrix: (0..node_amount)
                .map(|_| (0..node_amount).map(|_| None).collect())
                .collect(),
            node_weights: nodes,
            node_ids: (0..node_amount).collect(),
            node_map: (0..node_amount).map(|i| (i, i)).collect(),
            size: 0,
        };

        for (from, to, weight) in edges.into_iter() {
            graph.add_edge_at((from, to), weight)?;
        }

        Ok(graph)
    }
}

impl<IndexType, Nw, Ew> MatrixGraph<IndexType, Nw, Ew>
where
    IndexType: Hash + Copy + Eq + Display + Debug,
{
    /// Creates a directed graph from a list of weighted nodes and weighted edges.
    /// Nodes are indexed in the order they are given.
    pub fn new(
        nodes: Vec<(IndexType, Nw)>,
        edges: Vec<(Edge<IndexType>, Ew)>,
    ) -> Result<Self, GraphError<IndexType>> {
        let mut graph = MatrixGraph::with_size(nodes.len());
        for (id, weight) in nodes.into_iter() {
            graph.add_node(id, weight)?;
        }

        for (edge, weight) in edges.into_iter() {
            graph.add_edge(edge, weight)?;
        }

        Ok(graph)
    }

    /// Creates a graph in which every given edge is inserted in both directions.
    pub fn new_undirected(
        nodes: Vec<(IndexType, Nw)>,
        edges: Vec<(Edge<IndexType>, Ew)>,
    ) -> Result<Self, GraphError<IndexType>>
    where
        Ew: Copy,
    {
        let mirrored = edges
            .into_iter()
            .flat_map(|((from, to), weight)| vec![((from, to), weight), ((to, from), weight)])
            .collect();

        MatrixGraph::new(nodes, mirrored)
    }

    /// Constructs an empty MatrixGraph with capacity for at least the given amount of nodes.
    pub fn with_size(size: usize) -> Self {
        MatrixGraph {
            adjacency_matrix: Vec::with_capacity(size),
            node_weights: Vec::with_capacity(size),
            node_ids: Vec::with_capacity(size),
            node_map: HashMap::with_capacity(size),
            size: 0,
        }
    }

    /// Returns the dense index of a node.
    pub fn index_of(&self, id: IndexType) -> Option<usize> {
        self.node_map.get(&id).copied()
    }

    fn mapped_edge(&self, edge: Edge<IndexType>) -> Result<Edge<usize>, GraphError<IndexType>> {
        match (self.index_of(edge.0), self.index_of(edge.1)) {
            (Some(from), Some(to)) => Ok((from, to)),
            (None, _) => Err(GraphError::MissingNode(edge.0)),
            (_, None) => Err(GraphError::MissingNode(edge.1)),
        }
    }

    fn mapped_result<CorrectType>(
        &self,
        result: Result<CorrectType, GraphError<usize>>,
    ) -> Result<CorrectType, GraphError<IndexType>> {
        result.map_err(|error| error.map_nodes(|index| self.node_ids[index]))
    }
}

impl<IndexType, Nw, Ew> MatrixGraph<IndexType, Nw, Ew> {
    fn has_node_at(&self, index: usize) -> bool {
        index < self.node_weights.len()
    }

    /// Returns true if there is an edge between the two dense indices.
    pub fn has_edge_at(&self, edge: Edge<usize>) -> bool {
        let (start_node, end_node) = edge;
        if !self.has_node_at(start_node) || !self.has_node_at(end_node) {
            return false;
        }

        self.adjacency_matrix[start_node][end_node].is_some()
    }

    /// Returns the weight of the edge between two dense indices.
    pub fn edge_weight_at(&self, edge: Edge<usize>) -> Result<&Ew, GraphError<usize>> {
        let (start_node, end_node) = edge;
        if !self.has_node_at(start_node) {
            return Err(GraphError::MissingNode(start_node));
        } else if !self.has_node_at(end_node) {
            return Err(GraphError::MissingNode(end_node));
        }

        self.adjacency_matrix[start_node][end_node]
            .as_ref()
            .ok_or(GraphError::MissingEdge(edge))
    }

    fn add_edge_at(&mut self, edge: Edge<usize>, weight: Ew) -> Result<(), GraphError<usize>> {
        let (start_node, end_node) = edge;
        if self.has_edge_at(edge) {
            return Err(GraphError::DuplicateEdge(edge));
        } else if !self.has_node_at(start_node) {
            return Err(GraphError::MissingNode(start_node));
        } else if !self.has_node_at(end_node) {
            return Err(GraphError::MissingNode(end_node));
        }

        self.adjacency_matrix[start_node][end_node] = Some(weight);

        // Adding an edge increases size by one.
        self.size += 1;
        Ok(())
    }

    /// Changes the weight of the edge between two dense indices, adding it if necessary.
    pub fn change_edge_at(&mut self, edge: Edge<usize>, weight: Ew) -> Result<(), GraphError<usize>> {
        if self.has_edge_at(edge) {
            self.adjacency_matrix[edge.0][edge.1] = Some(weight);
            Ok(())
        } else {
            self.add_edge_at(edge, weight)
        }
    }

    /// Iterates over all edges as pairs of dense indices, row by row.
    pub fn iter_edge_indices(&self) -> Box<dyn Iterator<Item = Edge<usize>> + '_> {
        Box::new(
            self.adjacency_matrix
                .iter()
                .enumerate()
                .flat_map(|(i, edges)| {
                    edges
                        .iter()
                        .enumerate()
                        .filter(|(_, weight)| weight.is_some())
                        .map(move |(j, _)| (i, j))
                }),
        )
    }
}

impl<IndexType, Nw, Ew> Default for MatrixGraph<IndexType, Nw, Ew>
where
    IndexType: Hash + Copy + Eq + Display + Debug,
{
    /// Default constructor for an empty MatrixGraph.
    /// If the amount of nodes is known beforehand use MatrixGraph::with_size(),
    /// as it doesn't require resizing later.
    fn default() -> Self {
        MatrixGraph::with_size(0)
    }
}

impl<IndexType, Nw, Ew> GenericWeightedGraph for MatrixGraph<IndexType, Nw, Ew>
where
    IndexType: Hash + Copy + Eq + Display + Debug,
{
    type IndexType = IndexType;
    type NodeWeightType = Nw;
    type EdgeWeightType = Ew;

    fn is_empty(&self) -> bool {
        self.node_weights.is_empty()
    }

    fn order(&self) -> usize {
        self.node_weights.len()
    }

    fn size(&self) -> usize {
        self.size
    }

    fn iter_node_ids(&self) -> Box<dyn Iterator<Item = IndexType> + '_> {
        Box::new(self.node_ids.iter().copied())
    }

    fn node_ids(&self) -> Vec<IndexType> {
        self.node_ids.clone()
    }

    fn node_weight(&self, id: IndexType) -> Result<&Nw, GraphError<IndexType>> {
        self.index_of(id)
            .map(|index| &self.node_weights[index])
            .ok_or(GraphError::MissingNode(id))
    }

    fn has_node(&self, id: IndexType) -> bool {
        self.node_map.contains_key(&id)
    }

    fn add_node(&mut self, id: IndexType, weight: Nw) -> Result<(), GraphError<IndexType>> {
        if self.has_node(id) {
            return Err(GraphError::DuplicateNode(id));
        }

        let index = self.node_weights.len();
        for row in self.adjacency_matrix.iter_mut() {
            row.push(None);
        }
        self.adjacency_matrix
            .push((0..=index).map(|_| None).collect());
        self.node_weights.push(weight);
        self.node_ids.push(id);
        self.node_map.insert(id, index);
        Ok(())
    }

    fn iter_edge_ids(&self) -> Box<dyn Iterator<Item = Edge<IndexType>> + '_> {
        Box::new(
            self.iter_edge_indices()
                .map(move |(from, to)| (self.node_ids[from], self.node_ids[to])),
        )
    }

    fn edge_ids(&self) -> Vec<Edge<IndexType>> {
        self.iter_edge_ids().collect()
    }

    fn edge_weight(&self, edge: Edge<IndexType>) -> Result<&Ew, GraphError<IndexType>> {
        let indices = self.mapped_edge(edge)?;
        let weight = self.edge_weight_at(indices);
        self.mapped_result(weight)
    }

    fn has_edge(&self, edge: Edge<IndexType>) -> bool {
        match self.mapped_edge(edge) {
            Ok(indices) => self.has_edge_at(indices),
            Err(_) => false,
        }
    }

    fn add_edge(&mut self, edge: Edge<IndexType>, weight: Ew) -> Result<(), GraphError<IndexType>> {
        let indices = self.mapped_edge(edge)?;
        let result = self.add_edge_at(indices, weight);
        self.mapped_result(result)
    }

    fn change_edge(
        &mut self,
        edge: Edge<IndexType>,
        weight: Ew,
    ) -> Result<(), GraphError<IndexType>> {
        let indices = self.mapped_edge(edge)?;
        let result = self.change_edge_at(indices, weight);
        self.mapped_result(result)
    }
}

#[cfg(test)]
mod usize_indexed_tests {
    use super::*;

    fn valid_weighted() -> MatrixGraph<usize, usize, usize> {
        MatrixGraph::new_usize_indexed(
            vec![1, 2, 3],
            vec![(0, 1, 100), (1, 2, 101), (2, 1, 50), (2, 0, 200)],
        )
        .unwrap()
    }

    #[test]
    fn new_usize_indexed_works() {
        let graph = valid_weighted();

        assert_eq!(graph.order(), 3, "Graph has the wrong order.");
        assert_eq!(graph.size(), 4, "Graph has the wrong size.");
        assert_eq!(graph.edge_weight((2, 1)), Ok(&50));
        assert_eq!(graph.node_weight(1), Ok(&2));
    }

    #[test]
    fn new_usize_indexed_errors_on_missing_node() {
        let graph = MatrixGraph::new_usize_indexed(vec![1, 2], vec![(0, 2, 10)]);

        assert_eq!(graph.err(), Some(GraphError::MissingNode(2)));
    }

    #[test]
    fn new_usize_indexed_errors_on_duplicate_edge() {
        let graph = MatrixGraph::new_usize_indexed(vec![1, 2], vec![(0, 1, 10), (0, 1, 12)]);

        assert_eq!(graph.err(), Some(GraphError::DuplicateEdge((0, 1))));
    }

    #[test]
    fn edge_weight_at_errors_on_missing_edge() {
        let graph = valid_weighted();

        assert_eq!(
            graph.edge_weight_at((1, 0)),
            Err(GraphError::MissingEdge((1, 0)))
        );
    }

    #[test]
    fn change_edge_at_works() {
        let mut graph = valid_weighted();
        graph.change_edge_at((0, 1), 7).unwrap();
        graph.change_edge_at((1, 0), 8).unwrap();

        assert_eq!(graph.edge_weight_at((0, 1)), Ok(&7));
        assert_eq!(graph.edge_weight_at((1, 0)), Ok(&8));
        assert_eq!(graph.size(), 5, "Adding an edge did not increase size.");
    }

    #[test]
    fn iter_edge_indices_is_row_major() {
        let graph = valid_weighted();

        assert_eq!(
            graph.iter_edge_indices().collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 0), (2, 1)]
        );
    }
}
