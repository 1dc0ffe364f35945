mod error;
mod matrix_graph;

pub use error::GraphError;
pub use matrix_graph::MatrixGraph;

pub type Edge<IndexType> = (IndexType, IndexType);

/// A weighted graph which can be handed to a metaheuristic as problem instance.
///
/// Node ids are enumerated in a stable order, which the solvers rely on for reproducible
/// results under a fixed seed.
pub trait GenericWeightedGraph {
    type IndexType;
    type NodeWeightType;
    type EdgeWeightType;

    /// Returns true if there are no nodes, or false otherwise.
    fn is_empty(&self) -> bool;

    /// Returns the number of nodes in this graph.
    fn order(&self) -> usize;

    /// Returns the number of edges in this graph.
    fn size(&self) -> usize;

    /// Returns an iterator over node ids in registration order.
    fn iter_node_ids(&self) -> Box<dyn Iterator<Item = Self::IndexType> + '_>;

    /// Returns the node ids of this graph in registration order.
    fn node_ids(&self) -> Vec<Self::IndexType>;

    /// Returns the weight of node with id.
    fn node_weight(
        &self,
        id: Self::IndexType,
    ) -> Result<&Self::NodeWeightType, GraphError<Self::IndexType>>;

    /// Returns true if node with id is a member, or false otherwise.
    fn has_node(&self, id: Self::IndexType) -> bool;

    /// Adds a new node with weight to the graph.
    /// Returns an error if a node with the same id already exists.
    fn add_node(
        &mut self,
        id: Self::IndexType,
        weight: Self::NodeWeightType,
    ) -> Result<(), GraphError<Self::IndexType>>;

    /// Returns an iterator over edge ids in the form (from_id, to_id)
    fn iter_edge_ids(&self) -> Box<dyn Iterator<Item = Edge<Self::IndexType>> + '_>;

    /// Returns a vec of all edge ids in the form (from_id, to_id)
    fn edge_ids(&self) -> Vec<Edge<Self::IndexType>>;

    /// Returns the weight of an edge.
    fn edge_weight(
        &self,
        edge: Edge<Self::IndexType>,
    ) -> Result<&Self::EdgeWeightType, GraphError<Self::IndexType>>;

    /// Returns true if the edge exists, or false otherwise.
    fn has_edge(&self, edge: Edge<Self::IndexType>) -> bool;

    /// Adds a new weighted edge to the graph.
    /// Returns an error if the edge already exists or one of the nodes is missing.
    fn add_edge(
        &mut self,
        edge: Edge<Self::IndexType>,
        weight: Self::EdgeWeightType,
    ) -> Result<(), GraphError<Self::IndexType>>;

    /// Changes the weight of a edge to the new weight.
    /// If the edge did not exist before, it gets created in this process.
    /// If the new edge can't be created, because one of the nodes is not in the graph this errors.
    fn change_edge(
        &mut self,
        edge: Edge<Self::IndexType>,
        weight: Self::EdgeWeightType,
    ) -> Result<(), GraphError<Self::IndexType>>;
}
