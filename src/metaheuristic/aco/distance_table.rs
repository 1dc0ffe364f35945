use crate::graph::{GenericWeightedGraph, GraphError, MatrixGraph};
use crate::metaheuristic::aco::{checked_real, AcoError};

use decorum::R64;
use num_traits::{ToPrimitive, Zero};
use std::fmt::{Debug, Display};

/// Edge weights between every ordered pair of distinct nodes, indexed by dense node index.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    matrix: MatrixGraph<usize, (), R64>,
}

impl DistanceTable {
    /// Reads the weights of all ordered pairs of distinct `nodes` from the graph.
    /// The position of a node in `nodes` becomes its index in the table.
    pub fn from_graph<IndexType, Nw, Ew>(
        graph: &dyn GenericWeightedGraph<IndexType = IndexType, NodeWeightType = Nw, EdgeWeightType = Ew>,
        nodes: &[IndexType],
    ) -> Result<Self, AcoError<IndexType>>
    where
        IndexType: Copy + Debug + Display,
        Ew: ToPrimitive,
    {
        let order = nodes.len();
        let mut edges = Vec::with_capacity(order * order.saturating_sub(1));
        for (i, &from) in nodes.iter().enumerate() {
            for (j, &to) in nodes.iter().enumerate() {
                if i == j {
                    continue;
                }

                let weight = match graph.edge_weight((from, to)) {
                    Ok(weight) => weight.to_f64().unwrap_or(f64::NAN),
                    Err(GraphError::MissingEdge(_)) => {
                        return Err(AcoError::MissingEdgeWeight((from, to)))
                    }
                    Err(error) => return Err(AcoError::Graph(error)),
                };

                if !weight.is_finite() || weight <= 0.0 {
                    return Err(AcoError::InvalidEdgeWeight((from, to), weight));
                }
                edges.push((i, j, R64::from_inner(weight)));
            }
        }

        let matrix = MatrixGraph::new_usize_indexed(vec![(); order], edges)
            .map_err(|error| AcoError::Graph(error.map_nodes(|index| nodes[index])))?;

        Ok(DistanceTable { matrix })
    }

    pub fn order(&self) -> usize {
        self.matrix.order()
    }

    pub fn distance(&self, from: usize, to: usize) -> Result<R64, GraphError<usize>> {
        self.matrix.edge_weight_at((from, to)).map(|weight| *weight)
    }

    /// Sums up the distances of all consecutive pairs of the tour.
    /// Pairs with equal endpoints, like the closing edge of a single node tour, count as zero.
    pub fn tour_length(&self, tour: &[usize]) -> Result<R64, AcoError<usize>> {
        let mut length = R64::zero();
        for edge in tour.windows(2).filter(|edge| edge[0] != edge[1]) {
            let distance = self.distance(edge[0], edge[1])?;
            length = checked_real(
                length.into_inner() + distance.into_inner(),
                (edge[0], edge[1]),
            )?;
        }

        Ok(length)
    }
}
