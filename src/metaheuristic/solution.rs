use crate::graph::{Edge, GenericWeightedGraph, GraphError};

use num_traits::ToPrimitive;
use std::collections::HashSet;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;

/// Sums up the weights of all consecutive edges of the solution.
/// Edges from a node to itself count as zero.
/// Errors if one of the other edges is not part of the graph.
pub fn solution_length<IndexType, Nw, Ew>(
    solution: &Solution<IndexType>,
    graph: &dyn GenericWeightedGraph<IndexType = IndexType, NodeWeightType = Nw, EdgeWeightType = Ew>,
) -> Result<f64, GraphError<IndexType>>
where
    IndexType: PartialEq + Copy + Debug + Display,
    Ew: ToPrimitive,
{
    let mut length = 0.0;
    for (from, to) in solution.iter_edges().filter(|(from, to)| from != to) {
        let weight = graph.edge_weight((*from, *to))?;
        length += weight.to_f64().unwrap_or(f64::NAN);
    }

    Ok(length)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution<IndexType> {
    node_list: Vec<IndexType>,
}

impl<IndexType> Default for Solution<IndexType>
where
    IndexType: PartialEq + Copy,
{
    fn default() -> Self {
        Solution::new()
    }
}

impl<IndexType> Solution<IndexType>
where
    IndexType: PartialEq + Copy,
{
    pub fn new() -> Self {
        Solution {
            node_list: Vec::new(),
        }
    }

    pub fn from_nodes(nodes: Vec<IndexType>) -> Self {
        Solution { node_list: nodes }
    }

    pub fn push_node(&mut self, node: IndexType) {
        self.node_list.push(node);
    }

    pub fn len(&self) -> usize {
        self.node_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_list.is_empty()
    }

    pub fn iter_edges(&self) -> Box<dyn Iterator<Item = Edge<&IndexType>> + '_> {
        Box::new(self.node_list.iter().zip(self.node_list.iter().skip(1)))
    }

    /// Returns true if the solution ends where it started.
    pub fn is_closed(&self) -> bool {
        match (self.node_list.first(), self.node_list.last()) {
            (Some(first), Some(last)) => self.node_list.len() > 1 && first == last,
            _ => false,
        }
    }
}

impl<IndexType> Solution<IndexType>
where
    IndexType: Hash + Eq + Copy,
{
    /// Returns true if the solution is a closed cycle which visits exactly `order`
    /// distinct nodes, each of them once.
    pub fn is_hamiltonian_cycle(&self, order: usize) -> bool {
        if !self.is_closed() || self.node_list.len() != order + 1 {
            return false;
        }

        let distinct: HashSet<_> = self.node_list[..order].iter().collect();
        distinct.len() == order
    }
}

impl<IndexType: Display> Display for Solution<IndexType> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.node_list
                .iter()
                .map(|x| format!("{}", x))
                .collect::<Vec<String>>()
                .join(" -> ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::MatrixGraph;

    fn node_list() -> Vec<usize> {
        vec![1, 4, 3, 2, 1]
    }

    fn valid_solution() -> Solution<usize> {
        Solution {
            node_list: node_list(),
        }
    }

    #[test]
    fn iter_edges_works() {
        let node_list = node_list();
        let edge_it = node_list.iter().zip(node_list.iter().skip(1));
        let solution = valid_solution();

        assert!(solution.iter_edges().eq(edge_it));
    }

    #[test]
    fn is_closed_works() {
        let mut open = Solution::from_nodes(vec![1, 4, 3]);

        assert!(valid_solution().is_closed());
        assert!(!open.is_closed());
        open.push_node(1);
        assert!(open.is_closed());
        assert!(!Solution::from_nodes(vec![1]).is_closed());
        assert!(!Solution::<usize>::new().is_closed());
    }

    #[test]
    fn is_hamiltonian_cycle_works() {
        assert!(valid_solution().is_hamiltonian_cycle(4));
        assert!(!valid_solution().is_hamiltonian_cycle(5));
        assert!(!Solution::from_nodes(vec![1, 4, 4, 2, 1]).is_hamiltonian_cycle(4));
        assert!(Solution::from_nodes(vec![7, 7]).is_hamiltonian_cycle(1));
    }

    #[test]
    fn display_works() {
        assert_eq!(valid_solution().to_string(), "1 -> 4 -> 3 -> 2 -> 1");
    }

    #[test]
    fn solution_length_works() {
        let graph = MatrixGraph::<usize, (), f64>::new_undirected(
            vec![(1, ()), (2, ()), (3, ()), (4, ())],
            vec![((1, 4), 2.0), ((4, 3), 1.5), ((3, 2), 4.0), ((2, 1), 0.5)],
        )
        .unwrap();

        assert_eq!(solution_length(&valid_solution(), &graph), Ok(8.0));
        assert_eq!(
            solution_length(&Solution::from_nodes(vec![1, 3]), &graph),
            Err(GraphError::MissingEdge((1, 3)))
        );
    }
}
