use crate::graph::{GenericWeightedGraph, GraphError, MatrixGraph};
use crate::metaheuristic::aco::{checked_real, AcoError};

use decorum::R64;
use num_traits::Zero;

/// Pheromone level of every ordered pair of distinct nodes, indexed by dense node index.
///
/// Edges are treated as undirected: every update of (i, j) is mirrored into (j, i).
#[derive(Debug, Clone)]
pub struct PheromoneTable {
    matrix: MatrixGraph<usize, (), R64>,
}

impl PheromoneTable {
    /// Creates a table for `order` nodes in which every edge carries `level`.
    pub fn uniform(order: usize, level: f64) -> Result<Self, AcoError<usize>> {
        let level = checked_real(level, (0, 0))?;
        let edges = (0..order)
            .flat_map(|i| (0..order).filter(move |&j| j != i).map(move |j| (i, j, level)))
            .collect();

        Ok(PheromoneTable {
            matrix: MatrixGraph::new_usize_indexed(vec![(); order], edges)?,
        })
    }

    pub fn order(&self) -> usize {
        self.matrix.order()
    }

    pub fn level(&self, from: usize, to: usize) -> Result<R64, GraphError<usize>> {
        self.matrix.edge_weight_at((from, to)).map(|level| *level)
    }

    fn set_symmetric(&mut self, edge: (usize, usize), level: R64) -> Result<(), GraphError<usize>> {
        self.matrix.change_edge_at(edge, level)?;
        self.matrix.change_edge_at((edge.1, edge.0), level)
    }

    /// Multiplies every level by `1 - rho`.
    /// Each unordered pair is decayed exactly once and its result is mirrored.
    pub fn evaporate(&mut self, rho: f64) -> Result<(), AcoError<usize>> {
        let pairs: Vec<_> = self
            .matrix
            .iter_edge_indices()
            .filter(|(from, to)| from < to)
            .collect();

        for (from, to) in pairs {
            let level = self.level(from, to)?;
            let decayed = checked_real((1.0 - rho) * level.into_inner(), (from, to))?;
            self.set_symmetric((from, to), decayed)?;
        }

        Ok(())
    }

    /// Adds `amount` to every consecutive edge of the tour, in both directions.
    pub fn deposit(&mut self, tour: &[usize], amount: R64) -> Result<(), AcoError<usize>> {
        for edge in tour.windows(2).filter(|edge| edge[0] != edge[1]) {
            let (from, to) = (edge[0], edge[1]);
            let level = self.level(from, to)?;
            let reinforced = checked_real(level.into_inner() + amount.into_inner(), (from, to))?;
            self.set_symmetric((from, to), reinforced)?;
        }

        Ok(())
    }

    /// Returns true if level(i, j) equals level(j, i) for every edge.
    pub fn is_symmetric(&self) -> bool {
        self.matrix
            .iter_edge_indices()
            .all(|(from, to)| self.level(from, to) == self.level(to, from))
    }

    /// Returns true if no level is negative.
    pub fn is_non_negative(&self) -> bool {
        self.matrix
            .iter_edge_indices()
            .all(|(from, to)| self.level(from, to).map_or(false, |level| level >= R64::zero()))
    }
}
