use crate::graph::{GenericWeightedGraph, GraphError, MatrixGraph};
use crate::metaheuristic::aco::{checked_real, AcoError, DistanceTable, PheromoneTable};

use decorum::R64;

/// Combined attractiveness `tau^alpha * (1 / d)^beta` of every ordered pair of distinct nodes.
#[derive(Debug, Clone)]
pub struct ChoiceInfo {
    matrix: MatrixGraph<usize, (), R64>,
}

impl ChoiceInfo {
    pub fn compute(
        pheromones: &PheromoneTable,
        distances: &DistanceTable,
        alpha: f64,
        beta: f64,
    ) -> Result<Self, AcoError<usize>> {
        let order = distances.order();
        let mut edges = Vec::with_capacity(order * order.saturating_sub(1));
        for from in 0..order {
            for to in (0..order).filter(|&to| to != from) {
                let tau = pheromones.level(from, to)?.into_inner();
                let eta = 1.0 / distances.distance(from, to)?.into_inner();
                let value = checked_real(tau.powf(alpha) * eta.powf(beta), (from, to))?;
                edges.push((from, to, value));
            }
        }

        Ok(ChoiceInfo {
            matrix: MatrixGraph::new_usize_indexed(vec![(); order], edges)?,
        })
    }

    pub fn order(&self) -> usize {
        self.matrix.order()
    }

    pub fn value(&self, from: usize, to: usize) -> Result<R64, GraphError<usize>> {
        self.matrix.edge_weight_at((from, to)).map(|value| *value)
    }
}
