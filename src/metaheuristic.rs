pub mod aco;
mod solution;
mod supervisor;

use crate::graph::GenericWeightedGraph;
pub use aco::{optimize, optimize_with, Aco};
pub use solution::{solution_length, Solution};
pub use supervisor::{Message, MessageInfo, Supervisor};

use num_traits::ToPrimitive;
use serde::Serialize;

/// The states a metaheuristic run passes through.
///
/// A run starts out `Initializing`, alternates between `Constructing` and `Updating`
/// once per iteration, and ends `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Initializing,
    Constructing,
    Updating,
    Completed,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Initializing
    }
}

pub trait Metaheuristic<IndexType>: Sized {
    type Params;
    type SupervisorType;
    type Error;

    fn new<Nw, Ew: ToPrimitive>(
        problem: ProblemInstance<'_, IndexType, Nw, Ew>,
        params: Self::Params,
        supervisor: Self::SupervisorType,
    ) -> Result<Self, Self::Error>;

    /// Runs one iteration. Returns the best solution found so far, if it improved.
    fn single_iteration(&mut self) -> Result<Option<&Solution<IndexType>>, Self::Error>;
}

pub struct ProblemInstance<'a, IndexType, Nw, Ew> {
    graph: &'a dyn GenericWeightedGraph<
        IndexType = IndexType,
        NodeWeightType = Nw,
        EdgeWeightType = Ew,
    >,
}

impl<'a, IndexType, Nw, Ew> ProblemInstance<'a, IndexType, Nw, Ew> {
    pub fn new(
        graph: &'a dyn GenericWeightedGraph<
            IndexType = IndexType,
            NodeWeightType = Nw,
            EdgeWeightType = Ew,
        >,
    ) -> Self {
        ProblemInstance { graph }
    }

    pub fn graph(
        &self,
    ) -> &'a dyn GenericWeightedGraph<IndexType = IndexType, NodeWeightType = Nw, EdgeWeightType = Ew>
    {
        self.graph
    }
}
