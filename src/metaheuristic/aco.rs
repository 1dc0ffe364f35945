mod ant;
mod choice_info;
mod distance_table;
mod error;
mod message;
mod params;
mod pheromone_table;
mod supervisor;

pub use ant::Ant;
pub use choice_info::ChoiceInfo;
pub use distance_table::DistanceTable;
pub use error::AcoError;
pub use message::Message;
pub use params::Params;
pub use pheromone_table::PheromoneTable;
pub use supervisor::Supervisor;

use crate::graph::{Edge, GenericWeightedGraph};
use crate::metaheuristic::Supervisor as _;
use crate::metaheuristic::{Metaheuristic, Phase, ProblemInstance, Solution};
use crate::rng::{derive_seed, rng64};

use decorum::R64;
use num_traits::{ToPrimitive, Zero};
use oorandom::Rand64;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::io::{Sink, Write};
use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

/// Pheromone level every edge starts out with.
pub const INITIAL_PHEROMONE: f64 = 0.1;

/// Wraps an intermediate result, or reports the edge it was computed for if it is not finite.
fn checked_real(value: f64, edge: Edge<usize>) -> Result<R64, AcoError<usize>> {
    if value.is_finite() {
        Ok(R64::from_inner(value))
    } else {
        Err(AcoError::NonFiniteValue(edge))
    }
}

/// Translates errors on dense indices back to the node ids of the graph.
fn mapped<IndexType: Copy>(
    nodes: &[IndexType],
) -> impl Fn(AcoError<usize>) -> AcoError<IndexType> + '_ {
    move |error| error.map_nodes(|index| nodes[index])
}

/// Ant System for the traveling salesman problem.
///
/// An `Aco` is the context of exactly one run: it owns the distance, pheromone and choice tables
/// as well as the ants. Nothing is shared between two instances, so independent runs can happen
/// concurrently.
pub struct Aco<IndexType, W: Write> {
    nodes: Vec<IndexType>,
    node_map: HashMap<IndexType, usize>,
    distances: DistanceTable,
    pheromones: PheromoneTable,
    choice_info: ChoiceInfo,
    ants: Vec<Ant>,
    params: Params,
    iteration: usize,
    phase: Phase,
    best_solution: Solution<IndexType>,
    best_length: Option<R64>,
    pub supervisor: Supervisor<W>,
    sender: Sender<Message>,
    rng: Rand64,
}

impl<IndexType, W> Aco<IndexType, W>
where
    IndexType: Copy + Hash + Eq + Debug + Display,
    W: Write,
{
    fn index_of(&self, id: IndexType) -> Option<usize> {
        self.node_map.get(&id).copied()
    }

    fn solution_of(&self, ant: &Ant) -> Solution<IndexType> {
        Solution::from_nodes(ant.tour().iter().map(|&index| self.nodes[index]).collect())
    }

    /// Lets every ant build a tour. Seeds are drawn up front, so the outcome doesn't depend
    /// on whether the ants run in parallel.
    fn construct_tours(&mut self) -> Result<(), AcoError<usize>> {
        let rng = &mut self.rng;
        let seeds: Vec<u128> = self.ants.iter().map(|_| derive_seed(rng)).collect();
        let choice_info = &self.choice_info;
        let distances = &self.distances;

        if self.params.parallel {
            self.ants
                .par_iter_mut()
                .zip(seeds.into_par_iter())
                .try_for_each(|(ant, seed)| ant.construct(choice_info, distances, seed))
        } else {
            self.ants
                .iter_mut()
                .zip(seeds)
                .try_for_each(|(ant, seed)| ant.construct(choice_info, distances, seed))
        }
    }

    /// Evaporates all trails, lets every ant with a tour deposit `1 / length` on its edges
    /// and rebuilds the choice information. Returns the number of deposits.
    fn update_pheromones(&mut self) -> Result<usize, AcoError<usize>> {
        self.pheromones.evaporate(self.params.rho)?;

        let mut deposits = 0;
        for ant in self
            .ants
            .iter()
            .filter(|ant| ant.tour_length() > R64::zero())
        {
            let tour = ant.tour();
            let tau = checked_real(1.0 / ant.tour_length().into_inner(), (tour[0], tour[1]))?;
            self.pheromones.deposit(tour, tau)?;
            deposits += 1;
        }

        self.choice_info = ChoiceInfo::compute(
            &self.pheromones,
            &self.distances,
            self.params.alpha,
            self.params.beta,
        )?;

        Ok(deposits)
    }

    /// Remembers the shortest tour seen so far. Returns how often it improved.
    fn update_best(&mut self) -> usize {
        let mut improvements = 0;
        for ant in self.ants.iter().filter(|ant| !ant.tour().is_empty()) {
            if self
                .best_length
                .map_or(true, |best| ant.tour_length() < best)
            {
                self.best_length = Some(ant.tour_length());
                self.best_solution = self.solution_of(ant);
                improvements += 1;
            }
        }

        improvements
    }

    fn iterate(&mut self) -> Result<bool, AcoError<usize>> {
        self.phase = Phase::Constructing;
        self.construct_tours()?;
        for ant in self.ants.iter() {
            let _ = self
                .sender
                .send(Message::from_info(ant.id(), self.iteration, ant.info()));
        }

        self.phase = Phase::Updating;
        let start_time = Instant::now();
        let deposits = self.update_pheromones()?;
        let improvements = self.update_best();
        let iteration_best = self
            .ants
            .iter()
            .map(|ant| ant.tour_length())
            .min()
            .unwrap_or_else(R64::zero);

        // ant 0 is always the colony
        let order = self.nodes.len();
        let _ = self.sender.send(Message::new(
            0,
            self.iteration,
            Phase::Updating,
            order * order.saturating_sub(1),
            improvements,
            deposits,
            start_time.elapsed(),
            iteration_best.into_inner(),
        ));
        self.supervisor
            .prepare_next()
            .map_err(|error| AcoError::Supervisor(error.to_string()))?;
        self.iteration += 1;

        Ok(improvements > 0)
    }

    /// Writes out what is left of the last aggregation window, then logs the final best length
    /// as a row of its own.
    fn complete(&mut self) -> Result<(), AcoError<IndexType>> {
        self.supervisor
            .flush()
            .map_err(|error| AcoError::Supervisor(error.to_string()))?;

        self.phase = Phase::Completed;
        let _ = self.sender.send(Message::new(
            0,
            self.iteration,
            Phase::Completed,
            0,
            0,
            0,
            Duration::default(),
            self.best_length().unwrap_or(0.0),
        ));
        self.supervisor
            .flush()
            .map_err(|error| AcoError::Supervisor(error.to_string()))
    }

    /// Runs iterations until the configured count is reached.
    pub fn run(&mut self) -> Result<(), AcoError<IndexType>> {
        while self.iteration < self.params.iterations {
            self.single_iteration()?;
        }

        Ok(())
    }

    /// Ends the run and returns the tour and tour length of every ant, in ant order.
    /// Ants that never constructed a tour report an empty tour of length 0.
    pub fn finish(mut self) -> Result<(Vec<Solution<IndexType>>, Vec<f64>), AcoError<IndexType>> {
        self.complete()?;

        let tours = self.ants.iter().map(|ant| self.solution_of(ant)).collect();
        let lengths = self
            .ants
            .iter()
            .map(|ant| ant.tour_length().into_inner())
            .collect();

        Ok((tours, lengths))
    }

    /// Returns the pheromone level of an edge, or None for unknown nodes and self loops.
    pub fn pheromone(&self, from: IndexType, to: IndexType) -> Option<f64> {
        let (from, to) = (self.index_of(from)?, self.index_of(to)?);
        self.pheromones
            .level(from, to)
            .ok()
            .map(|level| level.into_inner())
    }

    /// Returns the choice information of an edge, or None for unknown nodes and self loops.
    pub fn choice_info(&self, from: IndexType, to: IndexType) -> Option<f64> {
        let (from, to) = (self.index_of(from)?, self.index_of(to)?);
        self.choice_info
            .value(from, to)
            .ok()
            .map(|value| value.into_inner())
    }

    pub fn is_pheromone_symmetric(&self) -> bool {
        self.pheromones.is_symmetric()
    }

    pub fn is_pheromone_non_negative(&self) -> bool {
        self.pheromones.is_non_negative()
    }

    /// Number of finished iterations.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Node ids in the order the ants index them.
    pub fn nodes(&self) -> &[IndexType] {
        &self.nodes
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    pub fn best_solution(&self) -> Option<&Solution<IndexType>> {
        self.best_length.map(|_| &self.best_solution)
    }

    pub fn best_length(&self) -> Option<f64> {
        self.best_length.map(|length| length.into_inner())
    }
}

impl<IndexType, W> Metaheuristic<IndexType> for Aco<IndexType, W>
where
    IndexType: Copy + Hash + Eq + Debug + Display,
    W: Write,
{
    type Params = Params;
    type SupervisorType = Supervisor<W>;
    type Error = AcoError<IndexType>;

    fn new<Nw, Ew: ToPrimitive>(
        problem: ProblemInstance<'_, IndexType, Nw, Ew>,
        params: Self::Params,
        mut supervisor: Self::SupervisorType,
    ) -> Result<Self, Self::Error> {
        let graph = problem.graph();
        let nodes = graph.node_ids();
        params.validate::<IndexType>(nodes.len())?;

        let mut node_map = HashMap::with_capacity(nodes.len());
        for (index, &id) in nodes.iter().enumerate() {
            if node_map.insert(id, index).is_some() {
                return Err(AcoError::InvalidConfiguration(format!(
                    "Node {} is listed more than once.",
                    id
                )));
            }
        }

        let distances = DistanceTable::from_graph(graph, &nodes)?;
        let pheromones =
            PheromoneTable::uniform(nodes.len(), INITIAL_PHEROMONE).map_err(mapped(&nodes))?;
        let choice_info = ChoiceInfo::compute(&pheromones, &distances, params.alpha, params.beta)
            .map_err(mapped(&nodes))?;

        supervisor.reset();
        let ants = (0..params.ant_count)
            .map(|_| Ant::new(supervisor.new_ant(), nodes.len()))
            .collect();
        let sender = supervisor.sender();

        Ok(Aco {
            nodes,
            node_map,
            distances,
            pheromones,
            choice_info,
            ants,
            params,
            iteration: 0,
            phase: Phase::Initializing,
            best_solution: Solution::new(),
            best_length: None,
            supervisor,
            sender,
            rng: rng64(params.seed),
        })
    }

    fn single_iteration(&mut self) -> Result<Option<&Solution<IndexType>>, Self::Error> {
        let improved = self.iterate().map_err(mapped(&self.nodes))?;
        if improved {
            Ok(Some(&self.best_solution))
        } else {
            Ok(None)
        }
    }
}

/// Runs Ant System on a complete graph and returns the final tour and tour length of every ant.
///
/// The run is seeded from the operating system. Use [`optimize_with`] for reproducible runs.
pub fn optimize<IndexType, Nw, Ew>(
    graph: &dyn GenericWeightedGraph<IndexType = IndexType, NodeWeightType = Nw, EdgeWeightType = Ew>,
    ant_count: usize,
    iteration_count: usize,
    evaporation_rate: f64,
    alpha: f64,
    beta: f64,
) -> Result<(Vec<Solution<IndexType>>, Vec<f64>), AcoError<IndexType>>
where
    IndexType: Copy + Hash + Eq + Debug + Display,
    Ew: ToPrimitive,
{
    optimize_with(
        graph,
        Params::new(alpha, beta, evaporation_rate, None, ant_count, iteration_count),
    )
}

pub fn optimize_with<IndexType, Nw, Ew>(
    graph: &dyn GenericWeightedGraph<IndexType = IndexType, NodeWeightType = Nw, EdgeWeightType = Ew>,
    params: Params,
) -> Result<(Vec<Solution<IndexType>>, Vec<f64>), AcoError<IndexType>>
where
    IndexType: Copy + Hash + Eq + Debug + Display,
    Ew: ToPrimitive,
{
    let mut aco: Aco<IndexType, Sink> =
        Aco::new(ProblemInstance::new(graph), params, Supervisor::silent())?;
    aco.run()?;
    aco.finish()
}
