use crate::metaheuristic::aco::{AcoError, ChoiceInfo, DistanceTable};
use crate::metaheuristic::supervisor::MessageInfo;
use crate::metaheuristic::Phase;
use crate::rng::rng64;

use decorum::R64;
use num_traits::Zero;
use oorandom::Rand64;
use std::time::{Duration, Instant};

/// A single agent of the colony. Its tour lives over dense node indices.
#[derive(Debug, Clone)]
pub struct Ant {
    id: usize,
    tour: Vec<usize>,
    visited: Vec<bool>,
    tour_length: R64,
    selection_weights: Vec<f64>,
    evaluations: usize,
    cpu_time: Duration,
}

impl Ant {
    pub fn new(id: usize, order: usize) -> Self {
        Ant {
            id,
            tour: Vec::with_capacity(order + 1),
            visited: vec![false; order],
            tour_length: R64::zero(),
            selection_weights: vec![0.0; order],
            evaluations: 0,
            cpu_time: Duration::default(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// The closed tour of the last construction, empty before the first one.
    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    pub fn tour_length(&self) -> R64 {
        self.tour_length
    }

    /// Summary of the last construction for the supervisor.
    pub fn info(&self) -> MessageInfo {
        MessageInfo::new(
            self.evaluations,
            0,
            self.tour.len().saturating_sub(1),
            Phase::Constructing,
            self.cpu_time,
            self.tour_length.into_inner(),
        )
    }

    /// Forgets the previous tour.
    pub fn reset(&mut self) {
        self.tour.clear();
        for flag in self.visited.iter_mut() {
            *flag = false;
        }
        self.tour_length = R64::zero();
        self.evaluations = 0;
        self.cpu_time = Duration::default();
    }

    fn visit(&mut self, node: usize) {
        self.visited[node] = true;
        self.tour.push(node);
    }

    /// Builds a closed tour over all nodes, starting at a uniformly drawn node.
    /// All randomness is taken from a generator seeded with `seed`.
    pub fn construct(
        &mut self,
        choice_info: &ChoiceInfo,
        distances: &DistanceTable,
        seed: u128,
    ) -> Result<(), AcoError<usize>> {
        let start_time = Instant::now();
        let order = self.visited.len();
        self.reset();
        if order == 0 {
            return Ok(());
        }

        let mut rng = rng64(seed);
        let start = rng.rand_range(0..order as u64) as usize;
        self.visit(start);

        for step in 1..order {
            let next = self.select_next(choice_info, &mut rng, step)?;
            self.visit(next);
        }

        self.tour.push(start);
        self.tour_length = distances.tour_length(&self.tour)?;
        self.cpu_time = start_time.elapsed();

        Ok(())
    }

    /// Roulette wheel selection over all unvisited nodes, weighted by their choice information.
    fn select_next(
        &mut self,
        choice_info: &ChoiceInfo,
        rng: &mut Rand64,
        step: usize,
    ) -> Result<usize, AcoError<usize>> {
        let current = self.tour[self.tour.len() - 1];
        let mut sum = 0.0;
        for (node, weight) in self.selection_weights.iter_mut().enumerate() {
            *weight = if self.visited[node] {
                0.0
            } else {
                self.evaluations += 1;
                choice_info.value(current, node)?.into_inner()
            };
            sum += *weight;
        }

        let no_successor = AcoError::NoFeasibleSuccessor {
            ant: self.id,
            node: current,
            step,
        };
        if sum.is_nan() || sum <= 0.0 {
            return Err(no_successor);
        }

        let rand = rng.rand_float() * sum;
        let mut cumulative = 0.0;
        let mut last_candidate = None;
        for (node, &weight) in self.selection_weights.iter().enumerate() {
            if weight <= 0.0 {
                continue;
            }

            cumulative += weight;
            if cumulative >= rand {
                return Ok(node);
            }
            last_candidate = Some(node);
        }

        // rounding can leave the accumulated sum a hair below rand
        last_candidate.ok_or(no_successor)
    }
}
