use crate::metaheuristic::aco::AcoError;
use crate::rng::os_random_seed;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub seed: u128,
    pub ant_count: usize,
    pub iterations: usize,
    pub parallel: bool,
}

impl Params {
    pub fn new(
        alpha: f64,
        beta: f64,
        rho: f64,
        seed: Option<u128>,
        ant_count: usize,
        iterations: usize,
    ) -> Self {
        Params {
            alpha,
            beta,
            rho,
            seed: seed.unwrap_or_else(os_random_seed),
            ant_count,
            iterations,
            parallel: false,
        }
    }

    /// Lets the ants of one iteration construct their tours on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Checks the parameters against a graph with `order` nodes.
    pub fn validate<IndexType>(&self, order: usize) -> Result<(), AcoError<IndexType>> {
        if order < 1 {
            return Err(AcoError::InvalidConfiguration(
                "The graph needs at least one node.".to_string(),
            ));
        } else if self.ant_count < 1 {
            return Err(AcoError::InvalidConfiguration(
                "At least one ant is needed.".to_string(),
            ));
        } else if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(AcoError::InvalidConfiguration(format!(
                "alpha ({}) and beta ({}) must be finite.",
                self.alpha, self.beta
            )));
        } else if !(0.0..=1.0).contains(&self.rho) {
            // outside of [0, 1] evaporation would turn pheromones negative
            return Err(AcoError::InvalidConfiguration(format!(
                "Evaporation rate {} is not within [0, 1].",
                self.rho
            )));
        }

        Ok(())
    }
}
