use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
use crate::metaheuristic::aco::Params;
use crate::rng::os_random_seed;

#[derive(Copy, Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct AcoExperiment {
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub seed: u64,
    pub ant_count: usize,
    pub iterations: usize,
    #[serde(default)]
    pub parallel: bool,
}

impl AcoExperiment {
    pub fn params(&self) -> Params {
        Params::new(
            self.alpha,
            self.beta,
            self.rho,
            Some(self.seed as u128),
            self.ant_count,
            self.iterations,
        )
        .parallel(self.parallel)
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UnseededAcoExperiment {
    pub alpha: f64,
    pub beta: f64,
    pub rho: f64,
    pub ant_count: usize,
    pub iterations: usize,
    #[serde(default)]
    pub parallel: bool,
}

impl Fix<AcoExperiment> for UnseededAcoExperiment {
    fn to_fixed(&self) -> AcoExperiment {
        AcoExperiment {
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            ant_count: self.ant_count,
            iterations: self.iterations,
            parallel: self.parallel,
            seed: (os_random_seed() >> 64) as u64,
        }
    }
}
