mod aco_experiment;

use serde::{Deserialize, Serialize};

use crate::experiment_config::Fix;
pub use aco_experiment::{AcoExperiment, UnseededAcoExperiment};

#[derive(Deserialize, Serialize, Debug)]
#[serde(untagged)]
pub enum AlgoConfig {
    Aco(AcoExperiment),
    UnseededAco(UnseededAcoExperiment),
}

impl AlgoConfig {
    /// Returns the seeded configuration. Unseeded configs draw their seed on every call.
    pub fn aco(&self) -> AcoExperiment {
        match self {
            AlgoConfig::Aco(aco) => *aco,
            AlgoConfig::UnseededAco(usaco) => usaco.to_fixed(),
        }
    }
}
