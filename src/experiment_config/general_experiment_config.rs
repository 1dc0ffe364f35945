use serde::{Deserialize, Serialize};

fn default_aggregation_rate() -> usize {
    1
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GeneralExperimentConfig {
    pub name: String,
    /// Number of iterations summed up into one row of the run log.
    #[serde(default = "default_aggregation_rate")]
    pub aggregation_rate: usize,
}
