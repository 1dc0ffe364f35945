mod algo_config;
mod general_experiment_config;
mod graph_creation_config;

pub use algo_config::{AcoExperiment, AlgoConfig, UnseededAcoExperiment};
pub use general_experiment_config::GeneralExperimentConfig;
pub use graph_creation_config::{EdgeList, FileLoad, GraphCreationConfig, WeightedEdge};

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

/// Turns a partial config into a complete one, e.g. by drawing a random seed.
pub trait Fix<CorrectType> {
    fn to_fixed(&self) -> CorrectType;
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ExperimentConfig {
    pub experiment: GeneralExperimentConfig,
    pub algorithm: AlgoConfig,
    pub graph: GraphCreationConfig,
}

impl ExperimentConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ExperimentConfigError> {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[derive(Debug)]
pub enum ExperimentConfigError {
    Io(io::Error),
    Yaml(serde_yaml::Error),
    Csv(csv::Error),
    InvalidGraphConfig(String),
}

impl From<io::Error> for ExperimentConfigError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl From<serde_yaml::Error> for ExperimentConfigError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::Yaml(error)
    }
}

impl From<csv::Error> for ExperimentConfigError {
    fn from(error: csv::Error) -> Self {
        Self::Csv(error)
    }
}

impl fmt::Display for ExperimentConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "Config could not be read: {}", error),
            Self::Yaml(error) => write!(f, "Config is not valid yaml: {}", error),
            Self::Csv(error) => write!(f, "Edge list could not be read: {}", error),
            Self::InvalidGraphConfig(msg) => write!(f, "Invalid graph config: {}", msg),
        }
    }
}

impl Error for ExperimentConfigError {}
