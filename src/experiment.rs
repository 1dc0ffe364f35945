use csv::Writer;
use std::error::Error;
use std::fmt;
use std::io::Write;

use crate::experiment_config::{ExperimentConfig, ExperimentConfigError};
use crate::metaheuristic::aco::{AcoError, Supervisor};
use crate::metaheuristic::{Aco, Metaheuristic, ProblemInstance, Solution};

/// Outcome of one configured run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentReport {
    pub name: String,
    pub tours: Vec<Solution<usize>>,
    pub lengths: Vec<f64>,
    pub best: Option<(Solution<usize>, f64)>,
}

#[derive(Debug)]
pub enum ExperimentError {
    Config(ExperimentConfigError),
    Aco(AcoError<usize>),
}

impl From<ExperimentConfigError> for ExperimentError {
    fn from(error: ExperimentConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<AcoError<usize>> for ExperimentError {
    fn from(error: AcoError<usize>) -> Self {
        Self::Aco(error)
    }
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(error) => write!(f, "{}", error),
            Self::Aco(error) => write!(f, "{}", error),
        }
    }
}

impl Error for ExperimentError {}

/// Builds the configured graph and runs all iterations, logging to `log` as csv.
/// `on_iteration` is called with the number of finished iterations after each one.
pub fn run_experiment<W, F>(
    config: &ExperimentConfig,
    log: W,
    mut on_iteration: F,
) -> Result<ExperimentReport, ExperimentError>
where
    W: Write,
    F: FnMut(usize),
{
    let graph = config.graph.build()?;
    let params = config.algorithm.aco().params();
    let supervisor = Supervisor::new(config.experiment.aggregation_rate, Writer::from_writer(log));
    let mut aco: Aco<usize, W> = Aco::new(ProblemInstance::new(&graph), params, supervisor)?;

    while aco.iteration() < params.iterations {
        aco.single_iteration()?;
        on_iteration(aco.iteration());
    }

    let best = aco.best_solution().cloned().zip(aco.best_length());
    let (tours, lengths) = aco.finish()?;

    Ok(ExperimentReport {
        name: config.experiment.name.clone(),
        tours,
        lengths,
        best,
    })
}
