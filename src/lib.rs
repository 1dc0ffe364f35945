pub mod experiment;
pub mod experiment_config;
pub mod graph;
pub mod metaheuristic;
pub mod rng;

pub use metaheuristic::{optimize, optimize_with};
