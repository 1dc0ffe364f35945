use aco_tsp::experiment::run_experiment;
use aco_tsp::experiment_config::ExperimentConfig;

use indicatif::{ProgressBar, ProgressStyle};
use std::env;
use std::error::Error;
use std::fs::File;
use std::process;

fn run(config_path: &str, log_path: &str) -> Result<(), Box<dyn Error>> {
    let config = ExperimentConfig::from_file(config_path)?;
    let log = File::create(log_path)?;

    let progress = ProgressBar::new(config.algorithm.aco().iterations as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{elapsed_precise}] {bar:40} {pos}/{len} iterations"),
    );
    progress.set_message(&config.experiment.name);

    let report = run_experiment(&config, log, |_| progress.inc(1))?;
    progress.finish();

    for (i, (tour, length)) in report.tours.iter().zip(report.lengths.iter()).enumerate() {
        println!("ant {}: {} (length {})", i + 1, tour, length);
    }
    if let Some((tour, length)) = report.best {
        println!("best: {} (length {})", tour, length);
    }

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <config.yaml> <log.csv>", args[0]);
        process::exit(2);
    }

    if let Err(error) = run(&args[1], &args[2]) {
        eprintln!("{}", error);
        process::exit(1);
    }
}
