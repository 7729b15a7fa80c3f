//! Seats the built-in demo class and prints the best grouping found.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use tracing_subscriber::EnvFilter;

use seat_shuffle::prelude::*;

mod roster;

#[derive(Parser)]
#[command(name = "seat-shuffle")]
#[command(about = "Seat a class at tables, honouring preferences and spreading them fairly")]
struct Cli {
    /// Solver configuration file (TOML)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Number of groups
    #[arg(long, default_value_t = 9)]
    groups: usize,

    /// Seats per group
    #[arg(long, default_value_t = 4)]
    capacity: usize,

    /// Independent trials, overrides the config file
    #[arg(long)]
    trials: Option<usize>,

    /// Swap proposals per trial, overrides the config file
    #[arg(long)]
    iterations: Option<usize>,

    /// Random seed, overrides the config file
    #[arg(long)]
    seed: Option<u64>,

    /// Run trials in parallel
    #[arg(long)]
    parallel: bool,

    /// Run trials one after another, overrides `parallel = true` in the config file
    #[arg(long, conflicts_with = "parallel")]
    sequential: bool,

    /// Enable verbose output
    #[arg(long, short)]
    verbose: bool,
}

impl Cli {
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::load(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            None => SolverConfig::default(),
        };
        if let Some(trials) = self.trials {
            config = config.with_trials(trials);
        }
        if let Some(iterations) = self.iterations {
            config = config.with_iterations(iterations);
        }
        if let Some(seed) = self.seed {
            config = config.with_random_seed(seed);
        }
        if self.parallel {
            config = config.with_parallel(true);
        } else if self.sequential {
            config = config.with_parallel(false);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.solver_config()?;
    let roster = roster::demo_roster()?;
    let solution = find_best_grouping(&roster, cli.groups, cli.capacity, config);

    for group in solution.groups(&roster) {
        println!("Table([{}])", group.iter().join(", "));
    }
    let unplaced = solution.unplaced_ids(&roster);
    if !unplaced.is_empty() {
        println!("Unplaced: {}", unplaced.iter().join(", "));
    }
    println!("Best Score: {:.2}", solution.score.score);
    println!("Gini Coefficient: {}", solution.score.gini);
    Ok(())
}
