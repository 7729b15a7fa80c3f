//! Search parameters, loadable from TOML.
//!
//! ```
//! use seat_shuffle::config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     trials = 4
//!     iterations = 2000
//!     random_seed = 42
//! "#).unwrap();
//!
//! assert_eq!(config.trials, 4);
//! assert_eq!(config.random_seed, Some(42));
//! assert!(!config.parallel);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::refine::DEFAULT_ITERATIONS;

pub const DEFAULT_TRIALS: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", default)]
pub struct SolverConfig {
    /// Independent construct-then-refine runs; the best one wins.
    pub trials: usize,

    /// Swap proposals per trial.
    pub iterations: usize,

    /// Seed for the master generator. Drawn from entropy when absent.
    pub random_seed: Option<u64>,

    /// Run trials on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            trials: DEFAULT_TRIALS,
            iterations: DEFAULT_ITERATIONS,
            random_seed: None,
            parallel: false,
        }
    }
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses and validates.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: SolverConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trials == 0 {
            return Err(ConfigError::Invalid("trials must be at least 1".to_string()));
        }
        Ok(())
    }

    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
