//! Configuration types for the black hole optimizer.

use serde::{Deserialize, Serialize};

/// Top-level optimizer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Number of stars (candidate solutions) in the population.
    #[serde(default = "default_star_count")]
    pub star_count: usize,
    /// Number of centroids in each star.
    #[serde(default = "default_centroid_count")]
    pub centroid_count: usize,
    /// Number of generations to run.
    #[serde(default = "default_generations")]
    pub generations: usize,
    /// Random seed for reproducibility. Drawn from entropy when unset.
    #[serde(default)]
    pub random_seed: Option<u64>,
    /// Move orbiting stars in parallel.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            star_count: default_star_count(),
            centroid_count: default_centroid_count(),
            generations: default_generations(),
            random_seed: None,
            parallel: default_parallel(),
        }
    }
}

fn default_star_count() -> usize {
    20
}
fn default_centroid_count() -> usize {
    4
}
fn default_generations() -> usize {
    100
}
fn default_parallel() -> bool {
    true
}

impl OptimizerConfig {
    /// Validate configuration parameters that do not depend on the corpus.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.star_count == 0 {
            return Err(ConfigError::InvalidStarCount(self.star_count));
        }
        if self.centroid_count == 0 {
            return Err(ConfigError::InvalidCentroidCount(self.centroid_count));
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("star_count must be at least 1 (got {0})")]
    InvalidStarCount(usize),
    #[error("centroid_count must be at least 1 (got {0})")]
    InvalidCentroidCount(usize),
}
