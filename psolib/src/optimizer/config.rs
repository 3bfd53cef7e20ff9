use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PsoError, Result};
use crate::optimizer::Hyperparameters;
use crate::swarm::{validate_bounds, Bound};
use crate::util;

// How fitness values are computed during the evaluation phase.
// Both modes apply best updates sequentially in swarm order, so results are identical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationMode {
    #[default]
    Sequential,
    Parallel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    #[serde(rename = "numParticles")]
    pub num_particles: usize,
    #[serde(rename = "numDimensions")]
    pub num_dimensions: usize,
    pub bounds: Vec<Bound>,
    #[serde(rename = "maxIterations")]
    pub max_iterations: usize,
    #[serde(default)]
    pub hyperparameters: Hyperparameters,
    #[serde(rename = "recordTrajectory", default)]
    pub record_trajectory: bool,
    #[serde(default)]
    pub evaluation: EvaluationMode,
}

impl OptimizerConfig {
    pub fn new(num_particles: usize, bounds: Vec<Bound>, max_iterations: usize) -> Self {
        OptimizerConfig {
            num_particles,
            num_dimensions: bounds.len(),
            bounds,
            max_iterations,
            hyperparameters: Hyperparameters::default(),
            record_trajectory: false,
            evaluation: EvaluationMode::Sequential,
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config: OptimizerConfig = util::load_json(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_hyperparameters(mut self, hyperparameters: Hyperparameters) -> Self {
        self.hyperparameters = hyperparameters;
        self
    }

    pub fn with_trajectory(mut self, record: bool) -> Self {
        self.record_trajectory = record;
        self
    }

    pub fn with_evaluation(mut self, evaluation: EvaluationMode) -> Self {
        self.evaluation = evaluation;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_particles == 0 {
            return Err(PsoError::invalid("num_particles must be positive"));
        }
        if self.num_dimensions == 0 {
            return Err(PsoError::invalid("num_dimensions must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(PsoError::invalid("max_iterations must be positive"));
        }
        validate_bounds(&self.bounds, self.num_dimensions)?;
        self.hyperparameters.validate()
    }
}
