pub mod errors;
pub use errors::{PsoError, Result};

pub mod logging;

pub mod objective;
pub use objective::{Fallible, Objective};

pub mod optimizer;
pub use optimizer::{
    EvaluationMode, Frame, Hyperparameters, IterationSnapshot, OptimizationReport, Optimizer,
    OptimizerConfig, OptimizerState, Trajectory,
};

pub mod swarm;
pub use swarm::{Bound, Particle, Swarm};

pub mod util;
