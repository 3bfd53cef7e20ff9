use rand::Rng;
use rayon::prelude::*;

use crate::errors::{PsoError, Result};
use crate::objective::{Objective, ObjectiveError};
use crate::optimizer::update::update_particle;
use crate::optimizer::{
    EvaluationMode, Hyperparameters, IterationSnapshot, OptimizationReport, OptimizerConfig,
    Trajectory,
};
use crate::swarm::Swarm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerState {
    // Swarm initialized, no iteration run yet
    Created,
    Running,
    // All max_iterations iterations ran
    Completed,
    // The objective failed; the run cannot continue
    Failed,
}

// Drives the swarm for a fixed number of iterations and tracks the global best.
//
// Each call to `step` runs one iteration in this order:
// 1. copy the start-of-iteration positions (the snapshot frame),
// 2. evaluate every particle and update personal and global bests in swarm order,
// 3. move every particle using the bests from step 2.
pub struct Optimizer<O, R> {
    config: OptimizerConfig,
    swarm: Swarm,
    objective: O,
    rng: R,

    global_best_position: Vec<f64>,
    global_best_fitness: f64,

    iteration: usize,
    state: OptimizerState,
    trajectory: Option<Trajectory>,
}

impl<O: Objective, R: Rng> Optimizer<O, R> {
    pub fn new(config: OptimizerConfig, objective: O, mut rng: R) -> Result<Self> {
        config.validate()?;
        let swarm = Swarm::initialize(
            config.num_particles,
            config.num_dimensions,
            &config.bounds,
            &mut rng,
        )?;
        Ok(Self::assemble(config, swarm, objective, rng))
    }

    // Uses a swarm built by the caller, e.g. with fixed starting positions.
    pub fn with_swarm(config: OptimizerConfig, swarm: Swarm, objective: O, rng: R) -> Result<Self> {
        config.validate()?;
        if swarm.len() != config.num_particles {
            return Err(PsoError::invalid(format!(
                "swarm has {} particles, configuration expects {}",
                swarm.len(),
                config.num_particles
            )));
        }
        if swarm.bounds() != config.bounds.as_slice() {
            return Err(PsoError::invalid(
                "swarm bounds differ from configured bounds",
            ));
        }
        let dimensions = config.bounds.len();
        if let Some(index) = swarm.particles().position(|p| {
            p.position.len() != dimensions
                || p.velocity.len() != dimensions
                || p.best_position.len() != dimensions
        }) {
            return Err(PsoError::invalid(format!(
                "particle {} does not have {} dimensions",
                index, dimensions
            )));
        }
        Ok(Self::assemble(config, swarm, objective, rng))
    }

    fn assemble(config: OptimizerConfig, swarm: Swarm, objective: O, rng: R) -> Self {
        let global_best_position = config.bounds.iter().map(|b| b.midpoint()).collect();
        let trajectory = if config.record_trajectory {
            Some(Trajectory::with_capacity(config.max_iterations))
        } else {
            None
        };

        log::debug!(
            "Initialized swarm of {} particles in {} dimensions ({} iterations, {:?} evaluation)",
            config.num_particles,
            config.num_dimensions,
            config.max_iterations,
            config.evaluation
        );

        Optimizer {
            config,
            swarm,
            objective,
            rng,
            global_best_position,
            global_best_fitness: f64::INFINITY,
            iteration: 0,
            state: OptimizerState::Created,
            trajectory,
        }
    }

    pub fn step(&mut self) -> Result<IterationSnapshot> {
        match self.state {
            OptimizerState::Completed => {
                return Err(PsoError::AlreadyCompleted {
                    max_iterations: self.config.max_iterations,
                })
            }
            OptimizerState::Failed => return Err(PsoError::RunFailed),
            OptimizerState::Created | OptimizerState::Running => {}
        }
        self.state = OptimizerState::Running;

        let iteration = self.iteration;
        let frame = self.swarm.positions();

        // Nothing is touched unless every particle produced a finite fitness
        let fitnesses = match self.evaluate(iteration) {
            Ok(fitnesses) => fitnesses,
            Err(e) => {
                self.state = OptimizerState::Failed;
                return Err(e);
            }
        };
        let improved = self.accumulate(&fitnesses);

        if improved {
            log::debug!(
                "Iteration {}: global best {} at {:?}",
                iteration,
                self.global_best_fitness,
                self.global_best_position
            );
        }

        if let Some(trajectory) = self.trajectory.as_mut() {
            trajectory.push(frame.clone());
        }

        for particle in self.swarm.particles_mut() {
            update_particle(
                particle,
                &self.global_best_position,
                &self.config.bounds,
                &self.config.hyperparameters,
                &mut self.rng,
            );
        }

        self.iteration += 1;
        if self.iteration == self.config.max_iterations {
            self.state = OptimizerState::Completed;
            log::info!(
                "Optimization finished in {} iterations, global best fitness: {}",
                self.iteration,
                self.global_best_fitness
            );
        }

        Ok(IterationSnapshot {
            iteration,
            positions: frame,
            global_best_position: self.global_best_position.clone(),
            global_best_fitness: self.global_best_fitness,
            improved,
        })
    }

    pub fn run_to_completion(mut self) -> Result<OptimizationReport> {
        while self.state != OptimizerState::Completed {
            self.step()?;
        }
        Ok(self.into_report())
    }

    // Fitness of every particle in swarm order, or the first failure in swarm order.
    fn evaluate(&self, iteration: usize) -> Result<Vec<f64>> {
        let objective = &self.objective;
        let raw: Vec<std::result::Result<f64, ObjectiveError>> = match self.config.evaluation {
            EvaluationMode::Sequential => self
                .swarm
                .particles()
                .map(|p| objective.evaluate(&p.position))
                .collect(),
            EvaluationMode::Parallel => self
                .swarm
                .as_slice()
                .par_iter()
                .map(|p| objective.evaluate(&p.position))
                .collect(),
        };

        raw.into_iter()
            .enumerate()
            .map(|(particle, result)| match result {
                Ok(fitness) if fitness.is_finite() => Ok(fitness),
                Ok(fitness) => Err(PsoError::ObjectiveEvaluation {
                    iteration,
                    particle,
                    reason: format!("returned non-finite value {}", fitness),
                }),
                Err(e) => Err(PsoError::ObjectiveEvaluation {
                    iteration,
                    particle,
                    reason: e.to_string(),
                }),
            })
            .collect()
    }

    // Single sequential pass so that ties always resolve to the earliest particle.
    fn accumulate(&mut self, fitnesses: &[f64]) -> bool {
        let mut improved = false;
        for (particle, &fitness) in self.swarm.particles_mut().zip(fitnesses) {
            particle.observe(fitness);
            if fitness < self.global_best_fitness {
                self.global_best_fitness = fitness;
                self.global_best_position.clone_from(&particle.position);
                improved = true;
            }
        }
        improved
    }
}

impl<O, R> Optimizer<O, R> {
    pub fn state(&self) -> OptimizerState {
        self.state
    }

    pub fn is_completed(&self) -> bool {
        self.state == OptimizerState::Completed
    }

    // Number of iterations completed so far
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations
    }

    pub fn hyperparameters(&self) -> &Hyperparameters {
        &self.config.hyperparameters
    }

    pub fn swarm(&self) -> &Swarm {
        &self.swarm
    }

    pub fn global_best_position(&self) -> &[f64] {
        &self.global_best_position
    }

    pub fn global_best_fitness(&self) -> f64 {
        self.global_best_fitness
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    // Best solution found so far; usable after an early stop.
    pub fn report(&self) -> OptimizationReport {
        OptimizationReport {
            best_position: self.global_best_position.clone(),
            best_fitness: self.global_best_fitness,
            iterations: self.iteration,
            trajectory: self.trajectory.clone(),
        }
    }

    pub fn into_report(self) -> OptimizationReport {
        OptimizationReport {
            best_position: self.global_best_position,
            best_fitness: self.global_best_fitness,
            iterations: self.iteration,
            trajectory: self.trajectory,
        }
    }
}
