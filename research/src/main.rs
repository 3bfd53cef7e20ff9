use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{anyhow, Context};
use psolib::logging;
use psolib::{Optimizer, OptimizationReport};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod config;
mod objectives;
mod report;

use config::RunConfig;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <config>", args[0]);
        std::process::exit(1);
    }

    let config = RunConfig::load(&args[1]).with_context(|| format!("loading {}", args[1]))?;

    // Configure logger
    logging::configure_logger(&config.log_file, logging::parse_level(&config.log_level))
        .map_err(|e| anyhow!("failed to configure logger: {}", e))?;

    // Handle SIGINT; the run stops between iterations and still reports its best
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })?;

    let objective = objectives::lookup(&config.objective)
        .ok_or_else(|| anyhow!("Unknown objective: {}", config.objective))?;

    let rng = match config.seed {
        Some(seed) => {
            log::info!("Seeding generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut optimizer_config = config.optimizer.clone();
    if config.trajectory_output.is_some() {
        optimizer_config.record_trajectory = true;
    }

    log::info!(
        "Minimizing {} with {} particles over {} iterations...",
        config.objective,
        optimizer_config.num_particles,
        optimizer_config.max_iterations
    );
    let mut optimizer = Optimizer::new(optimizer_config, objective, rng)?;

    while !optimizer.is_completed() {
        if !running.load(Ordering::SeqCst) {
            log::warn!(
                "Received SIGINT, stopping after {} of {} iterations",
                optimizer.iteration(),
                optimizer.max_iterations()
            );
            break;
        }

        let snapshot = optimizer.step()?;
        let done = snapshot.iteration + 1;
        if config.progress_every > 0 && done % config.progress_every == 0 {
            log::info!(
                "[{}/{}] Global best fitness: {}",
                done,
                optimizer.max_iterations(),
                snapshot.global_best_fitness
            );
        }
    }

    let result: OptimizationReport = optimizer.into_report();
    log::info!("Global best position: {:?}", result.best_position);
    log::info!("Global best fitness: {}", result.best_fitness);

    if let (Some(trajectory), Some(output)) = (&result.trajectory, &config.trajectory_output) {
        log::info!("Saving {} frames to {}...", trajectory.len(), output);
        report::save_trajectory(trajectory, &result, output)
            .map_err(|e| anyhow!("failed to save trajectory to {}: {}", output, e))?;
    }

    Ok(())
}
