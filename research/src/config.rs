use std::path::Path;

use psolib::OptimizerConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RunConfig {
    pub optimizer: OptimizerConfig,
    // Name of a registered objective, see objectives::lookup
    pub objective: String,
    // Fixed seed for a reproducible run; entropy otherwise
    #[serde(default)]
    pub seed: Option<u64>,
    // CSV file for the recorded trajectory, skipped when absent
    #[serde(rename = "trajectoryOutput", default)]
    pub trajectory_output: Option<String>,
    #[serde(rename = "logFile", default = "default_log_file")]
    pub log_file: String,
    #[serde(rename = "logLevel", default = "default_log_level")]
    pub log_level: String,
    // Log progress every N iterations, 0 disables
    #[serde(rename = "progressEvery", default = "default_progress_every")]
    pub progress_every: usize,
}

fn default_log_file() -> String {
    "logs/research.log".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_progress_every() -> usize {
    100
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> psolib::Result<Self> {
        let config: RunConfig = psolib::util::load_json(path)?;
        config.optimizer.validate()?;
        Ok(config)
    }
}
