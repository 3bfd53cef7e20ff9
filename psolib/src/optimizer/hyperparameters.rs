use serde::{Deserialize, Serialize};

use crate::errors::{PsoError, Result};

// Weights of the velocity update, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    #[serde(rename = "inertiaWeight", default = "default_inertia")]
    pub inertia_weight: f64,
    #[serde(rename = "cognitiveWeight", default = "default_cognitive")]
    pub cognitive_weight: f64,
    #[serde(rename = "socialWeight", default = "default_social")]
    pub social_weight: f64,
}

fn default_inertia() -> f64 {
    0.3
}

fn default_cognitive() -> f64 {
    1.2
}

fn default_social() -> f64 {
    1.2
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Hyperparameters {
            inertia_weight: default_inertia(),
            cognitive_weight: default_cognitive(),
            social_weight: default_social(),
        }
    }
}

impl Hyperparameters {
    pub fn new(inertia_weight: f64, cognitive_weight: f64, social_weight: f64) -> Self {
        Hyperparameters {
            inertia_weight,
            cognitive_weight,
            social_weight,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let weights = [
            ("inertia_weight", self.inertia_weight),
            ("cognitive_weight", self.cognitive_weight),
            ("social_weight", self.social_weight),
        ];
        for (name, value) in weights {
            if !value.is_finite() {
                return Err(PsoError::invalid(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}
