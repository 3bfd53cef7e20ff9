use thiserror::Error;

// Every failure the optimizer can report. Nothing is retried internally; the caller decides.
#[derive(Debug, Error)]
pub enum PsoError {
    // Bad counts, bounds or hyperparameters. Raised before any iteration runs.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    // The objective raised an error or returned a non-finite value.
    #[error("objective evaluation failed for particle {particle} at iteration {iteration}: {reason}")]
    ObjectiveEvaluation {
        iteration: usize,
        particle: usize,
        reason: String,
    },

    #[error("optimizer already completed all {max_iterations} iterations")]
    AlreadyCompleted { max_iterations: usize },

    #[error("optimizer run failed earlier and cannot continue")]
    RunFailed,

    // The configuration file could not be read or parsed.
    #[error("failed to load configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PsoError>;

impl PsoError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        PsoError::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            PsoError::InvalidConfiguration { .. } | PsoError::Config(_)
        )
    }

    pub fn is_evaluation_error(&self) -> bool {
        matches!(self, PsoError::ObjectiveEvaluation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PsoError::ObjectiveEvaluation {
            iteration: 3,
            particle: 7,
            reason: "returned NaN".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "objective evaluation failed for particle 7 at iteration 3: returned NaN"
        );

        let err = PsoError::AlreadyCompleted { max_iterations: 10 };
        assert_eq!(
            err.to_string(),
            "optimizer already completed all 10 iterations"
        );
    }

    #[test]
    fn test_error_categories() {
        let config_err = PsoError::invalid("num_particles must be positive");
        let eval_err = PsoError::ObjectiveEvaluation {
            iteration: 0,
            particle: 0,
            reason: "returned inf".to_string(),
        };

        assert!(config_err.is_config_error());
        assert!(!config_err.is_evaluation_error());
        assert!(eval_err.is_evaluation_error());
        assert!(!eval_err.is_config_error());
        assert!(PsoError::Config("missing file".to_string()).is_config_error());
        assert!(!PsoError::RunFailed.is_config_error());
    }
}
