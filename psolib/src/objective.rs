use std::error::Error;

pub type ObjectiveError = Box<dyn Error + Send + Sync>;

// The function being minimized. Must be pure with respect to the swarm and safe to call
// from several threads when parallel evaluation is enabled.
pub trait Objective: Sync {
    fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError>;
}

// Plain closures never fail; non-finite results are caught by the optimizer.
impl<F> Objective for F
where
    F: Fn(&[f64]) -> f64 + Sync,
{
    fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
        Ok(self(position))
    }
}

// Adapter for objectives that can raise, e.g. ones backed by a simulation that may diverge.
pub struct Fallible<F>(pub F);

impl<F, E> Objective for Fallible<F>
where
    F: Fn(&[f64]) -> Result<f64, E> + Sync,
    E: Into<ObjectiveError>,
{
    fn evaluate(&self, position: &[f64]) -> Result<f64, ObjectiveError> {
        (self.0)(position).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_objective() {
        let sphere = |x: &[f64]| x.iter().map(|xi| xi * xi).sum::<f64>();
        assert_eq!(sphere.evaluate(&[1.0, 2.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_fallible_objective() {
        let objective = Fallible(|x: &[f64]| {
            if x[0] < 0.0 {
                Err("negative input")
            } else {
                Ok(x[0].sqrt())
            }
        });
        assert_eq!(objective.evaluate(&[4.0]).unwrap(), 2.0);

        let err = objective.evaluate(&[-1.0]).unwrap_err();
        assert_eq!(err.to_string(), "negative input");
    }
}
