use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{PsoError, Result};

// Closed interval [lower, upper] for one dimension of the search space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub lower: f64,
    pub upper: f64,
}

impl Bound {
    pub fn new(lower: f64, upper: f64) -> Self {
        Bound { lower, upper }
    }

    // Same interval repeated for every dimension
    pub fn uniform(num_dimensions: usize, lower: f64, upper: f64) -> Vec<Bound> {
        vec![Bound::new(lower, upper); num_dimensions]
    }

    pub fn validate(&self, index: usize) -> Result<()> {
        if !self.lower.is_finite() || !self.upper.is_finite() {
            return Err(PsoError::invalid(format!(
                "bound {} is not finite: [{}, {}]",
                index, self.lower, self.upper
            )));
        }
        if self.lower >= self.upper {
            return Err(PsoError::invalid(format!(
                "bound {} has lower >= upper: [{}, {}]",
                index, self.lower, self.upper
            )));
        }
        // The width must fit in an f64 for uniform sampling
        if !(self.upper - self.lower).is_finite() {
            return Err(PsoError::invalid(format!(
                "bound {} is too wide: [{}, {}]",
                index, self.lower, self.upper
            )));
        }
        Ok(())
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.lower).min(self.upper)
    }

    pub fn midpoint(&self) -> f64 {
        0.5 * self.lower + 0.5 * self.upper
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.lower..=self.upper)
    }
}

// Checks the whole bounds list against the expected dimensionality.
pub fn validate_bounds(bounds: &[Bound], num_dimensions: usize) -> Result<()> {
    if bounds.len() != num_dimensions {
        return Err(PsoError::invalid(format!(
            "expected {} bounds, got {}",
            num_dimensions,
            bounds.len()
        )));
    }
    for (i, bound) in bounds.iter().enumerate() {
        bound.validate(i)?;
    }
    Ok(())
}
