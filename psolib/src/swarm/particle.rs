use rand::Rng;

use crate::swarm::Bound;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec<f64>,
    pub velocity: Vec<f64>,
    pub best_position: Vec<f64>,
    pub best_fitness: f64,
}

impl Particle {
    pub fn new(position: Vec<f64>, velocity: Vec<f64>) -> Self {
        Particle {
            best_position: position.clone(),
            position,
            velocity,
            best_fitness: f64::INFINITY,
        }
    }

    // Uniform position inside the bounds, uniform velocity in [-1, 1] per dimension
    pub fn random<R: Rng + ?Sized>(bounds: &[Bound], rng: &mut R) -> Self {
        let mut position = Vec::with_capacity(bounds.len());
        let mut velocity = Vec::with_capacity(bounds.len());
        for bound in bounds {
            position.push(bound.sample(rng));
            velocity.push(rng.gen_range(-1.0..=1.0));
        }
        Particle::new(position, velocity)
    }

    pub fn dimensions(&self) -> usize {
        self.position.len()
    }

    // Records a fitness for the current position. Returns true if the personal best improved.
    // Strict comparison: an equal fitness keeps the older best position.
    pub fn observe(&mut self, fitness: f64) -> bool {
        if fitness < self.best_fitness {
            self.best_fitness = fitness;
            self.best_position.clone_from(&self.position);
            return true;
        }
        false
    }
}
