use rand::Rng;

use crate::errors::{PsoError, Result};
use crate::swarm::{validate_bounds, Bound, Particle};

// Fixed-size population of particles sharing one search space.
// Particle order is insertion order and never changes.
#[derive(Debug, Clone)]
pub struct Swarm {
    particles: Vec<Particle>,
    bounds: Vec<Bound>,
}

impl Swarm {
    pub fn initialize<R: Rng + ?Sized>(
        num_particles: usize,
        num_dimensions: usize,
        bounds: &[Bound],
        rng: &mut R,
    ) -> Result<Self> {
        if num_particles == 0 {
            return Err(PsoError::invalid("num_particles must be positive"));
        }
        if num_dimensions == 0 {
            return Err(PsoError::invalid("num_dimensions must be positive"));
        }
        validate_bounds(bounds, num_dimensions)?;

        let particles = (0..num_particles)
            .map(|_| Particle::random(bounds, rng))
            .collect();

        Ok(Swarm {
            particles,
            bounds: bounds.to_vec(),
        })
    }

    // Builds a swarm around caller-chosen starting points; velocities are still random.
    pub fn from_positions<R: Rng + ?Sized>(
        positions: Vec<Vec<f64>>,
        bounds: &[Bound],
        rng: &mut R,
    ) -> Result<Self> {
        if positions.is_empty() {
            return Err(PsoError::invalid("num_particles must be positive"));
        }
        if bounds.is_empty() {
            return Err(PsoError::invalid("num_dimensions must be positive"));
        }
        validate_bounds(bounds, bounds.len())?;

        let mut particles = Vec::with_capacity(positions.len());
        for (index, position) in positions.into_iter().enumerate() {
            if position.len() != bounds.len() {
                return Err(PsoError::invalid(format!(
                    "particle {} has {} coordinates, expected {}",
                    index,
                    position.len(),
                    bounds.len()
                )));
            }
            if let Some((dim, value)) = position
                .iter()
                .zip(bounds)
                .enumerate()
                .find(|(_, (x, bound))| !bound.contains(**x))
                .map(|(dim, (x, _))| (dim, *x))
            {
                return Err(PsoError::invalid(format!(
                    "particle {} starts outside bound {}: {}",
                    index, dim, value
                )));
            }

            let velocity = (0..bounds.len())
                .map(|_| rng.gen_range(-1.0..=1.0))
                .collect();
            particles.push(Particle::new(position, velocity));
        }

        Ok(Swarm {
            particles,
            bounds: bounds.to_vec(),
        })
    }

    pub fn particles(&self) -> std::slice::Iter<'_, Particle> {
        self.particles.iter()
    }

    pub(crate) fn particles_mut(&mut self) -> std::slice::IterMut<'_, Particle> {
        self.particles.iter_mut()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particle(&self, index: usize) -> Option<&Particle> {
        self.particles.get(index)
    }

    pub fn bounds(&self) -> &[Bound] {
        &self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.bounds.len()
    }

    // Copy of every particle's current position, in swarm order
    pub fn positions(&self) -> Vec<Vec<f64>> {
        self.particles.iter().map(|p| p.position.clone()).collect()
    }

    // Lowest personal best across the swarm, +inf before any evaluation
    pub fn best_personal_fitness(&self) -> f64 {
        self.particles
            .iter()
            .map(|p| p.best_fitness)
            .fold(f64::INFINITY, f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_initialize_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let bounds = vec![Bound::new(0.0, 1.0), Bound::new(-10.0, -5.0)];
        let swarm = Swarm::initialize(25, 2, &bounds, &mut rng).unwrap();

        assert_eq!(swarm.len(), 25);
        assert_eq!(swarm.dimensions(), 2);
        for particle in swarm.particles() {
            for (x, bound) in particle.position.iter().zip(&bounds) {
                assert!(bound.contains(*x));
            }
            for v in &particle.velocity {
                assert!((-1.0..=1.0).contains(v));
            }
            assert_eq!(particle.best_position, particle.position);
            assert_eq!(particle.best_fitness, f64::INFINITY);
        }
    }

    #[test]
    fn test_initialize_rejects_bad_configuration() {
        let mut rng = StdRng::seed_from_u64(0);
        let bounds = Bound::uniform(2, 0.0, 1.0);

        assert!(Swarm::initialize(0, 2, &bounds, &mut rng).is_err());
        assert!(Swarm::initialize(5, 0, &[], &mut rng).is_err());
        assert!(Swarm::initialize(5, 3, &bounds, &mut rng).is_err());

        let inverted = vec![Bound::new(0.0, 1.0), Bound::new(1.0, 0.0)];
        let err = Swarm::initialize(5, 2, &inverted, &mut rng).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_initialize_rejects_overflowing_bound() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = Swarm::initialize(2, 1, &[Bound::new(-1e308, 1e308)], &mut rng).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_order_is_stable() {
        let mut rng = StdRng::seed_from_u64(3);
        let swarm = Swarm::initialize(10, 3, &Bound::uniform(3, -1.0, 1.0), &mut rng).unwrap();
        let first: Vec<_> = swarm.particles().map(|p| p.position.clone()).collect();
        let second = swarm.positions();
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_seed_same_swarm() {
        let bounds = Bound::uniform(4, -3.0, 3.0);
        let a = Swarm::initialize(8, 4, &bounds, &mut StdRng::seed_from_u64(11)).unwrap();
        let b = Swarm::initialize(8, 4, &bounds, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a.positions(), b.positions());
    }

    #[test]
    fn test_from_positions() {
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = Bound::uniform(2, 0.0, 1.0);
        let swarm =
            Swarm::from_positions(vec![vec![0.0, 0.0], vec![1.0, 0.5]], &bounds, &mut rng).unwrap();
        assert_eq!(swarm.positions(), vec![vec![0.0, 0.0], vec![1.0, 0.5]]);

        assert!(Swarm::from_positions(vec![vec![0.0]], &bounds, &mut rng).is_err());
        assert!(Swarm::from_positions(vec![vec![0.0, 1.5]], &bounds, &mut rng).is_err());
        assert!(Swarm::from_positions(vec![], &bounds, &mut rng).is_err());
    }

    #[test]
    fn test_best_personal_fitness() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut swarm = Swarm::initialize(3, 1, &Bound::uniform(1, 0.0, 1.0), &mut rng).unwrap();
        assert_eq!(swarm.best_personal_fitness(), f64::INFINITY);

        for (fitness, particle) in [4.0, 2.0, 3.0].iter().zip(swarm.particles_mut()) {
            particle.observe(*fitness);
        }
        assert_eq!(swarm.best_personal_fitness(), 2.0);
    }
}
