use rand::Rng;

use crate::optimizer::Hyperparameters;
use crate::swarm::{Bound, Particle};

// Moves one particle:
//   v = w*v + c1*r1*(pbest - x) + c2*r2*(gbest - x)
//   x = clamp(x + v)
// r1 and r2 are drawn fresh for every dimension, r1 first. Velocity is never clamped.
pub fn update_particle<R: Rng + ?Sized>(
    particle: &mut Particle,
    global_best_position: &[f64],
    bounds: &[Bound],
    hyperparameters: &Hyperparameters,
    rng: &mut R,
) {
    let Hyperparameters {
        inertia_weight,
        cognitive_weight,
        social_weight,
    } = *hyperparameters;

    for i in 0..particle.position.len() {
        let r1: f64 = rng.gen();
        let r2: f64 = rng.gen();

        let x = particle.position[i];
        particle.velocity[i] = inertia_weight * particle.velocity[i]
            + cognitive_weight * r1 * (particle.best_position[i] - x)
            + social_weight * r2 * (global_best_position[i] - x);

        particle.position[i] = bounds[i].clamp(x + particle.velocity[i]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_weights_stop_particle() {
        let mut rng = StdRng::seed_from_u64(9);
        let bounds = Bound::uniform(2, -5.0, 5.0);
        let mut particle = Particle::new(vec![1.0, -1.0], vec![0.8, -0.3]);
        let hp = Hyperparameters::new(0.0, 0.0, 0.0);

        update_particle(&mut particle, &[0.0, 0.0], &bounds, &hp, &mut rng);
        assert_eq!(particle.velocity, vec![0.0, 0.0]);
        assert_eq!(particle.position, vec![1.0, -1.0]);
    }

    #[test]
    fn test_inertia_only_keeps_direction() {
        let mut rng = StdRng::seed_from_u64(9);
        let bounds = Bound::uniform(1, -10.0, 10.0);
        let mut particle = Particle::new(vec![0.0], vec![1.0]);
        let hp = Hyperparameters::new(0.5, 0.0, 0.0);

        update_particle(&mut particle, &[3.0], &bounds, &hp, &mut rng);
        assert_relative_eq!(particle.velocity[0], 0.5);
        assert_relative_eq!(particle.position[0], 0.5);
    }

    #[test]
    fn test_matches_formula_with_same_draws() {
        let seed = 21;
        let bounds = Bound::uniform(2, -100.0, 100.0);
        let hp = Hyperparameters::new(0.3, 1.2, 1.2);
        let global_best = [2.0, -2.0];

        let mut particle = Particle::new(vec![1.0, 1.0], vec![0.25, -0.25]);
        particle.best_position = vec![0.0, 3.0];
        let expected_particle = particle.clone();

        update_particle(
            &mut particle,
            &global_best,
            &bounds,
            &hp,
            &mut StdRng::seed_from_u64(seed),
        );

        let mut rng = StdRng::seed_from_u64(seed);
        for i in 0..2 {
            let r1: f64 = rng.gen();
            let r2: f64 = rng.gen();
            let x = expected_particle.position[i];
            let v = 0.3 * expected_particle.velocity[i]
                + 1.2 * r1 * (expected_particle.best_position[i] - x)
                + 1.2 * r2 * (global_best[i] - x);
            assert_eq!(particle.velocity[i], v);
            assert_eq!(particle.position[i], x + v);
        }
    }

    #[test]
    fn test_position_clamped_velocity_not() {
        let mut rng = StdRng::seed_from_u64(1);
        let bounds = Bound::uniform(1, 0.0, 1.0);
        let mut particle = Particle::new(vec![0.9], vec![5.0]);
        let hp = Hyperparameters::new(1.0, 0.0, 0.0);

        update_particle(&mut particle, &[0.9], &bounds, &hp, &mut rng);
        assert_eq!(particle.position[0], 1.0);
        assert_eq!(particle.velocity[0], 5.0);
    }
}
