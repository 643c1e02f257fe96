use std::cmp::Ordering;

use glam::Vec3;

use crate::particles::Particle;

/// Sort particles back-to-front relative to `viewpoint` (farthest first).
///
/// The render sink draws in array order without its own transparency sort,
/// so this order is what makes alpha blending come out right.
pub fn sort_back_to_front(particles: &mut [Particle], viewpoint: Vec3) {
    particles.sort_unstable_by(|a, b| {
        let da = a.position.distance_squared(viewpoint);
        let db = b.position.distance_squared(viewpoint);
        db.partial_cmp(&da).unwrap_or(Ordering::Equal)
    });
}

/// True when every particle is at least as far as the one after it
pub fn is_back_to_front(particles: &[Particle], viewpoint: Vec3) -> bool {
    particles.windows(2).all(|pair| {
        pair[0].position.distance_squared(viewpoint) >= pair[1].position.distance_squared(viewpoint)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn particle_at(position: Vec3) -> Particle {
        Particle::new(position, Vec3::ZERO, 1.0, 1.0)
    }

    #[test]
    fn test_farthest_first() {
        let mut particles = vec![
            particle_at(Vec3::new(1.0, 0.0, 0.0)),
            particle_at(Vec3::new(5.0, 0.0, 0.0)),
            particle_at(Vec3::new(-3.0, 0.0, 0.0)),
        ];
        sort_back_to_front(&mut particles, Vec3::ZERO);

        let xs: Vec<f32> = particles.iter().map(|p| p.position.x).collect();
        assert_eq!(xs, vec![5.0, -3.0, 1.0]);
    }

    #[test]
    fn test_random_cloud_sorted_from_moving_viewpoint() {
        let mut rng = StdRng::seed_from_u64(99);
        let mut particles: Vec<Particle> = (0..500)
            .map(|_| {
                particle_at(Vec3::new(
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                    rng.gen_range(-10.0..10.0),
                ))
            })
            .collect();

        for viewpoint in [Vec3::new(35.0, 8.0, 36.0), Vec3::ZERO, Vec3::new(-4.0, 2.0, 9.0)] {
            sort_back_to_front(&mut particles, viewpoint);
            assert!(is_back_to_front(&particles, viewpoint));
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut particles: Vec<Particle> = Vec::new();
        sort_back_to_front(&mut particles, Vec3::ONE);
        assert!(is_back_to_front(&particles, Vec3::ONE));

        let mut particles = vec![particle_at(Vec3::X)];
        sort_back_to_front(&mut particles, Vec3::ONE);
        assert_eq!(particles.len(), 1);
    }
}
