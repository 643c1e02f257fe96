use std::f32::consts::TAU;

use glam::Vec3;

use crate::constants::particle::{MIN_LIFE_FRACTION, MIN_SIZE_FRACTION};
use crate::particles::config::ParticleSystemConfig;
use crate::particles::random::RandomSource;
use crate::particles::Particle;

/// Live particles of one system.
///
/// Order carries no meaning for the simulation; it only matters once the
/// depth sorter has run and the attributes are exported.
#[derive(Debug, Clone, Default)]
pub struct ParticlePopulation {
    particles: Vec<Particle>,
    /// Maximum particles allowed (None = unbounded)
    max_particles: Option<usize>,
    /// Spawns dropped because the ceiling was reached
    dropped: u64,
}

impl ParticlePopulation {
    pub fn new(max_particles: Option<usize>) -> Self {
        Self {
            particles: Vec::new(),
            max_particles,
            dropped: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    pub fn max_particles(&self) -> Option<usize> {
        self.max_particles
    }

    /// Total spawns refused by the ceiling so far
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Room left under the ceiling
    fn available(&self) -> usize {
        self.max_particles
            .map_or(usize::MAX, |max| max.saturating_sub(self.particles.len()))
    }

    /// Add a ready-made particle, returning false if the ceiling refused it
    pub fn push(&mut self, particle: Particle) -> bool {
        if self.available() == 0 {
            self.dropped += 1;
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Apply the ceiling to `count` requested births, returning how many fit.
    ///
    /// Refused births are counted as dropped.
    pub fn admit(&mut self, count: usize) -> usize {
        let admitted = count.min(self.available());
        self.dropped = self.dropped.saturating_add((count - admitted) as u64);
        admitted
    }

    /// Spawn `count` particles around `origin`, returning how many were added
    pub fn spawn(
        &mut self,
        count: usize,
        origin: Vec3,
        config: &ParticleSystemConfig,
        rng: &mut dyn RandomSource,
    ) -> usize {
        let to_add = self.admit(count);

        self.particles.reserve(to_add);
        for _ in 0..to_add {
            self.particles.push(spawn_particle(origin, config, rng));
        }
        to_add
    }

    /// Subtract `dt` from every life and drop the dead, returning how many died.
    ///
    /// Survivors are compacted in place (`retain` overwrites and truncates).
    pub fn age(&mut self, dt: f32) -> usize {
        let before = self.particles.len();
        self.particles.retain_mut(|particle| {
            particle.life -= dt;
            particle.is_alive()
        });
        before - self.particles.len()
    }

    /// Clear all particles
    pub fn clear(&mut self) {
        self.particles.clear();
    }
}

/// Roll one particle inside the configured spawn volume around `origin`
pub fn spawn_particle(
    origin: Vec3,
    config: &ParticleSystemConfig,
    rng: &mut dyn RandomSource,
) -> Particle {
    let position = origin + config.spawn_volume.sample(rng);
    let life = rng.uniform_range(MIN_LIFE_FRACTION, 1.0) * config.max_life;
    let size = rng.uniform_range(MIN_SIZE_FRACTION, 1.0) * config.max_size;

    let mut particle = Particle::new(position, config.initial_velocity, life, size);
    particle.rotation = rng.uniform() * TAU;
    particle.rotation_rate = rng.uniform_range(-config.rotation_rate, config.rotation_rate);
    particle
}
