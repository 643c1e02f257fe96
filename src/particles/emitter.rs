use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::particle::{SPAWN_MAX_FACTOR, SPAWN_MIN_FACTOR, SPAWN_RADIUS};
use crate::error::{ParticleError, ParticleResult};
use crate::particles::random::RandomSource;

/// Emitter-relative box particles spawn inside.
///
/// Bounds are per axis and need not be symmetric around the emitter, which
/// lets the default volume hug the emitter's base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnVolume {
    pub min: Vec3,
    pub max: Vec3,
}

impl SpawnVolume {
    /// Symmetric box with the given half extents
    pub fn centered(half_extents: Vec3) -> Self {
        Self {
            min: -half_extents,
            max: half_extents,
        }
    }

    /// Default diorama volume scaled by `radius`
    pub fn from_radius(radius: f32) -> Self {
        Self {
            min: Vec3::from_array(SPAWN_MIN_FACTOR) * radius,
            max: Vec3::from_array(SPAWN_MAX_FACTOR) * radius,
        }
    }

    /// Single point at the emitter
    pub fn point() -> Self {
        Self {
            min: Vec3::ZERO,
            max: Vec3::ZERO,
        }
    }

    pub fn validate(&self) -> ParticleResult<()> {
        for (axis, (min, max)) in ['x', 'y', 'z']
            .into_iter()
            .zip(self.min.to_array().into_iter().zip(self.max.to_array()))
        {
            if !min.is_finite() || !max.is_finite() || min > max {
                return Err(ParticleError::InvalidSpawnVolume { axis });
            }
        }
        Ok(())
    }

    /// Uniform offset inside the box
    pub fn sample(&self, rng: &mut dyn RandomSource) -> Vec3 {
        Vec3::new(
            rng.uniform_range(self.min.x, self.max.x),
            rng.uniform_range(self.min.y, self.max.y),
            rng.uniform_range(self.min.z, self.max.z),
        )
    }

    pub fn contains(&self, offset: Vec3) -> bool {
        offset.cmpge(self.min).all() && offset.cmple(self.max).all()
    }
}

impl Default for SpawnVolume {
    fn default() -> Self {
        Self::from_radius(SPAWN_RADIUS)
    }
}

/// Turns a continuous emission rate into whole particles per tick.
///
/// Time that does not yet add up to a full particle is carried to the next
/// tick, so the total spawned never drifts from `rate * elapsed` by more than
/// one particle regardless of how the frames are sliced.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionController {
    /// Particles per second
    rate: f32,
    /// Owed emission time (seconds), kept in f64 so long runs do not drift
    accumulator: f64,
}

impl EmissionController {
    pub fn new(rate: f32) -> Self {
        debug_assert!(rate >= 0.0, "emission rate must not be negative");
        Self {
            rate: rate.max(0.0),
            accumulator: 0.0,
        }
    }

    pub fn rate(&self) -> f32 {
        self.rate
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Advance by `dt` seconds and return how many particles are due
    pub fn tick(&mut self, dt: f32) -> usize {
        if self.rate <= 0.0 {
            return 0;
        }

        let rate = f64::from(self.rate);
        let owed = self.accumulator + f64::from(dt.max(0.0));
        let particles = owed * rate;
        let count = particles.floor().max(0.0);
        // Only the fractional particle is carried, however large the frame was
        self.accumulator = ((particles - count) / rate).max(0.0);
        if count >= usize::MAX as f64 {
            usize::MAX
        } else {
            count as usize
        }
    }

    /// Forget any owed emission time
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
