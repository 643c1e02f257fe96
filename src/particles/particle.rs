use glam::Vec3;

use crate::particles::curves::LifetimeCurves;

/// Individual particle owned by a [`ParticlePopulation`](crate::particles::ParticlePopulation)
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position in world space
    pub position: Vec3,
    /// Velocity (units/second)
    pub velocity: Vec3,
    /// Size rolled at spawn
    pub base_size: f32,
    /// Size after applying the size curve
    pub current_size: f32,
    /// RGB color
    pub color: Vec3,
    /// Opacity
    pub alpha: f32,
    /// Remaining lifetime (seconds)
    pub life: f32,
    /// Lifetime rolled at spawn
    pub max_life: f32,
    /// Rotation angle (radians)
    pub rotation: f32,
    /// Rotation added every tick (radians)
    pub rotation_rate: f32,
}

impl Particle {
    /// Create a particle with default appearance
    pub fn new(position: Vec3, velocity: Vec3, life: f32, base_size: f32) -> Self {
        Self {
            position,
            velocity,
            base_size,
            current_size: 0.0,
            color: Vec3::ONE,
            alpha: 1.0,
            life,
            max_life: life,
            rotation: 0.0,
            rotation_rate: 0.0,
        }
    }

    /// Check if particle is alive
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }

    /// Normalized age: 0 at birth, 1 at death
    pub fn age(&self) -> f32 {
        if self.max_life <= 0.0 {
            return 1.0;
        }
        (1.0 - self.life / self.max_life).clamp(0.0, 1.0)
    }

    /// Recompute alpha, size and color from the lifetime curves
    pub fn apply_curves(&mut self, curves: &LifetimeCurves) {
        let t = self.age();
        self.alpha = curves.alpha.value_at(t);
        self.current_size = self.base_size * curves.size.value_at(t);
        self.color = curves.color.value_at(t);
    }
}
