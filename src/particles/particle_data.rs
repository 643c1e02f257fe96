use crate::constants::render::POINT_HALF_FOV_DEGREES;
use crate::particles::Particle;

/// Floats per exported position
pub const POSITION_COMPONENTS: usize = 3;
/// Floats per exported color (RGB + alpha)
pub const COLOR_COMPONENTS: usize = 4;

/// Flattened per-particle attributes in Structure of Arrays (SOA) layout.
///
/// All four buffers describe the same particles in the same order. They are a
/// snapshot: rebuilt from scratch on every export and never aliased to the
/// live population.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleAttributes {
    /// xyz per particle
    pub positions: Vec<f32>,
    /// One size per particle
    pub sizes: Vec<f32>,
    /// rgba per particle
    pub colors: Vec<f32>,
    /// One rotation angle per particle
    pub angles: Vec<f32>,
}

impl ParticleAttributes {
    /// Number of particles described
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Clear all attribute data
    pub fn clear(&mut self) {
        self.positions.clear();
        self.sizes.clear();
        self.colors.clear();
        self.angles.clear();
    }

    /// Rebuild every buffer from the particles, in slice order
    pub fn export(&mut self, particles: &[Particle]) {
        self.clear();
        self.positions.reserve(particles.len() * POSITION_COMPONENTS);
        self.sizes.reserve(particles.len());
        self.colors.reserve(particles.len() * COLOR_COMPONENTS);
        self.angles.reserve(particles.len());

        for particle in particles {
            self.positions.extend_from_slice(&particle.position.to_array());
            self.sizes.push(particle.current_size);
            self.colors.extend_from_slice(&particle.color.extend(particle.alpha).to_array());
            self.angles.push(particle.rotation);
        }
    }

    /// Raw bytes of the position buffer for GPU upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the size buffer for GPU upload
    pub fn size_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.sizes)
    }

    /// Raw bytes of the color buffer for GPU upload
    pub fn color_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.colors)
    }

    /// Raw bytes of the angle buffer for GPU upload
    pub fn angle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.angles)
    }
}

/// Screen-space scale a point sprite shader applies to exported sizes.
///
/// Matches a projection with a 60 degree vertical field of view; the shader
/// divides by clip-space `w` on top of this.
pub fn point_multiplier(viewport_height: f32) -> f32 {
    viewport_height / (2.0 * POINT_HALF_FOV_DEGREES.to_radians().tan())
}
