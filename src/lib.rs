//! # Hearth Particles
//!
//! CPU particle simulation for the Hearth holiday diorama.
//!
//! Each [`ParticleSystem`] owns one emitter's particles. Every frame the host
//! calls [`ParticleSystem::update`] with the elapsed time, the emitter's
//! position and the camera position; the system spawns, ages, moves, depth
//! sorts and finally exports flat attribute buffers ready for a point-sprite
//! renderer. Drawing those buffers is up to the host.
//!
//! ```
//! use glam::Vec3;
//! use hearth_particles::particles::{EffectPreset, ParticleSystem};
//!
//! let mut fire = ParticleSystem::new(EffectPreset::Fire.config())?;
//! let camera = Vec3::new(35.0, 8.0, 36.0);
//! let emitter = Vec3::new(0.1, -2.2, -1.6);
//!
//! let update = fire.update(0.016, &emitter, &camera);
//! assert_eq!(fire.attributes().len(), update.live);
//! # Ok::<(), hearth_particles::ParticleError>(())
//! ```

pub mod constants;
pub mod diorama;
pub mod error;
pub mod particles;

pub use diorama::{DioramaConfig, EffectPlacement};
pub use error::{ParticleError, ParticleResult};
pub use particles::{
    EffectPreset, EffectSet, ParticleAttributes, ParticleSystem, ParticleSystemConfig,
    ParticleUpdate,
};
