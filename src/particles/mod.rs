pub mod config;
pub mod curves;
pub mod effects;
pub mod emitter;
pub mod host;
pub mod particle;
pub mod particle_data;
pub mod particle_system;
pub mod population;
pub mod random;
pub mod sort;
pub mod spline;
pub mod update;

pub use config::{ConfigFormat, ParticleSystemConfig};
pub use curves::{color_from_hex, CurveSetConfig, LifetimeCurves};
pub use effects::{EffectId, EffectPreset, EffectSet, EffectSetUpdate};
pub use emitter::{EmissionController, SpawnVolume};
pub use host::{AttachedEmitter, EmitterHandle, NullSink, RenderSink, ViewpointProvider};
pub use particle::Particle;
pub use particle_data::{point_multiplier, ParticleAttributes};
pub use particle_system::{ParticleSystem, ParticleSystemStats, ParticleUpdate};
pub use population::ParticlePopulation;
pub use random::{RandomSource, SequenceRandom};
pub use spline::{ControlPoint, Interpolate, LinearSpline};
