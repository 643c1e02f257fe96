//! Seams to the scene host.
//!
//! The engine never holds on to host objects. Each tick it is handed a
//! viewpoint and an emitter to read positions from, and optionally a sink to
//! push the exported attributes into.

use glam::Vec3;

use crate::particles::particle_data::ParticleAttributes;

/// Where the scene is viewed from; read once per tick for depth sorting
pub trait ViewpointProvider {
    fn view_position(&self) -> Vec3;
}

/// Where new particles come from; read once per spawn batch
pub trait EmitterHandle {
    fn emitter_position(&self) -> Vec3;
}

/// Receives the per-tick attribute snapshot for drawing
pub trait RenderSink {
    fn submit(&mut self, system: &str, attributes: &ParticleAttributes);
}

impl ViewpointProvider for Vec3 {
    fn view_position(&self) -> Vec3 {
        *self
    }
}

impl EmitterHandle for Vec3 {
    fn emitter_position(&self) -> Vec3 {
        *self
    }
}

impl<T: ViewpointProvider + ?Sized> ViewpointProvider for &T {
    fn view_position(&self) -> Vec3 {
        (**self).view_position()
    }
}

impl<T: EmitterHandle + ?Sized> EmitterHandle for &T {
    fn emitter_position(&self) -> Vec3 {
        (**self).emitter_position()
    }
}

/// Emitter attached to a parent object, at a fixed offset from it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachedEmitter {
    pub parent: Vec3,
    pub offset: Vec3,
}

impl EmitterHandle for AttachedEmitter {
    fn emitter_position(&self) -> Vec3 {
        self.parent + self.offset
    }
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl RenderSink for NullSink {
    fn submit(&mut self, _system: &str, _attributes: &ParticleAttributes) {}
}
