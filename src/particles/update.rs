use glam::Vec3;

use crate::particles::curves::LifetimeCurves;
use crate::particles::Particle;

/// Advance every live particle by `dt` seconds.
///
/// Aging and culling must already have happened; this only touches survivors.
pub fn integrate_particles(
    particles: &mut [Particle],
    curves: &LifetimeCurves,
    dt: f32,
    drag_coefficient: f32,
) {
    for particle in particles {
        update_rotation(particle);
        particle.apply_curves(curves);
        integrate_motion(particle, dt, drag_coefficient);
    }
}

/// Rotation advances by a fixed amount per tick
pub fn update_rotation(particle: &mut Particle) {
    particle.rotation += particle.rotation_rate;
}

/// Move by the current velocity, then slow it down
pub fn integrate_motion(particle: &mut Particle, dt: f32, drag_coefficient: f32) {
    particle.position += particle.velocity * dt;
    particle.velocity -= clamped_drag(particle.velocity, dt, drag_coefficient);
}

/// Velocity loss for this step, never larger than the velocity itself on any axis.
///
/// Plain linear drag overshoots once `dt * drag_coefficient > 1` and flips the
/// direction of travel; clamping per axis makes each component decay toward
/// zero without crossing it.
pub fn clamped_drag(velocity: Vec3, dt: f32, drag_coefficient: f32) -> Vec3 {
    let drag = velocity * dt * drag_coefficient;
    velocity.signum() * drag.abs().min(velocity.abs())
}
