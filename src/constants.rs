// Hearth Particles Constants - SINGLE SOURCE OF TRUTH
//
// Default tuning for the diorama effects. Presets and config defaults read
// from here; do not scatter magic numbers through the simulation code.

/// Spawn and lifetime defaults shared by every preset
pub mod particle {
    /// Radius scaling the emitter-relative spawn box
    pub const SPAWN_RADIUS: f32 = 0.5;

    /// Spawn box factors (multiplied by SPAWN_RADIUS).
    /// Vertical range sits just under the emitter, biased toward its base.
    pub const SPAWN_MIN_FACTOR: [f32; 3] = [-1.0, -1.0, -1.0];
    pub const SPAWN_MAX_FACTOR: [f32; 3] = [0.5, -0.875, 0.5];

    /// Longest a particle may live (seconds)
    pub const MAX_LIFE: f32 = 1.5;
    /// Lifetime is sampled in [MIN_LIFE_FRACTION, 1.0) * MAX_LIFE
    pub const MIN_LIFE_FRACTION: f32 = 0.25;

    /// Largest base size a particle may spawn with
    pub const MAX_SIZE: f32 = 3.0;
    /// Size is sampled in [MIN_SIZE_FRACTION, 1.0) * MAX_SIZE
    pub const MIN_SIZE_FRACTION: f32 = 0.5;

    /// Rotation rate half-range, radians per tick
    pub const ROTATION_RATE: f32 = 0.005;

    /// Initial upward velocity (units/second)
    pub const INITIAL_VELOCITY: [f32; 3] = [0.0, 1.5, 0.0];

    /// Fraction of velocity removed per second of drag
    pub const DRAG_COEFFICIENT: f32 = 0.1;
}

/// Preset emission rates (particles/second)
pub mod emission {
    pub const FIRE_RATE: f32 = 200.0;
    pub const TREE_LIGHTS_RATE: f32 = 100.0;
}

/// Lifetime curve defaults
pub mod curves {
    /// Normalized age at which alpha peaks
    pub const ALPHA_PEAK: f32 = 0.6;
    /// Color at birth
    pub const START_COLOR: u32 = 0xFFFFFF;
    /// Color at death
    pub const END_COLOR: u32 = 0xFF8080;
}

/// Render-side values the sink needs to reproduce the diorama look
pub mod render {
    /// Half of the vertical field of view used for point scaling (degrees)
    pub const POINT_HALF_FOV_DEGREES: f32 = 30.0;
}

/// Diorama scene layout used by the demo binary
pub mod scene {
    pub const FIRE_EMITTER: [f32; 3] = [0.1, -2.2, -1.6];
    pub const TREE_EMITTER: [f32; 3] = [2.0, -2.2, -1.0];
    pub const CAMERA_POSITION: [f32; 3] = [35.0, 8.0, 36.0];
    /// Fixed frame delta the diorama's render loop feeds every system
    pub const FRAME_DT: f32 = 0.016;
    pub const DEFAULT_FRAMES: u32 = 600;
}
