use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::curves::{ALPHA_PEAK, END_COLOR, START_COLOR};
use crate::error::{ParticleError, ParticleResult};
use crate::particles::spline::{ControlPoint, LinearSpline};

/// Convert a `0xRRGGBB` literal into an RGB vector in `[0, 1]`
pub fn color_from_hex(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xFF) as f32 / 255.0,
        ((hex >> 8) & 0xFF) as f32 / 255.0,
        (hex & 0xFF) as f32 / 255.0,
    )
}

/// Control points for the three over-life curves, as they appear in config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveSetConfig {
    pub alpha: Vec<ControlPoint<f32>>,
    pub size: Vec<ControlPoint<f32>>,
    pub color: Vec<ControlPoint<Vec3>>,
}

impl Default for CurveSetConfig {
    /// Fade in to full opacity at 60% of life then out, grow over the whole
    /// life, shift from white to a warm tint.
    fn default() -> Self {
        Self {
            alpha: vec![
                ControlPoint::new(0.0, 0.0),
                ControlPoint::new(ALPHA_PEAK, 1.0),
                ControlPoint::new(1.0, 0.0),
            ],
            size: vec![ControlPoint::new(0.0, 0.0), ControlPoint::new(1.0, 1.0)],
            color: vec![
                ControlPoint::new(0.0, color_from_hex(START_COLOR)),
                ControlPoint::new(1.0, color_from_hex(END_COLOR)),
            ],
        }
    }
}

impl CurveSetConfig {
    pub fn validate(&self) -> ParticleResult<()> {
        if self.alpha.is_empty() {
            return Err(ParticleError::EmptyCurve { curve: "alpha" });
        }
        if self.size.is_empty() {
            return Err(ParticleError::EmptyCurve { curve: "size" });
        }
        if self.color.is_empty() {
            return Err(ParticleError::EmptyCurve { curve: "color" });
        }
        Ok(())
    }
}

/// Evaluated splines driving a particle's appearance by normalized age
#[derive(Debug, Clone, PartialEq)]
pub struct LifetimeCurves {
    pub alpha: LinearSpline<f32>,
    pub size: LinearSpline<f32>,
    pub color: LinearSpline<Vec3>,
}

impl LifetimeCurves {
    /// Build splines from configured control points
    pub fn from_config(config: &CurveSetConfig) -> ParticleResult<Self> {
        config.validate()?;
        Ok(Self {
            alpha: LinearSpline::from_points(&config.alpha),
            size: LinearSpline::from_points(&config.size),
            color: LinearSpline::from_points(&config.color),
        })
    }
}

impl Default for LifetimeCurves {
    fn default() -> Self {
        let config = CurveSetConfig::default();
        Self {
            alpha: LinearSpline::from_points(&config.alpha),
            size: LinearSpline::from_points(&config.size),
            color: LinearSpline::from_points(&config.color),
        }
    }
}
