//! Scene description for the headless diorama runner.
//!
//! Only what the particle engine needs from the scene is modeled here: where
//! the camera sits, where each emitter sits and how the frame clock ticks.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::scene::{
    CAMERA_POSITION, DEFAULT_FRAMES, FIRE_EMITTER, FRAME_DT, TREE_EMITTER,
};
use crate::error::{positive, ParticleError, ParticleResult};
use crate::particles::config::load_document;
use crate::particles::{EffectPreset, EffectSet, ParticleSystem, ParticleSystemConfig};

/// One effect placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectPlacement {
    /// World position of the emitter
    pub emitter: Vec3,
    /// Named preset to build from
    #[serde(default)]
    pub preset: Option<EffectPreset>,
    /// Inline system settings; wins over `preset` when both are given
    #[serde(default)]
    pub system: Option<ParticleSystemConfig>,
}

impl EffectPlacement {
    pub fn preset(preset: EffectPreset, emitter: Vec3) -> Self {
        Self {
            emitter,
            preset: Some(preset),
            system: None,
        }
    }
}

/// Headless diorama settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DioramaConfig {
    /// Camera position used for depth sorting
    pub viewpoint: Vec3,
    /// Seconds fed to every update
    pub frame_dt: f32,
    /// Frames to simulate
    pub frames: u32,
    /// Viewport height the point multiplier is reported for
    pub viewport_height: f32,
    pub effects: Vec<EffectPlacement>,
}

impl Default for DioramaConfig {
    fn default() -> Self {
        Self {
            viewpoint: Vec3::from_array(CAMERA_POSITION),
            frame_dt: FRAME_DT,
            frames: DEFAULT_FRAMES,
            viewport_height: 1080.0,
            effects: vec![
                EffectPlacement::preset(EffectPreset::Fire, Vec3::from_array(FIRE_EMITTER)),
                EffectPlacement::preset(EffectPreset::TreeLights, Vec3::from_array(TREE_EMITTER)),
            ],
        }
    }
}

impl DioramaConfig {
    /// Load from a `.toml` or `.json` file
    pub fn load(path: &Path) -> ParticleResult<Self> {
        let config: Self = load_document(path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ParticleResult<()> {
        positive("frame_dt", self.frame_dt)?;
        positive("viewport_height", self.viewport_height)?;
        for (index, placement) in self.effects.iter().enumerate() {
            match (&placement.system, placement.preset) {
                (Some(system), _) => system.validate()?,
                (None, Some(_)) => {}
                (None, None) => return Err(ParticleError::MissingEffectSource { index }),
            }
        }
        Ok(())
    }

    /// Build every placed effect, in file order
    pub fn build_effects(&self) -> ParticleResult<EffectSet> {
        let mut effects = EffectSet::new();
        for (index, placement) in self.effects.iter().enumerate() {
            let config = match (&placement.system, placement.preset) {
                (Some(system), _) => system.clone(),
                (None, Some(preset)) => preset.config(),
                (None, None) => return Err(ParticleError::MissingEffectSource { index }),
            };
            effects.add(ParticleSystem::new(config)?, placement.emitter);
        }
        Ok(effects)
    }
}
