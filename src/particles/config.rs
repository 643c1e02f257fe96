use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::particle::{
    DRAG_COEFFICIENT, INITIAL_VELOCITY, MAX_LIFE, MAX_SIZE, ROTATION_RATE,
};
use crate::error::{non_negative, positive, ParticleError, ParticleResult};
use crate::particles::curves::CurveSetConfig;
use crate::particles::emitter::SpawnVolume;

/// Construction-time settings for one particle system.
///
/// Nothing here changes after the system is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleSystemConfig {
    /// Name used in logs
    pub name: String,
    /// Particles per second
    pub emission_rate: f32,
    /// Emitter-relative spawn box
    pub spawn_volume: SpawnVolume,
    /// Longest possible life (seconds)
    pub max_life: f32,
    /// Largest possible base size
    pub max_size: f32,
    /// Velocity every particle starts with
    pub initial_velocity: Vec3,
    /// Fraction of velocity removed per second
    pub drag_coefficient: f32,
    /// Half-range of the per-tick rotation rate
    pub rotation_rate: f32,
    /// Optional cap on live particles; spawns past it are dropped
    pub max_particles: Option<usize>,
    /// Over-life curves
    pub curves: CurveSetConfig,
}

impl Default for ParticleSystemConfig {
    fn default() -> Self {
        Self {
            name: "particles".to_string(),
            emission_rate: 100.0,
            spawn_volume: SpawnVolume::default(),
            max_life: MAX_LIFE,
            max_size: MAX_SIZE,
            initial_velocity: Vec3::from_array(INITIAL_VELOCITY),
            drag_coefficient: DRAG_COEFFICIENT,
            rotation_rate: ROTATION_RATE,
            max_particles: None,
            curves: CurveSetConfig::default(),
        }
    }
}

impl ParticleSystemConfig {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_emission_rate(mut self, rate: f32) -> Self {
        self.emission_rate = rate;
        self
    }

    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = Some(max_particles);
        self
    }

    /// Check every value is inside its domain
    pub fn validate(&self) -> ParticleResult<()> {
        non_negative("emission_rate", self.emission_rate)?;
        positive("max_life", self.max_life)?;
        non_negative("max_size", self.max_size)?;
        non_negative("drag_coefficient", self.drag_coefficient)?;
        non_negative("rotation_rate", self.rotation_rate)?;
        if !self.initial_velocity.is_finite() {
            return Err(ParticleError::InvalidParameter {
                name: "initial_velocity",
                value: self.initial_velocity.length(),
                reason: "must be finite",
            });
        }
        self.spawn_volume.validate()?;
        self.curves.validate()
    }

    /// Parse a TOML document
    pub fn from_toml_str(raw: &str) -> ParticleResult<Self> {
        let config: Self = toml::from_str(raw).map_err(|e| ParticleError::ConfigParse {
            path: "<inline>".into(),
            error: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.toml` or `.json` file
    pub fn load(path: &Path) -> ParticleResult<Self> {
        let config: Self = load_document(path)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Some(ConfigFormat::Json),
            Some("toml") => Some(ConfigFormat::Toml),
            _ => None,
        }
    }
}

/// Read and decode any serde document by file extension
pub fn load_document<T: serde::de::DeserializeOwned>(path: &Path) -> ParticleResult<T> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| ParticleError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let raw = std::fs::read_to_string(path).map_err(|error| ParticleError::Io {
        path: path.to_path_buf(),
        error,
    })?;

    let parse_error = |error: String| ParticleError::ConfigParse {
        path: path.to_path_buf(),
        error,
    };

    match format {
        ConfigFormat::Toml => toml::from_str(&raw).map_err(|e| parse_error(e.to_string())),
        ConfigFormat::Json => serde_json::from_str(&raw).map_err(|e| parse_error(e.to_string())),
    }
}
