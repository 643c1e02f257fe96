use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::emission::{FIRE_RATE, TREE_LIGHTS_RATE};
use crate::error::ParticleResult;
use crate::particles::host::{RenderSink, ViewpointProvider};
use crate::particles::{ParticleSystem, ParticleSystemConfig, ParticleUpdate};

/// Common effect presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectPreset {
    /// Hearth fire under the mantel
    Fire,
    /// Twinkling lights rising off the tree
    TreeLights,
}

impl EffectPreset {
    /// Configuration this preset builds a system from
    pub fn config(self) -> ParticleSystemConfig {
        match self {
            EffectPreset::Fire => ParticleSystemConfig::default()
                .with_name("fire")
                .with_emission_rate(FIRE_RATE),
            EffectPreset::TreeLights => ParticleSystemConfig::default()
                .with_name("tree_lights")
                .with_emission_rate(TREE_LIGHTS_RATE),
        }
    }

    pub fn build(self) -> ParticleResult<ParticleSystem> {
        ParticleSystem::new(self.config())
    }
}

/// Handle to an effect inside an [`EffectSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId(usize);

struct EffectSlot {
    system: ParticleSystem,
    emitter: Vec3,
}

/// Several independent particle systems sharing one viewpoint and frame clock.
///
/// Each effect has its own emitter slot that the host moves between frames.
/// Effects are updated in the order they were added.
#[derive(Default)]
pub struct EffectSet {
    slots: Vec<EffectSlot>,
}

/// Per-frame totals across an [`EffectSet`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectSetUpdate {
    pub effects: Vec<ParticleUpdate>,
    pub total_live: usize,
}

impl EffectSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a system with its emitter starting at `emitter`
    pub fn add(&mut self, system: ParticleSystem, emitter: Vec3) -> EffectId {
        let id = EffectId(self.slots.len());
        log::debug!("Effect '{}' added at {:?}", system.name(), emitter);
        self.slots.push(EffectSlot { system, emitter });
        id
    }

    /// Build a preset and add it
    pub fn add_preset(&mut self, preset: EffectPreset, emitter: Vec3) -> ParticleResult<EffectId> {
        Ok(self.add(preset.build()?, emitter))
    }

    /// Move an effect's emitter; takes effect on the next spawn batch
    pub fn set_emitter_position(&mut self, id: EffectId, position: Vec3) {
        if let Some(slot) = self.slots.get_mut(id.0) {
            slot.emitter = position;
        }
    }

    pub fn emitter_position(&self, id: EffectId) -> Option<Vec3> {
        self.slots.get(id.0).map(|slot| slot.emitter)
    }

    pub fn get(&self, id: EffectId) -> Option<&ParticleSystem> {
        self.slots.get(id.0).map(|slot| &slot.system)
    }

    pub fn find(&self, name: &str) -> Option<&ParticleSystem> {
        self.iter().find(|system| system.name() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticleSystem> {
        self.slots.iter().map(|slot| &slot.system)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Update every effect with the same `dt` and viewpoint
    pub fn update(&mut self, dt: f32, viewpoint: &impl ViewpointProvider) -> EffectSetUpdate {
        let mut result = EffectSetUpdate::default();
        for slot in &mut self.slots {
            let update = slot.system.update(dt, &slot.emitter, viewpoint);
            result.total_live += update.live;
            result.effects.push(update);
        }
        result
    }

    /// Update every effect and submit each one's attributes to `sink`
    pub fn update_and_submit(
        &mut self,
        dt: f32,
        viewpoint: &impl ViewpointProvider,
        sink: &mut dyn RenderSink,
    ) -> EffectSetUpdate {
        let mut result = EffectSetUpdate::default();
        for slot in &mut self.slots {
            let update = slot
                .system
                .update_and_submit(dt, &slot.emitter, viewpoint, sink);
            result.total_live += update.live;
            result.effects.push(update);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::particle_data::ParticleAttributes;

    const CAMERA: Vec3 = Vec3::new(35.0, 8.0, 36.0);

    #[test]
    fn test_presets_differ_only_in_name_and_rate() {
        let fire = EffectPreset::Fire.config();
        let lights = EffectPreset::TreeLights.config();

        assert_eq!(fire.emission_rate, 200.0);
        assert_eq!(lights.emission_rate, 100.0);
        assert_ne!(fire.name, lights.name);
        assert_eq!(fire.curves, lights.curves);
        assert_eq!(fire.spawn_volume, lights.spawn_volume);
        assert!(fire.validate().is_ok());
        assert!(lights.validate().is_ok());
    }

    #[test]
    fn test_preset_names_in_config_files() {
        let preset: EffectPreset = serde_json::from_str("\"tree_lights\"").unwrap();
        assert_eq!(preset, EffectPreset::TreeLights);
    }

    #[test]
    fn test_effects_are_independent() {
        let mut effects = EffectSet::new();
        let fire = effects
            .add_preset(EffectPreset::Fire, Vec3::new(0.1, -2.2, -1.6))
            .unwrap();
        let lights = effects
            .add_preset(EffectPreset::TreeLights, Vec3::new(2.0, -2.2, -1.0))
            .unwrap();

        let update = effects.update(0.1, &CAMERA);
        assert_eq!(update.effects.len(), 2);
        assert_eq!(update.effects[0].spawned, 20);
        assert_eq!(update.effects[1].spawned, 10);
        assert_eq!(update.total_live, 30);

        // Fire particles stay around the fire emitter
        let fire_system = effects.get(fire).unwrap();
        assert!(fire_system.particles().iter().all(|p| p.position.x < 1.0));
        let lights_system = effects.find("tree_lights").unwrap();
        assert!(lights_system.particles().iter().all(|p| p.position.x > 1.0));

        effects.set_emitter_position(lights, Vec3::new(-10.0, 0.0, 0.0));
        assert_eq!(effects.emitter_position(lights), Some(Vec3::new(-10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_submit_order_matches_insertion() {
        struct Names(Vec<String>);
        impl RenderSink for Names {
            fn submit(&mut self, system: &str, _attributes: &ParticleAttributes) {
                self.0.push(system.to_string());
            }
        }

        let mut effects = EffectSet::new();
        effects.add_preset(EffectPreset::TreeLights, Vec3::ZERO).unwrap();
        effects.add_preset(EffectPreset::Fire, Vec3::ZERO).unwrap();

        let mut sink = Names(Vec::new());
        effects.update_and_submit(0.016, &CAMERA, &mut sink);
        assert_eq!(sink.0, vec!["tree_lights", "fire"]);
    }
}
