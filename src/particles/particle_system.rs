use crate::error::ParticleResult;
use crate::particles::config::ParticleSystemConfig;
use crate::particles::curves::LifetimeCurves;
use crate::particles::emitter::EmissionController;
use crate::particles::host::{EmitterHandle, RenderSink, ViewpointProvider};
use crate::particles::particle_data::ParticleAttributes;
use crate::particles::population::ParticlePopulation;
use crate::particles::random::RandomSource;
use crate::particles::sort::sort_back_to_front;
use crate::particles::update::integrate_particles;
use crate::particles::Particle;

/// Particle system update result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleUpdate {
    /// Particles born this tick
    pub spawned: usize,
    /// Particles that died this tick
    pub retired: usize,
    /// Particles alive after the tick
    pub live: usize,
}

/// Statistics about the particle system
#[derive(Debug, Default, Clone)]
pub struct ParticleSystemStats {
    pub total_particles: usize,
    pub total_spawned: u64,
    pub total_retired: u64,
    pub dropped_by_limit: u64,
    pub ticks: u64,
    /// Fraction of the ceiling in use (0 when unbounded)
    pub capacity_used: f32,
}

/// One emitter's worth of particles.
///
/// Every call to [`update`](Self::update) runs emission, aging and
/// integration, depth sorting and attribute export, in that order.
pub struct ParticleSystem {
    config: ParticleSystemConfig,
    curves: LifetimeCurves,
    emission: EmissionController,
    population: ParticlePopulation,
    attributes: ParticleAttributes,
    rng: Box<dyn RandomSource>,
    stats: ParticleSystemStats,
    warned_limit: bool,
}

impl ParticleSystem {
    /// Create a system drawing randomness from the thread-local generator
    pub fn new(config: ParticleSystemConfig) -> ParticleResult<Self> {
        Self::with_rng(config, rand::thread_rng())
    }

    /// Create a system with an explicit random source
    pub fn with_rng(
        config: ParticleSystemConfig,
        rng: impl RandomSource + 'static,
    ) -> ParticleResult<Self> {
        config.validate()?;
        let curves = LifetimeCurves::from_config(&config.curves)?;

        log::debug!(
            "Particle system '{}': {} particles/s, life {}s, curves {}/{}/{} points",
            config.name,
            config.emission_rate,
            config.max_life,
            curves.alpha.len(),
            curves.size.len(),
            curves.color.len(),
        );

        Ok(Self {
            emission: EmissionController::new(config.emission_rate),
            population: ParticlePopulation::new(config.max_particles),
            attributes: ParticleAttributes::default(),
            curves,
            rng: Box::new(rng),
            stats: ParticleSystemStats::default(),
            warned_limit: false,
            config,
        })
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// `dt` must be non-negative; debug builds assert it, release builds treat
    /// anything negative or non-finite as zero so the host loop never stalls.
    pub fn update(
        &mut self,
        dt: f32,
        emitter: &impl EmitterHandle,
        viewpoint: &impl ViewpointProvider,
    ) -> ParticleUpdate {
        debug_assert!(dt >= 0.0 && dt.is_finite(), "invalid frame delta {dt}");
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        // Emit. A frame at least as long as the longest life kills every
        // birth in the same tick, so those are counted but never built.
        let due = self.emission.tick(dt);
        let stillborn = dt >= self.config.max_life;
        let spawned = if due == 0 {
            0
        } else if stillborn {
            self.population.admit(due)
        } else {
            let origin = emitter.emitter_position();
            self.population
                .spawn(due, origin, &self.config, self.rng.as_mut())
        };
        if spawned < due && !self.warned_limit {
            log::warn!(
                "Particle system '{}' hit its limit of {:?}; dropping spawns",
                self.config.name,
                self.population.max_particles(),
            );
            self.warned_limit = true;
        }

        // Age, cull, integrate
        let mut retired = self.population.age(dt);
        if stillborn {
            retired = retired.saturating_add(spawned);
        }
        integrate_particles(
            self.population.particles_mut(),
            &self.curves,
            dt,
            self.config.drag_coefficient,
        );

        // Sort, export
        sort_back_to_front(self.population.particles_mut(), viewpoint.view_position());
        self.attributes.export(self.population.particles());

        let update = ParticleUpdate {
            spawned,
            retired,
            live: self.population.len(),
        };
        self.record(&update);

        log::trace!(
            "Particle system '{}': +{} -{} = {}",
            self.config.name,
            update.spawned,
            update.retired,
            update.live,
        );

        update
    }

    /// [`update`](Self::update), then hand the attributes to `sink`
    pub fn update_and_submit(
        &mut self,
        dt: f32,
        emitter: &impl EmitterHandle,
        viewpoint: &impl ViewpointProvider,
        sink: &mut dyn RenderSink,
    ) -> ParticleUpdate {
        let update = self.update(dt, emitter, viewpoint);
        sink.submit(&self.config.name, &self.attributes);
        update
    }

    /// Drop every live particle and any owed emission time
    pub fn reset(&mut self) {
        self.population.clear();
        self.emission.reset();
        self.attributes.clear();
        self.stats.total_particles = 0;
        self.stats.capacity_used = 0.0;
    }

    fn record(&mut self, update: &ParticleUpdate) {
        self.stats.ticks += 1;
        self.stats.total_spawned = self.stats.total_spawned.saturating_add(update.spawned as u64);
        self.stats.total_retired = self.stats.total_retired.saturating_add(update.retired as u64);
        self.stats.total_particles = update.live;
        self.stats.dropped_by_limit = self.population.dropped();
        self.stats.capacity_used = match self.population.max_particles() {
            Some(max) if max > 0 => update.live as f32 / max as f32,
            _ => 0.0,
        };
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    pub fn config(&self) -> &ParticleSystemConfig {
        &self.config
    }

    pub fn curves(&self) -> &LifetimeCurves {
        &self.curves
    }

    /// Live particles in draw order as of the last update
    pub fn particles(&self) -> &[Particle] {
        self.population.particles()
    }

    /// Get particle count
    pub fn particle_count(&self) -> usize {
        self.population.len()
    }

    /// Attribute snapshot from the last update (empty before the first)
    pub fn attributes(&self) -> &ParticleAttributes {
        &self.attributes
    }

    pub fn stats(&self) -> &ParticleSystemStats {
        &self.stats
    }
}

impl std::fmt::Debug for ParticleSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticleSystem")
            .field("name", &self.config.name)
            .field("live", &self.population.len())
            .field("accumulator", &self.emission.accumulator())
            .finish()
    }
}
