// Hearth Particles Update Benchmarks
//
// Measures one full tick (emit, age, integrate, sort, export) at steady state
// for a range of emission rates, plus the sort and export stages on their own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use hearth_particles::particles::sort::sort_back_to_front;
use hearth_particles::particles::{ParticleAttributes, ParticleSystem, ParticleSystemConfig};

const EMISSION_RATES: &[f32] = &[200.0, 2_000.0, 20_000.0];
const CAMERA: Vec3 = Vec3::new(35.0, 8.0, 36.0);
const FRAME_DT: f32 = 0.016;

/// Run a system long enough for births and deaths to balance
fn warmed_system(rate: f32) -> ParticleSystem {
    let config = ParticleSystemConfig::default().with_emission_rate(rate);
    let mut system = ParticleSystem::with_rng(config, StdRng::seed_from_u64(7))
        .expect("default config is valid");
    for _ in 0..120 {
        system.update(FRAME_DT, &Vec3::ZERO, &CAMERA);
    }
    system
}

fn bench_steady_state_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("particle_update");

    for &rate in EMISSION_RATES {
        group.bench_with_input(BenchmarkId::from_parameter(rate), &rate, |b, &rate| {
            let mut system = warmed_system(rate);
            b.iter(|| {
                black_box(system.update(black_box(FRAME_DT), &Vec3::ZERO, &CAMERA));
            });
        });
    }

    group.finish();
}

fn bench_depth_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_sort");

    for &rate in EMISSION_RATES {
        let system = warmed_system(rate);
        group.bench_with_input(
            BenchmarkId::from_parameter(system.particle_count()),
            &system,
            |b, system| {
                // Orbiting camera so each pass sees a different order
                let mut angle = 0.0_f32;
                let mut particles = system.particles().to_vec();
                b.iter(|| {
                    angle += 0.1;
                    let camera = Vec3::new(angle.cos() * 50.0, 8.0, angle.sin() * 50.0);
                    sort_back_to_front(black_box(&mut particles), camera);
                });
            },
        );
    }

    group.finish();
}

fn bench_attribute_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("attribute_export");

    for &rate in EMISSION_RATES {
        let system = warmed_system(rate);
        group.bench_with_input(
            BenchmarkId::from_parameter(system.particle_count()),
            &system,
            |b, system| {
                let mut attributes = ParticleAttributes::default();
                b.iter(|| {
                    attributes.export(black_box(system.particles()));
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_steady_state_update,
    bench_depth_sort,
    bench_attribute_export
);
criterion_main!(benches);
