//! Benchmarks for the sigil pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sigil_forge::alphabet::Script;
use sigil_forge::assemble::{forge, Method, SigilRequest};
use sigil_forge::config::SigilConfig;
use sigil_forge::geometry::{Planet, WheelBase};
use sigil_forge::seed::Seed;

const INTENT: &str = "I will find peace and clarity in every season";

fn bench_seed(c: &mut Criterion) {
    c.bench_function("seed_from_intent", |bench| {
        bench.iter(|| black_box(Seed::from_intent(black_box(INTENT))))
    });
}

fn bench_wheel(c: &mut Criterion) {
    let config = SigilConfig::default();
    let request = SigilRequest {
        chaos_mode: true,
        ..SigilRequest::new(INTENT)
    };

    c.bench_function("forge_chaos_wheel", |bench| {
        bench.iter(|| black_box(forge(&request, &config).unwrap()))
    });
}

fn bench_kamea(c: &mut Criterion) {
    let config = SigilConfig::default();
    let request = SigilRequest {
        script: Script::Hebrew,
        wheel_base: WheelBase::Kamea(Planet::Moon),
        ..SigilRequest::new(INTENT)
    };

    c.bench_function("forge_moon_kamea", |bench| {
        bench.iter(|| black_box(forge(&request, &config).unwrap()))
    });
}

fn bench_mantra(c: &mut Criterion) {
    let config = SigilConfig::default();
    let request = SigilRequest {
        script: Script::Egyptian,
        method: Method::Mantra,
        ..SigilRequest::new(INTENT)
    };

    c.bench_function("forge_mantra", |bench| {
        bench.iter(|| black_box(forge(&request, &config).unwrap()))
    });
}

criterion_group!(benches, bench_seed, bench_wheel, bench_kamea, bench_mantra);
criterion_main!(benches);
