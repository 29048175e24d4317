use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

use fixturegen::prelude::*;

/// Benchmark cluster/point generation throughput at growing cluster counts
fn bench_generate_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_points");

    for num_clusters in [128, 1_024, 8_192] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_clusters),
            &num_clusters,
            |b, &num_clusters| {
                let config = GeneratorConfig {
                    num_clusters,
                    ..GeneratorConfig::default()
                };
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    black_box(generate_points(&mut rng, &config).unwrap())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark SQL tuple rendering for a full default-sized point set
fn bench_value_tuples(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let points = generate_points(&mut rng, &GeneratorConfig::default()).unwrap();

    c.bench_function("value_tuples/default", |b| {
        b.iter(|| {
            points
                .iter()
                .map(value_tuple)
                .collect::<Vec<_>>()
                .join(",\n")
        });
    });
}

criterion_group!(benches, bench_generate_points, bench_value_tuples);
criterion_main!(benches);
