//! Criterion benchmarks for the Rastrigin GA engine.
//!
//! Covers the full generational loop at several problem sizes plus the
//! per-operator costs that dominate a generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rastriga::operators::{invert, mutate};
use rastriga::rng::create_rng;
use rastriga::{Chromosome, Crossover, GaRunner, RunConfig, Selection};

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(10);

    for (dims, pop, gens) in [(2usize, 50usize, 50usize), (4, 100, 50), (8, 100, 30)] {
        let config = RunConfig::default()
            .with_dimensions(dims)
            .with_population_size(pop)
            .with_generations(gens)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("d{dims}_p{pop}_g{gens}"), dims),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let mut group = c.benchmark_group("crossover");
    let mut rng = create_rng(42);
    let p1 = Chromosome::random(200, &mut rng);
    let p2 = Chromosome::random(200, &mut rng);

    for strategy in [
        Crossover::SinglePoint,
        Crossover::TwoPoint,
        Crossover::MultiPoint(8),
        Crossover::Uniform,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{strategy:?}")),
            &strategy,
            |b, strategy| {
                b.iter(|| {
                    let children = strategy.recombine(black_box(&p1), black_box(&p2), &mut rng);
                    black_box(children)
                })
            },
        );
    }
    group.finish();
}

fn bench_mutation(c: &mut Criterion) {
    let mut rng = create_rng(42);
    let chromosome = Chromosome::random(200, &mut rng);

    c.bench_function("mutate_200_bits", |b| {
        b.iter(|| black_box(mutate(black_box(&chromosome), 0.01, &mut rng)))
    });
    c.bench_function("invert_200_bits", |b| {
        b.iter(|| black_box(invert(black_box(&chromosome), 1.0, &mut rng)))
    });
}

fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let config = RunConfig::default()
        .with_population_size(100)
        .with_generations(20)
        .with_seed(42);

    for selection in [Selection::Tournament(5), Selection::Roulette, Selection::Rank] {
        let config = config.clone().with_selection(selection);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{selection:?}")),
            &config,
            |b, config| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_full_run,
    bench_crossover,
    bench_mutation,
    bench_selection
);
criterion_main!(benches);
