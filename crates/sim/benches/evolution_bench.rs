use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use quasievo_sim::base::{FitnessValue, Genome};
use quasievo_sim::evolution::{MutationModel, RouletteWheel, SelectionMethod};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

fn bench_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutation");

    for length in [20usize, 100, 1_000] {
        let genome = Genome::wildtype(length);
        let model = MutationModel::new(0.05).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);

        group.throughput(Throughput::Elements(length as u64));
        group.bench_with_input(BenchmarkId::new("flip", length), &genome, |b, genome| {
            b.iter(|| black_box(model.mutate(black_box(genome), &mut rng)))
        });
    }

    group.finish();
}

fn bench_roulette_wheel(c: &mut Criterion) {
    let mut group = c.benchmark_group("roulette_wheel");

    for size in [100usize, 1_000, 10_000] {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let weights: Vec<FitnessValue> = (0..size)
            .map(|_| {
                if rng.random::<f64>() < 0.3 {
                    FitnessValue::new(1.2)
                } else {
                    FitnessValue::NEUTRAL
                }
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));

        for method in [SelectionMethod::LinearScan, SelectionMethod::CumulativeSearch] {
            let id = BenchmarkId::new(format!("{method:?}"), size);
            group.bench_with_input(id, &weights, |b, weights| {
                b.iter(|| {
                    let wheel = RouletteWheel::new(weights, method);
                    let picks: Vec<usize> = (0..weights.len())
                        .map(|_| wheel.select(&mut rng))
                        .collect();
                    black_box(picks)
                })
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_mutation, bench_roulette_wheel);
criterion_main!(benches);
