use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use preference_gen::catalogue::{City, ServiceCatalogue, Speciality};
use preference_gen::config::AttractivityWeights;
use preference_gen::distribution::CumulativeDistribution;
use preference_gen::population::ParallelPopulationGenerator;
use preference_gen::sampler::WeightedSampler;
use std::hint::black_box;
use std::time::Duration;

fn population_throughput_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_throughput_benchmark");
    group.measurement_time(Duration::from_secs(30));

    let cities = (0..28)
        .map(|i| City::new(format!("city-{i}"), (i % 10) as f64 / 10.0))
        .collect::<Vec<_>>();
    let specialities = (0..44)
        .map(|i| Speciality::new(format!("spec-{i}"), (i % 4) as f64 / 4.0, (i % 5) as f64 / 5.0))
        .collect::<Vec<_>>();
    let catalogue =
        ServiceCatalogue::new(&cities, &specialities, AttractivityWeights::default()).unwrap();
    let distribution = CumulativeDistribution::from_catalogue(&catalogue).unwrap();
    let sampler = WeightedSampler::new(&catalogue, &distribution).unwrap();

    let population = 9_165;
    let requests_per_student = 30;

    for worker_count in [1, 4, 16] {
        group.bench_function(
            format!("{population} students, {requests_per_student} requests, {worker_count} workers"),
            |b| {
                b.iter_batched(
                    || ParallelPopulationGenerator::new(sampler, worker_count, None).unwrap(),
                    |generator| {
                        black_box(generator.generate(population, requests_per_student).unwrap());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, population_throughput_benchmark);
criterion_main!(benches);
