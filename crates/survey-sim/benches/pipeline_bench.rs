use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use survey_sim::{aggregate, default_categories, generate};

fn bench_pipeline(c: &mut Criterion) {
    let cats = default_categories();
    let mut group = c.benchmark_group("generate_aggregate");
    for &n in &[60usize, 10_000usize] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &n, |b, &n| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                let obs = generate(&cats, n, &mut rng).expect("generate");
                black_box(aggregate(&obs, &cats).expect("aggregate"));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
