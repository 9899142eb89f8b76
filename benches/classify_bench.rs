// Throughput of the classification engine and the parallel guess survey.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use secret_digits::{classify, ResultDistribution, Secret};

fn bench_classify(c: &mut Criterion) {
    let secret = Secret::parse("96897341").unwrap();
    let guess = [4, 4, 4, 4, 1, 2, 3, 9];

    c.bench_function("classify_8_digits", |b| {
        b.iter(|| classify(black_box(&secret), black_box(&guess)))
    });
}

fn bench_distribution(c: &mut Criterion) {
    let secret = Secret::parse("9689").unwrap();

    c.bench_function("distribution_4_digits", |b| {
        b.iter(|| ResultDistribution::for_secret(black_box(&secret)))
    });
}

criterion_group!(benches, bench_classify, bench_distribution);
criterion_main!(benches);
