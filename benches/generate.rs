use randsource::generator::{Generator, SecureGenerator};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_generate(c: &mut Criterion) {
    let generator = SecureGenerator::new();

    c.bench_function("secure generate 64 bytes", |b| {
        b.iter(|| generator.generate(black_box(64)))
    });

    c.bench_function("secure generate 4096 bytes", |b| {
        b.iter(|| generator.generate(black_box(4096)))
    });
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
