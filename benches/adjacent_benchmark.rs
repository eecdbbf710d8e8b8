use criterion::{black_box, criterion_group, criterion_main, Criterion};

use adjacent::{adjacent, deltas};

fn adjacent_benchmark(c: &mut Criterion) {
    let num_values = 525600;
    let mut ticks = Vec::with_capacity(num_values);
    for i in 0..num_values {
        ticks.push(i as u64 * 96);
    }

    c.bench_function("adjacent", |b| {
        b.iter(|| adjacent(black_box(&ticks)).iter().filter(|(a, b)| a < b).count())
    });
    c.bench_function("windows", |b| {
        b.iter(|| black_box(&ticks).windows(2).filter(|w| w[0] < w[1]).count())
    });
    c.bench_function("deltas", |b| b.iter(|| deltas(black_box(&ticks)).filter(|d| d.is_ok()).count()));
}

criterion_group!(benches, adjacent_benchmark);
criterion_main!(benches);
