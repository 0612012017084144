use criterion::{criterion_group, criterion_main, Criterion};
use quinx::simplify;
use std::hint::black_box;

fn parity_function(c: &mut Criterion) {
    // The worst case for plain Quine-McCluskey and the best case for the XOR
    // extension: the six-variable odd-parity function.
    let ones: Vec<u64> = (0..64).filter(|i: &u64| i.count_ones() % 2 == 1).collect();

    c.bench_function("parity6_with_xor", |b| {
        b.iter(|| simplify(black_box(&ones), &[], Some(6), true))
    });
    c.bench_function("parity6_without_xor", |b| {
        b.iter(|| simplify(black_box(&ones), &[], Some(6), false))
    });
}

fn scattered_function(c: &mut Criterion) {
    let ones: Vec<u64> = vec![3, 4, 5, 7, 9, 13, 14, 15, 17, 21, 29, 35, 39, 59, 61];
    let dc: Vec<u64> = vec![0, 8, 16, 24, 32, 40, 48, 56];

    c.bench_function("scattered6", |b| {
        b.iter(|| simplify(black_box(&ones), black_box(&dc), Some(6), true))
    });
}

criterion_group!(benches, parity_function, scattered_function);
criterion_main!(benches);
