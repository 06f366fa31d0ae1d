use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use uniq::{Precision, Separators, base32_id, hex_id, isonan, isosec, second, timestamp_id, uuid_v4};

fn bench_random(c: &mut Criterion) {
    c.bench_function("uuid_v4", |b| b.iter(uuid_v4));
    c.bench_function("base32_id", |b| b.iter(base32_id));
    c.bench_function("hex_id/18", |b| b.iter(|| hex_id(black_box(18))));
    c.bench_function("hex_id/256", |b| b.iter(|| hex_id(black_box(256))));
}

fn bench_timestamps(c: &mut Criterion) {
    c.bench_function("isosec", |b| b.iter(isosec));
    c.bench_function("isonan", |b| b.iter(isonan));
    c.bench_function("second", |b| b.iter(second));
    c.bench_function("timestamp_id/nano_rfc3339", |b| {
        b.iter(|| timestamp_id(black_box(Precision::Nanosecond), black_box(Separators::Rfc3339)))
    });
}

criterion_group!(benches, bench_random, bench_timestamps);
criterion_main!(benches);
