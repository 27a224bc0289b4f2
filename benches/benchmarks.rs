use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tinyseries::{compress, decompress};

/// Slowly varying sensor-like series: 22.0 +/- a few tenths
fn sensor_series(count: usize) -> Vec<f64> {
    (0..count).map(|i| 22.0 + ((i % 7) as f64 - 3.0) * 0.1).collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for count in [100, 1000, 10000] {
        let series = sensor_series(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("{count}_values"), |b| {
            b.iter(|| black_box(compress(black_box(&series), 3).unwrap()))
        });
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    // Pre-encode data
    let text = compress(&sensor_series(10000), 3).unwrap();

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Elements(10000));
    group.bench_function("10000_values", |b| {
        b.iter(|| black_box(decompress(black_box(&text)).unwrap()))
    });
    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    // Epoch seconds every 5 minutes, precision 0
    let series: Vec<f64> = (0..1000u32).map(|i| 1_760_000_000.0 + f64::from(i) * 300.0).collect();

    let mut group = c.benchmark_group("roundtrip");
    group.throughput(Throughput::Elements(1000));
    group.bench_function("1000_timestamps", |b| {
        b.iter(|| {
            let text = compress(black_box(&series), 0).unwrap();
            black_box(decompress(&text).unwrap())
        })
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_roundtrip);
criterion_main!(benches);
