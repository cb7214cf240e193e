use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use progmem_array::ArrayFormat;

fn render_benchmark(c: &mut Criterion) {
    let format = ArrayFormat::default();
    let mut group = c.benchmark_group("render_array");
    for size in [256usize, 16 * 1024, 256 * 1024] {
        let data: Vec<u8> = (0..size).map(|i| (i * 31) as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| format.render_array(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, render_benchmark);
criterion_main!(benches);
