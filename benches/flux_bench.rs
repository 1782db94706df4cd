use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fluxshader::FileHeader;

const SAMPLE: &'static [u8] = include_bytes!("../tests/fixtures/sample.flux");

pub fn parse_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(SAMPLE.len() as u64));
    group.bench_function("sample", |b| {
        b.iter(|| FileHeader::from_slice(black_box(SAMPLE)).unwrap())
    });
    group.finish();
}

pub fn extract_benchmark(c: &mut Criterion) {
    let bundle = FileHeader::from_slice(SAMPLE).unwrap();
    c.bench_function("extract", |b| {
        b.iter(|| {
            let mut total = 0;
            for (_, _, shader) in bundle.shaders() {
                total += black_box(shader.gxp().payload()).len();
            }
            total
        })
    });
}

criterion_group!(benches, parse_benchmark, extract_benchmark);
criterion_main!(benches);
