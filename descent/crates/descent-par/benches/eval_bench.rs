//! Parser Benchmarks
//!
//! Run with: `cargo bench --package descent-par`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use descent_par::{evaluate, parse_formula, ChainParser, ParseLimits};

fn bench_polish(c: &mut Criterion) {
    let mut group = c.benchmark_group("polish");
    let limits = ParseLimits::default();

    let source = "+ * 12 - 7 3 / 100 + 4 * 5 6";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("evaluate", |b| {
        b.iter(|| evaluate(black_box(source), &limits))
    });

    group.bench_function("build_tree", |b| {
        b.iter(|| parse_formula(black_box(source), &limits))
    });

    let nested = format!("{}1{}", "+ ".repeat(200), " 1".repeat(200));
    group.bench_function("deeply_nested", |b| {
        b.iter(|| evaluate(black_box(&nested), &limits))
    });

    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain");

    let source = "response.writer.headers(\"content-type\");";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("recognize", |b| {
        let mut parser = ChainParser::default();
        b.iter(|| parser.recognize(black_box(source)))
    });

    group.bench_function("reject", |b| {
        let mut parser = ChainParser::default();
        b.iter(|| parser.recognize(black_box("response.;")))
    });

    group.finish();
}

criterion_group!(benches, bench_polish, bench_chain);
criterion_main!(benches);
