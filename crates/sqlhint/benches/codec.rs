use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlhint::{Metadata, parse_metadata, strip_metadata, wrap_sql};

const SQL: &str = "SELECT * FROM users WHERE id = 1";

/// Build a Metadata with `n` entries: key0=value0 ... key{n-1}=value{n-1}.
fn build_metadata(n: usize) -> Metadata {
    (0..n)
        .map(|i| (format!("key{i}"), format!("value{i}")))
        .collect()
}

fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/wrap_sql");

    for n in [0, 1, 5, 20, 100] {
        let metadata = build_metadata(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &metadata, |b, metadata| {
            b.iter(|| black_box(wrap_sql(SQL, metadata)));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/parse_metadata");

    for n in [0, 1, 5, 20, 100] {
        let wrapped = wrap_sql(SQL, &build_metadata(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &wrapped, |b, wrapped| {
            b.iter(|| black_box(parse_metadata(wrapped)));
        });
    }

    group.finish();
}

fn bench_strip(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec/strip_metadata");

    for n in [0, 1, 5, 20, 100] {
        let wrapped = wrap_sql(SQL, &build_metadata(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &wrapped, |b, wrapped| {
            b.iter(|| black_box(strip_metadata(wrapped)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_wrap, bench_parse, bench_strip);
criterion_main!(benches);
