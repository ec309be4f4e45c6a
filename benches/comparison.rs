use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numtest::{array_match, compare, number_match, parse_numbers};

fn numbers(size: usize, jitter: &str) -> String {
    let items: Vec<String> = (0..size)
        .map(|i| format!("{}.{:03}{}", i, i % 1000, jitter))
        .collect();
    format!("[{}]", items.join(", "))
}

fn benchmark_scalar(c: &mut Criterion) {
    c.bench_function("number_match_scalar", |b| {
        b.iter(|| number_match(black_box("3.14"), black_box("3.141592653589793")))
    });

    c.bench_function("number_match_exponent", |b| {
        b.iter(|| number_match(black_box("6.022e23"), black_box("6.02214076e+23")))
    });
}

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_numbers");

    for size in [10, 100, 1000].iter() {
        let text = numbers(*size, "");
        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| parse_numbers(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_array_match(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_match");

    for size in [10, 100, 1000].iter() {
        let expected = numbers(*size, "");
        let actual = numbers(*size, "4");
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(expected, actual),
            |b, (expected, actual)| b.iter(|| array_match(black_box(expected), black_box(actual))),
        );
    }
    group.finish();
}

fn benchmark_nested(c: &mut Criterion) {
    let row = numbers(16, "2");
    let rows: Vec<&str> = std::iter::repeat(row.as_str()).take(16).collect();
    let actual = format!("array([{}], dtype=float64)", rows.join(",\n       "));
    let expected = parse_numbers(&actual).unwrap().to_string();

    c.bench_function("compare_nested_16x16", |b| {
        b.iter(|| compare(black_box(&expected), black_box(&actual), true))
    });
}

criterion_group!(
    benches,
    benchmark_scalar,
    benchmark_parse,
    benchmark_array_match,
    benchmark_nested
);
criterion_main!(benches);
