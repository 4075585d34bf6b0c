//! Benchmarks for the Reckon evaluator.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. operator_chain: Flat expressions, one reduction per operator
//! 2. nested_groups: Deeply parenthesized expressions, one splice per group
//! 3. function_calls: Substitution of built-in and host function calls

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use reckon_core::Calculator;

/// Generate an arithmetic expression like "1 + 1 + 1 + ... + 1" with `n` additions.
fn generate_arithmetic_chain(n: usize) -> String {
    let mut expr = String::from("1");
    for _ in 0..n {
        expr.push_str(" + 1");
    }
    expr
}

/// Generate "((1+1)+1)+1..." with `n` groups.
fn generate_nested_groups(n: usize) -> String {
    let mut expr = "(".repeat(n);
    expr.push('1');
    for _ in 0..n {
        expr.push_str("+1)");
    }
    expr
}

/// Generate "SUM(SQRT(4), SQRT(4), ...)" with `n` arguments.
fn generate_function_calls(n: usize) -> String {
    let args = vec!["SQRT(4)"; n].join(", ");
    format!("SUM({})", args)
}

fn bench_operator_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("operator_chain");
    let calculator = Calculator::new();

    for size in [10, 100, 400] {
        group.throughput(Throughput::Elements(size as u64));
        let source = generate_arithmetic_chain(size);

        group.bench_with_input(BenchmarkId::new("float", size), &source, |b, source| {
            b.iter(|| calculator.calculate(black_box(source)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("int", size), &source, |b, source| {
            b.iter(|| calculator.calculate_int(black_box(source)).unwrap())
        });
    }

    group.finish();
}

fn bench_nested_groups(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_groups");
    let calculator = Calculator::new();

    for size in [10, 100, 400] {
        group.throughput(Throughput::Elements(size as u64));
        let source = generate_nested_groups(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| calculator.calculate(black_box(source)).unwrap())
        });
    }

    group.finish();
}

fn bench_function_calls(c: &mut Criterion) {
    let mut group = c.benchmark_group("function_calls");

    let native = Calculator::new();
    let mut host = Calculator::new();
    host.set_method_invoker(Some(Box::new(
        |_: &Calculator, name: &str, args: &[f64]| match name {
            "ROOT" => args.first().map(|v| v.sqrt()),
            _ => None,
        },
    )));

    for size in [1, 10, 50] {
        group.throughput(Throughput::Elements(size as u64));
        let source = generate_function_calls(size);
        let host_source = source.replace("SQRT", "ROOT");

        group.bench_with_input(BenchmarkId::new("native", size), &source, |b, source| {
            b.iter(|| native.calculate(black_box(source)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("host", size), &host_source, |b, source| {
            b.iter(|| host.calculate(black_box(source)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_operator_chain,
    bench_nested_groups,
    bench_function_calls
);
criterion_main!(benches);
