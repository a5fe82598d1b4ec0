//! Lexer Benchmarks
//!
//! Measures tokenization throughput of the DreamLang lexer.
//! Run with: `cargo bench --package dreamc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dreamc_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    Lexer::new(source).filter_map(Result::ok).count()
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "fun main() { var y = x + 1\n return y }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| b.iter(|| lexer_token_count(black_box("var x = 42"))));

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        // Recursive fibonacci
        fun fibonacci(n) {
            if (n <= 1) {
                return n
            }
            return fibonacci(n - 1) + fibonacci(n - 2)
        }

        /* A point with a
           distance helper */
        class Point {
            var x = 0.0
            var y = 0.0

            fun distance(other) {
                val dx = x - other.x
                val dy = y - other.y
                return (dx ** 2 + dy ** 2) ** 0.5
            }
        }

        for (p in points) {
            if (p != null && p.x >= 1e-3 || !available) {
                print("point: ", p, '\n')
            }
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(black_box("val s = \"hello\"")))
    });

    group.bench_function("escaped_string", |b| {
        let source = "val s = \"tab\\there, newline\\nthere, quote\\\" and backslash\\\\.\"";
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 123456")))
    });

    group.bench_function("float_exponent", |b| {
        b.iter(|| lexer_token_count(black_box("var x = 6.02214076e23")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers
);
criterion_main!(benches);
