//! Lexer Benchmarks
//!
//! Run with: `cargo bench --package covc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use covc_lex::{Lexer, Utf8};

fn lexer_token_count(lexer: &Lexer, source: &str) -> usize {
    lexer.lex(source).map(|tokens| tokens.len()).unwrap_or(0)
}

fn bench_lexer_statements(c: &mut Criterion) {
    let lexer = Lexer::default();
    let mut group = c.benchmark_group("lexer");

    let source = "function main() var y = x + 1; return y; end";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_var", |b| {
        b.iter(|| lexer_token_count(&lexer, black_box("var x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(&lexer, black_box(source)))
    });

    group.finish();
}

fn bench_lexer_script(c: &mut Criterion) {
    let lexer = Lexer::default();
    let mut group = c.benchmark_group("lexer_script");

    let source = r#"
#!/usr/bin/env cs
@charset: utf8
import network, regex

function fibonacci(n)
    if n <= 1
        return n
    end
    return fibonacci(n - 1) + fibonacci(n - 2)
end

struct point
    var x = 0.0_px
    var y = 0.0_px
end

var names = {"alpha", "beta", "gamma"}
foreach it in names
    system.out.println("name: " + it + '\n')
end
"#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("script_source", |b| {
        b.iter(|| lexer_token_count(&lexer, black_box(source)))
    });

    group.bench_function("decode_only", |b| {
        b.iter(|| covc_lex::Charset::decode(&Utf8, black_box(source.as_bytes())))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let lexer = Lexer::default();
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| lexer_token_count(&lexer, black_box("var s = \"hello\";")))
    });

    group.bench_function("escaped_string", |b| {
        let source = "var s = \"tab\\tnew\\nquote\\\"backslash\\\\ and some more text\";";
        b.iter(|| lexer_token_count(&lexer, black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let lexer = Lexer::default();
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| lexer_token_count(&lexer, black_box("var x = 123456;")))
    });

    group.bench_function("float", |b| {
        b.iter(|| lexer_token_count(&lexer, black_box("var x = 3.14159;")))
    });

    group.bench_function("hex", |b| {
        b.iter(|| lexer_token_count(&lexer, black_box("var x = 0xDEADBEEF;")))
    });

    group.bench_function("suffixed", |b| {
        b.iter(|| lexer_token_count(&lexer, black_box("var x = 100_ms;")))
    });

    group.finish();
}

fn bench_lexer_operators(c: &mut Criterion) {
    let lexer = Lexer::default();
    let mut group = c.benchmark_group("lexer_operators");

    group.bench_function("operator_run", |b| {
        b.iter(|| lexer_token_count(&lexer, black_box("a+=b->c...d::e==f!=g&&h||i")))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_statements,
    bench_lexer_script,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_operators
);
criterion_main!(benches);
