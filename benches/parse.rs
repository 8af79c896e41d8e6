//! Benchmarks for front matter extraction.

use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use fmx::{parse, Syntax, SyntaxTable, WrapperConfig};

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name)).unwrap()
}

/// A document with `keys` front matter entries and `body_lines` of content.
fn large_document(keys: usize, body_lines: usize) -> String {
    let mut doc = String::from("---\n");
    for i in 0..keys {
        doc.push_str(&format!("key-{}: value number {}\n", i, i));
    }
    doc.push_str("---\n");
    for i in 0..body_lines {
        doc.push_str(&format!("Paragraph {} of the document body.\n", i));
    }
    doc
}

// -- Wrapper benchmarks --

fn bench_wrappers(c: &mut Criterion) {
    let mut group = c.benchmark_group("wrappers");
    let table = SyntaxTable::global();

    for syntax in [Syntax::Md, Syntax::Coffee, Syntax::Slim, Syntax::Html] {
        let source = load_fixture(&format!("example.{}", syntax));
        let wrapper = table.resolve(syntax).unwrap();

        group.bench_function(format!("parse_{}", syntax), |b| {
            b.iter(|| parse(black_box(&source), wrapper).unwrap())
        });
    }

    group.finish();
}

// -- Size benchmarks --

fn bench_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("sizes");
    let bare = WrapperConfig::bare();

    let many_keys = large_document(200, 10);
    let long_body = large_document(5, 5_000);
    let no_front_matter: String = long_body.lines().skip(7).collect::<Vec<_>>().join("\n");

    group.bench_function("many_keys", |b| {
        b.iter(|| parse(black_box(&many_keys), &bare).unwrap())
    });

    group.bench_function("long_body", |b| {
        b.iter(|| parse(black_box(&long_body), &bare).unwrap())
    });

    group.bench_function("no_front_matter", |b| {
        b.iter(|| parse(black_box(&no_front_matter), &bare).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_wrappers, bench_sizes);
criterion_main!(benches);
