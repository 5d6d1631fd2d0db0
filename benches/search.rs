//! Performance benchmarks for docsift
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tempfile::TempDir;

use docsift::index::build::{SourceEntry, build_table};
use docsift::index::load_path;
use docsift::index::writer::write_table;
use docsift::query::QueryEngine;
use docsift::session::IncrementalSession;

/// Synthesize a documentation-sized source listing: record pages, member
/// anchors, and markdown headings in roughly the mix a generated site has.
fn synthetic_sources(count: usize) -> Vec<SourceEntry> {
    let areas = [
        "Job", "Fleet", "Tunnel", "Config", "Device", "Shadow", "Sensor", "Log",
    ];
    let kinds = ["Engine", "Manager", "Provider", "Handler", "Feature", "Client"];

    let mut sources = Vec::with_capacity(count);
    for i in 0..count {
        let area = areas[i % areas.len()];
        let kind = kinds[(i / areas.len()) % kinds.len()];
        let source = match i % 3 {
            0 => SourceEntry {
                text: format!("{area}{kind}{i}"),
                targets: vec![(
                    format!(
                        "class_{}_{}_{i}.html",
                        area.to_lowercase(),
                        kind.to_lowercase()
                    ),
                    String::new(),
                )],
            },
            1 => SourceEntry {
                text: format!("{area} {kind} {i}"),
                targets: vec![(
                    format!("md_docs_{}_{i}.html#autotoc_md{i}", area.to_lowercase()),
                    area.to_string(),
                )],
            },
            _ => SourceEntry {
                text: format!("Set{area}{kind}"),
                targets: vec![(
                    format!(
                        "class_{}_{}.html#a{i:08x}",
                        area.to_lowercase(),
                        kind.to_lowercase()
                    ),
                    format!("{area}{kind}"),
                )],
            },
        };
        sources.push(source);
    }
    sources
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_table");
    for size in [1_000usize, 10_000] {
        let sources = synthetic_sources(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &sources, |b, sources| {
            b.iter(|| build_table(black_box(sources)).unwrap())
        });
    }
    group.finish();
}

fn bench_load(c: &mut Criterion) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("searchdata.json");
    let table = build_table(&synthetic_sources(10_000)).expect("Failed to build table");
    write_table(&table, &path).expect("Failed to write table");

    c.bench_function("load_10k_entries", |b| {
        b.iter(|| load_path(black_box(&path)).unwrap())
    });
}

fn bench_search(c: &mut Criterion) {
    let engine = QueryEngine::new(build_table(&synthetic_sources(10_000)).unwrap());

    let queries = [
        "d",
        "de",
        "device",
        "device manager",
        "setjobengine",
        "no such name",
    ];

    let mut group = c.benchmark_group("search");
    for query in queries {
        group.bench_with_input(BenchmarkId::from_parameter(query), &query, |b, &q| {
            b.iter(|| engine.search(black_box(q)))
        });
    }
    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let sources = synthetic_sources(10_000);
    let full = "device manager 12";
    let script: Vec<&str> = (1..=full.len()).map(|i| &full[..i]).collect();

    let mut group = c.benchmark_group("keystroke_script");

    // Each iteration starts from a reset session, so the first keystroke
    // scans and every later one narrows the previous row set.
    let mut session = IncrementalSession::new(QueryEngine::new(build_table(&sources).unwrap()));
    group.bench_function("incremental_session", |b| {
        b.iter(|| {
            session.reset();
            for q in &script {
                black_box(session.update(q));
            }
        })
    });

    let engine = QueryEngine::new(build_table(&sources).unwrap());
    group.bench_function("fresh_search_per_keystroke", |b| {
        b.iter(|| {
            for q in &script {
                black_box(engine.search(q));
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_load,
    bench_search,
    bench_session
);
criterion_main!(benches);
