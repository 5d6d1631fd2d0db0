#![no_main]

use std::sync::OnceLock;

use docsift::index::IndexTable;
use docsift::index::build::{SourceEntry, build_table};
use docsift::query::QueryEngine;
use docsift::session::IncrementalSession;
use libfuzzer_sys::fuzz_target;

fn table() -> IndexTable {
    let sources = vec![
        SourceEntry {
            text: "JobEngine".to_string(),
            targets: vec![("class_job_engine.html".to_string(), "Jobs".to_string())],
        },
        SourceEntry {
            text: "Job Handler".to_string(),
            targets: vec![(
                "class_job_engine.html#a0f3c2d1".to_string(),
                "JobEngine".to_string(),
            )],
        },
        SourceEntry {
            text: "Jobs".to_string(),
            targets: vec![("namespace_jobs.html".to_string(), String::new())],
        },
        SourceEntry {
            text: "jobs".to_string(),
            targets: vec![("md_docs_jobs.html".to_string(), String::new())],
        },
        SourceEntry {
            text: "JSON Configuration File".to_string(),
            targets: vec![(
                "md_docs_config.html#autotoc_md12".to_string(),
                "Configuration".to_string(),
            )],
        },
        SourceEntry {
            text: "café menu".to_string(),
            targets: vec![("md_docs_menu.html".to_string(), String::new())],
        },
    ];
    build_table(&sources).unwrap()
}

fn engine() -> &'static QueryEngine {
    static ENGINE: OnceLock<QueryEngine> = OnceLock::new();
    ENGINE.get_or_init(|| QueryEngine::new(table()))
}

fuzz_target!(|queries: Vec<&str>| {
    // A session fed any keystroke sequence must never panic, and every
    // step must return exactly what a fresh search for that input returns.
    let mut session = IncrementalSession::new(QueryEngine::new(table()));
    for query in &queries {
        let streamed = session.update(query);
        assert_eq!(streamed, engine().search(query).as_slice());
    }
});
