use crate::index::table::IndexTable;
use crate::index::types::{Category, Entry, EntryId, Row, RowId, TableMeta, Target};
use crate::utils::text;
use ahash::AHashMap;
use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry as Slot;
use std::fs;
use std::path::Path;
use tracing::debug;

/// One record of the source listing the site generator hands us:
/// a display name plus everywhere it appears.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceEntry {
    pub text: String,
    pub targets: Vec<(String, String)>,
}

/// Read a source-entry listing (a JSON array of `SourceEntry`).
pub fn read_source(path: &Path) -> Result<Vec<SourceEntry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read source listing {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("invalid source listing {}", path.display()))
}

/// Generate a fragment table from source entries.
///
/// Every word-boundary suffix of each display name becomes a row; rows keep
/// input order (per entry: longest suffix first), which later drives the
/// engine's final tie-break. Identical `(text, targets)` records collapse
/// into one entry; distinct records that collide on a fragment both stay.
pub fn build_table(sources: &[SourceEntry]) -> Result<IndexTable> {
    for (i, source) in sources.iter().enumerate() {
        if source.text.is_empty() {
            bail!("source entry {i} has empty display text");
        }
        if source.targets.is_empty() {
            bail!("source entry {i} ({:?}) has no targets", source.text);
        }
        if source.targets.iter().any(|(url, _)| url.is_empty()) {
            bail!("source entry {i} ({:?}) has a target with empty url", source.text);
        }
    }

    // Fragment generation is per-entry independent; collect preserves order.
    let fragment_lists: Vec<Vec<String>> = sources
        .par_iter()
        .map(|source| text::boundary_suffixes(&source.text))
        .collect();

    let mut entries: Vec<Entry> = Vec::new();
    let mut rows: Vec<Row> = Vec::new();
    let mut interned: AHashMap<(String, Vec<Target>), EntryId> = AHashMap::new();

    for (source, fragments) in sources.iter().zip(fragment_lists) {
        if fragments.is_empty() {
            debug!(text = %source.text, "source entry has no indexable words");
            continue;
        }

        let targets: Vec<Target> = source
            .targets
            .iter()
            .map(|(url, context)| Target::new(url.clone(), context.clone()))
            .collect();

        match interned.entry((source.text.clone(), targets)) {
            // Duplicate record: its rows already exist.
            Slot::Occupied(_) => continue,
            Slot::Vacant(slot) => {
                let id = entries.len() as EntryId;
                let (display_text, targets) = slot.key().clone();
                let category = Category::from_url(&targets[0].url);
                entries.push(Entry {
                    display_text,
                    targets,
                    category,
                });
                slot.insert(id);

                for fragment in fragments {
                    debug_assert!(rows.len() < RowId::MAX as usize);
                    rows.push(Row {
                        fragment,
                        entry: id,
                    });
                }
            }
        }
    }

    Ok(IndexTable::new(entries, rows, TableMeta::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(text: &str, url: &str) -> SourceEntry {
        SourceEntry {
            text: text.to_string(),
            targets: vec![(url.to_string(), String::new())],
        }
    }

    #[test]
    fn test_build_emits_boundary_suffixes() {
        let table = build_table(&[source("Job Engine Handler", "class_j.html")]).unwrap();
        let fragments: Vec<_> = table.rows().iter().map(|r| r.fragment.as_str()).collect();
        assert_eq!(
            fragments,
            vec!["job engine handler", "engine handler", "handler"]
        );
    }

    #[test]
    fn test_build_no_camel_splits() {
        let table = build_table(&[source("JobEngine", "class_j.html")]).unwrap();
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.row(0).fragment, "jobengine");
    }

    #[test]
    fn test_build_collapses_identical_records() {
        let table = build_table(&[
            source("Jobs", "class_jobs.html"),
            source("Jobs", "class_jobs.html"),
        ])
        .unwrap();
        assert_eq!(table.entry_count(), 1);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_build_keeps_distinct_records_with_same_name() {
        let table = build_table(&[
            source("Jobs", "class_jobs.html"),
            source("Jobs", "namespace_jobs.html"),
        ])
        .unwrap();
        assert_eq!(table.entry_count(), 2);
        assert_eq!(table.row_count(), 2);
        assert_ne!(table.row(0).entry, table.row(1).entry);
    }

    #[test]
    fn test_build_skips_unindexable_text() {
        let table = build_table(&[source("!!!", "page.html"), source("Real", "r.html")]).unwrap();
        assert_eq!(table.entry_count(), 1);
        assert_eq!(table.entry(0).display_text, "Real");
    }

    #[test]
    fn test_build_rejects_invalid_sources() {
        assert!(build_table(&[source("", "u.html")]).is_err());
        assert!(
            build_table(&[SourceEntry {
                text: "X".to_string(),
                targets: Vec::new(),
            }])
            .is_err()
        );
        assert!(build_table(&[source("X", "")]).is_err());
    }

    #[test]
    fn test_build_rows_keep_input_order() {
        let table = build_table(&[
            source("Zeta", "z.html"),
            source("Alpha Beta", "a.html"),
        ])
        .unwrap();
        let fragments: Vec<_> = table.rows().iter().map(|r| r.fragment.as_str()).collect();
        assert_eq!(fragments, vec!["zeta", "alpha beta", "beta"]);
    }
}
